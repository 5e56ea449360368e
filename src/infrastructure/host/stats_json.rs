//! Webpack-style stats JSON
//!
//! Only two fields matter: `assetsByChunkName` (name → file or files) and
//! `assets` (every emitted file). Everything else in the stats dump is
//! ignored, and missing fields default to empty.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::entities::{AssetRecord, BuildSnapshot, OutputGroup};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatsJson {
    #[serde(default)]
    assets_by_chunk_name: Map<String, Value>,
    #[serde(default)]
    assets: Vec<AssetRecord>,
}

/// Parse stats JSON into a snapshot, keeping the chunk order of the file.
pub fn parse_stats(content: &str) -> Result<BuildSnapshot, serde_json::Error> {
    let stats: StatsJson = serde_json::from_str(content)?;

    let output_groups = stats
        .assets_by_chunk_name
        .into_iter()
        .map(|(name, files)| Ok((name, serde_json::from_value::<OutputGroup>(files)?)))
        .collect::<Result<Vec<_>, serde_json::Error>>()?;

    Ok(BuildSnapshot::new(output_groups, stats.assets))
}
