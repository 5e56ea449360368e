//! Manifest builder
//!
//! Derives the manifest from a build snapshot in three pure passes, each
//! returning a fresh mapping:
//!
//! 1. output groups: `stripped(group) + "." + tag → filename`
//! 2. image scan: `first_segment(asset) + "." + tag → asset` for every asset
//!    whose tag matches the image pattern, merged on top of pass 1
//! 3. base path: every key and value prefixed with `base_path`
//!
//! Within one multi-file group the **first-listed filename wins per extension
//! tag**. Across groups the later group wins. Image entries beat group entries.

use tracing::{debug, trace};

use crate::domain::entities::{AssetRecord, BuildSnapshot, Manifest, ManifestArtifact, OutputGroup};
use crate::domain::value_objects::{
    first_segment, join_key, ExtensionMatcher, ExtensionPattern, ExtensionTag, StripPattern,
};

/// File name used when none is configured
pub const DEFAULT_FILE_NAME: &str = "manifest.json";

/// Compression and source-map suffixes
pub const DEFAULT_TRANSFORM_EXTENSIONS: &str = r"(?i)^(gz|map)$";

/// Image tags, optionally wrapped (`png`, `svg.gz`)
pub const DEFAULT_IMAGE_EXTENSIONS: &str = r"(?i)^(jpe?g|png|gif|svg)(\.|$)";

/// Result of one build: the manifest and its serialized artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltManifest {
    pub manifest: Manifest,
    pub artifact: ManifestArtifact,
}

/// Pure manifest builder. Holds only immutable configuration.
#[derive(Debug)]
pub struct ManifestBuilder {
    base_path: String,
    file_name: String,
    strip: StripPattern,
    transform: Box<dyn ExtensionMatcher>,
    image: Box<dyn ExtensionMatcher>,
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestBuilder {
    /// Builder with the default file name and extension patterns
    pub fn new() -> Self {
        Self {
            base_path: String::new(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            strip: StripPattern::none(),
            transform: Box::new(default_pattern(DEFAULT_TRANSFORM_EXTENSIONS)),
            image: Box::new(default_pattern(DEFAULT_IMAGE_EXTENSIONS)),
        }
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_strip(mut self, strip: StripPattern) -> Self {
        self.strip = strip;
        self
    }

    pub fn with_transform_matcher(mut self, matcher: impl ExtensionMatcher + 'static) -> Self {
        self.transform = Box::new(matcher);
        self
    }

    pub fn with_image_matcher(mut self, matcher: impl ExtensionMatcher + 'static) -> Self {
        self.image = Box::new(matcher);
        self
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Extension tag of a filename under the configured transform pattern
    pub fn classify_extension(&self, filename: &str) -> ExtensionTag {
        ExtensionTag::classify(filename, self.transform.as_ref())
    }

    /// Whether a tag is recovered by the image scan
    pub fn is_image(&self, tag: &ExtensionTag) -> bool {
        self.image.matches(tag.as_str())
    }

    /// Pass 1: entries from named output groups
    pub fn build_from_output_groups(&self, groups: &[(String, OutputGroup)]) -> Manifest {
        let mut manifest = Manifest::new();

        for (name, group) in groups {
            let fragment = self.strip.strip(name);
            let group_manifest = match group {
                OutputGroup::Single(filename) => {
                    let mut single = Manifest::new();
                    single.insert(self.key_for(&fragment, filename), filename.as_str());
                    single
                }
                OutputGroup::Many(filenames) => self.build_group(&fragment, filenames),
            };

            for (key, filename) in group_manifest.iter() {
                if let Some(previous) = manifest.get(key) {
                    debug!(key, previous, filename, group = %name, "output group overrides key");
                }
            }
            manifest = manifest.merged_with(group_manifest);
        }

        manifest
    }

    /// Walk a multi-file group back to front so that, per tag, the
    /// first-listed filename is written last and wins.
    fn build_group(&self, fragment: &str, filenames: &[String]) -> Manifest {
        let mut group = Manifest::new();
        for filename in filenames.iter().rev() {
            if let Some(shadowed) = group.insert(self.key_for(fragment, filename), filename.as_str()) {
                trace!(fragment, kept = %filename, shadowed = %shadowed, "earlier file wins within group");
            }
        }
        group
    }

    /// Pass 2: image assets recovered from the full asset list
    pub fn build_from_image_assets(&self, assets: &[AssetRecord]) -> Manifest {
        let mut manifest = Manifest::new();

        for asset in assets {
            let tag = self.classify_extension(&asset.name);
            if !self.is_image(&tag) {
                trace!(asset = %asset.name, tag = %tag, "not an image, skipped");
                continue;
            }
            manifest.insert(join_key(first_segment(&asset.name), &tag), asset.name.as_str());
        }

        manifest
    }

    /// Pass 3: prefix keys and values with the base path
    pub fn apply_base_path(&self, manifest: Manifest) -> Manifest {
        apply_base_path(manifest, &self.base_path)
    }

    /// Run all passes and serialize the result
    pub fn build(&self, snapshot: &BuildSnapshot) -> BuiltManifest {
        let from_groups = self.build_from_output_groups(snapshot.output_groups());
        let from_images = self.build_from_image_assets(snapshot.assets());
        debug!(
            groups = from_groups.len(),
            images = from_images.len(),
            "manifest passes complete"
        );

        let manifest = self.apply_base_path(from_groups.merged_with(from_images));
        let artifact = ManifestArtifact::new(self.file_name.as_str(), manifest.to_json_pretty());

        BuiltManifest { manifest, artifact }
    }

    fn key_for(&self, fragment: &str, filename: &str) -> String {
        join_key(fragment, &self.classify_extension(filename))
    }
}

/// Prefix every key and every value with `base_path`. Empty passes through.
pub fn apply_base_path(manifest: Manifest, base_path: &str) -> Manifest {
    if base_path.is_empty() {
        return manifest;
    }

    manifest
        .iter()
        .map(|(key, filename)| (format!("{base_path}{key}"), format!("{base_path}{filename}")))
        .collect()
}

fn default_pattern(source: &str) -> ExtensionPattern {
    // Built-in patterns are constant and known to compile.
    ExtensionPattern::new(source).unwrap_or_else(|_| ExtensionPattern::never())
}
