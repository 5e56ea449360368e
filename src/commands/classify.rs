use anyhow::Result;
use assetmap::config::Config;
use assetmap::domain::value_objects::{first_segment, join_key};
use assetmap::presentation::ManifestOverrides;
use assetmap::ui::json::emit_event;
use assetmap::ui::json::events::{ClassifyEvent, CompleteEvent, StartEvent};

use super::resolve_builder;

const COMMAND: &str = "classify";

pub fn cmd_classify(
    config: &Config,
    filenames: &[String],
    overrides: &ManifestOverrides,
    json: bool,
) -> Result<()> {
    let builder = resolve_builder(config, overrides)?;

    if json {
        emit_event(&StartEvent::new(COMMAND))?;
    }

    for filename in filenames {
        let tag = builder.classify_extension(filename);
        let image = builder.is_image(&tag);

        if json {
            emit_event(&ClassifyEvent::new(filename, tag.as_str(), image))?;
        } else if image {
            println!(
                "{filename}: {tag} (image, key {})",
                join_key(first_segment(filename), &tag)
            );
        } else {
            println!("{filename}: {tag}");
        }
    }

    if json {
        emit_event(&CompleteEvent::success(COMMAND))?;
    }
    Ok(())
}
