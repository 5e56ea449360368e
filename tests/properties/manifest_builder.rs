//! Property tests for manifest building.

use proptest::prelude::*;

use assetmap::domain::value_objects::first_segment;
use assetmap::{AssetRecord, BuildSnapshot, ManifestBuilder, OutputGroup};

fn segment() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,8}"
}

fn filename() -> impl Strategy<Value = String> {
    (
        segment(),
        "[0-9a-f]{6}",
        prop::sample::select(vec!["js", "css", "png", "svg", "jpg", "woff2", "gif"]),
        prop::option::of(prop::sample::select(vec!["map", "gz", "GZ"])),
    )
        .prop_map(|(stem, hash, ext, wrapper)| match wrapper {
            Some(wrapper) => format!("{stem}.{hash}.{ext}.{wrapper}"),
            None => format!("{stem}.{hash}.{ext}"),
        })
}

fn snapshot() -> impl Strategy<Value = BuildSnapshot> {
    (
        prop::collection::vec(
            (segment(), prop::collection::vec(filename(), 1..4)),
            0..5,
        ),
        prop::collection::vec(filename(), 0..8),
    )
        .prop_map(|(groups, assets)| {
            let groups = groups
                .into_iter()
                .map(|(name, files)| (name, OutputGroup::Many(files)))
                .collect();
            let assets = assets.into_iter().map(AssetRecord::new).collect();
            BuildSnapshot::new(groups, assets)
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: classification never panics on arbitrary input.
    #[test]
    fn property_classify_never_panics(name in ".*") {
        let builder = ManifestBuilder::new();
        let tag = builder.classify_extension(&name);
        prop_assert!(name.ends_with(tag.as_str()));
    }

    /// PROPERTY: building twice from the same snapshot yields identical bytes.
    #[test]
    fn property_build_is_deterministic(snapshot in snapshot()) {
        let builder = ManifestBuilder::new();
        let first = builder.build(&snapshot);
        let second = builder.build(&snapshot);
        prop_assert_eq!(first.artifact.source(), second.artifact.source());
        prop_assert_eq!(first.artifact.size(), first.artifact.source().len());
    }

    /// PROPERTY: with a base path every key and value carries the prefix, and
    /// stripping it gives back the unprefixed manifest.
    #[test]
    fn property_base_path_prefixes_everything(snapshot in snapshot(), base in "/[a-z]{1,6}/") {
        let plain = ManifestBuilder::new().build(&snapshot).manifest;
        let prefixed = ManifestBuilder::new().with_base_path(base.clone()).build(&snapshot).manifest;

        prop_assert_eq!(plain.len(), prefixed.len());
        for ((key, value), (pkey, pvalue)) in plain.iter().zip(prefixed.iter()) {
            prop_assert_eq!(format!("{base}{key}"), pkey);
            prop_assert_eq!(format!("{base}{value}"), pvalue);
        }
    }

    /// PROPERTY: within a single group the first listed file wins its tag.
    #[test]
    fn property_first_listed_file_wins(name in segment(), files in prop::collection::vec(filename(), 1..6)) {
        let builder = ManifestBuilder::new();
        let manifest = builder.build_from_output_groups(&[(name.clone(), OutputGroup::Many(files.clone()))]);

        for (key, value) in manifest.iter() {
            let tag = key.strip_prefix(&format!("{name}.")).unwrap();
            let first = files
                .iter()
                .find(|f| builder.classify_extension(f).as_str() == tag)
                .unwrap();
            prop_assert_eq!(value, first.as_str());
        }
    }

    /// PROPERTY: image keys are the first segment joined with the tag, and
    /// only image-tagged assets produce entries.
    #[test]
    fn property_image_keys_use_first_segment(names in prop::collection::vec(filename(), 0..10)) {
        let builder = ManifestBuilder::new();
        let assets: Vec<AssetRecord> = names.iter().cloned().map(AssetRecord::new).collect();
        let manifest = builder.build_from_image_assets(&assets);

        for (key, value) in manifest.iter() {
            let tag = builder.classify_extension(value);
            prop_assert!(builder.is_image(&tag));
            prop_assert_eq!(key, format!("{}.{}", first_segment(value), tag));
        }
        let image_count = names
            .iter()
            .filter(|n| builder.is_image(&builder.classify_extension(n)))
            .map(|n| format!("{}.{}", first_segment(n), builder.classify_extension(n)))
            .collect::<std::collections::HashSet<_>>()
            .len();
        prop_assert_eq!(manifest.len(), image_count);
    }
}
