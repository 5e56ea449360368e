//! Property tests for stats JSON parsing.

use proptest::prelude::*;

use assetmap::parse_stats;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: arbitrary input is rejected or parsed, never a panic.
    #[test]
    fn property_parse_stats_never_panics(content in ".*") {
        let _ = parse_stats(&content);
    }

    /// PROPERTY: chunk order in the file is the group order of the snapshot.
    #[test]
    fn property_chunk_order_is_preserved(names in prop::collection::btree_set("[a-z]{1,6}", 1..6)) {
        // btree_set gives sorted unique names; reverse them so insertion order
        // differs from sorted order
        let names: Vec<String> = names.into_iter().rev().collect();
        let body = names
            .iter()
            .map(|n| format!("\"{n}\": \"{n}.1.js\""))
            .collect::<Vec<_>>()
            .join(", ");
        let snapshot = parse_stats(&format!("{{\"assetsByChunkName\": {{{body}}}}}")).unwrap();

        let parsed: Vec<&str> = snapshot.output_groups().iter().map(|(n, _)| n.as_str()).collect();
        prop_assert_eq!(parsed, names.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
