//! Property tests for validation.

use proptest::prelude::*;

use navtree::config::ValidationConfig;
use navtree::{validate, SidebarEntry, SidebarTree};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every repeated id is reported exactly once per repeat.
    #[test]
    fn property_duplicate_ids_counted(ids in proptest::collection::vec("[a-d]", 0..12)) {
        let entries = ids.iter().map(|id| SidebarEntry::id(id.as_str())).collect();
        let tree = SidebarTree::new().with_sidebar("docs", entries);

        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();

        let report = validate(&tree, &ValidationConfig::default());
        prop_assert_eq!(report.error_count(), ids.len() - unique.len());
    }

    /// PROPERTY: Validation never panics whatever the depth limit.
    #[test]
    fn property_validate_any_max_depth(max in 0usize..5) {
        let config = ValidationConfig {
            max_depth: Some(max),
            ..ValidationConfig::default()
        };
        let _ = validate(navtree::builtin::docs(), &config);
    }
}
