//! Property tests for emit-then-parse round trips.

use proptest::prelude::*;

use navtree::{parse_str, to_string, Format, SidebarEntry, SidebarTree};

fn label() -> BoxedStrategy<String> {
    // Spaces, slashes and colons show up in real labels and force quoting.
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9 /:_-]{0,12}")
        .unwrap()
        .boxed()
}

fn control_label() -> BoxedStrategy<String> {
    // Quotes, backslashes and control characters must be escaped, never
    // written raw or as multi-line strings.
    proptest::string::string_regex(r#"[A-Za-z][A-Za-z0-9 /:_\n\t\r\x01"\\-]{0,12}"#)
        .unwrap()
        .boxed()
}

fn entry_with(label: BoxedStrategy<String>) -> impl Strategy<Value = SidebarEntry> {
    let leaf = label.clone().prop_map(SidebarEntry::id);
    leaf.prop_recursive(4, 32, 5, move |inner| {
        prop_oneof![
            label.clone().prop_map(SidebarEntry::id),
            (label.clone(), proptest::collection::vec(inner, 0..5))
                .prop_map(|(label, items)| SidebarEntry::group(label, items)),
        ]
    })
}

fn tree_with(label: BoxedStrategy<String>) -> impl Strategy<Value = SidebarTree> {
    proptest::collection::vec(
        (label.clone(), proptest::collection::vec(entry_with(label), 0..6)),
        0..4,
    )
    .prop_map(|sidebars| {
        sidebars
            .into_iter()
            .fold(SidebarTree::new(), |tree, (name, entries)| {
                tree.with_sidebar(name, entries)
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Emitting a tree and parsing it back yields the same tree,
    /// order included, in every format.
    #[test]
    fn property_emit_then_parse_is_identity(tree in tree_with(label())) {
        for format in Format::ALL {
            let out = to_string(&tree, format).unwrap();
            let back = parse_str(&out, format)
                .unwrap_or_else(|e| panic!("{format} output did not parse: {e}\n{out}"));
            prop_assert_eq!(&back, &tree, "format {}:\n{}", format, out);
        }
    }

    /// PROPERTY: Converting between formats never changes the id sequence.
    #[test]
    fn property_conversion_keeps_id_order(tree in tree_with(label())) {
        let ids = |t: &SidebarTree| -> Vec<String> {
            t.ids().into_iter().map(|(path, id)| format!("{path}={id}")).collect()
        };
        let yaml = to_string(&tree, Format::Yaml).unwrap();
        let via_yaml = parse_str(&yaml, Format::Yaml).unwrap();
        let toml = to_string(&via_yaml, Format::Toml).unwrap();
        let via_toml = parse_str(&toml, Format::Toml).unwrap();
        prop_assert_eq!(ids(&via_toml), ids(&tree));
    }

    /// PROPERTY: Names, labels and ids with control characters survive
    /// JSON and TOML round trips.
    #[test]
    fn property_control_characters_round_trip(tree in tree_with(control_label())) {
        for format in [Format::Json, Format::Toml] {
            let out = to_string(&tree, format).unwrap();
            let back = parse_str(&out, format)
                .unwrap_or_else(|e| panic!("{format} output did not parse: {e}\n{out}"));
            prop_assert_eq!(&back, &tree, "format {}:\n{}", format, out);
        }
    }
}
