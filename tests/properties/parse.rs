//! Property tests for parsing untrusted input.

use proptest::prelude::*;

use navtree::{parse_str, Format, NavError};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input in any format.
    #[test]
    fn property_parse_never_panics(content in "(?s).{0,256}") {
        for format in Format::ALL {
            let _ = parse_str(&content, format);
        }
    }

    /// PROPERTY: A non-string entry is always reported at its exact index.
    #[test]
    fn property_malformed_entry_reports_index(
        before in 0usize..6,
        bad in prop_oneof![Just("1"), Just("true"), Just("null"), Just("[]"), Just("2.5")],
    ) {
        let mut items: Vec<String> = (0..before).map(|i| format!("\"id-{i}\"")).collect();
        items.push(bad.to_string());
        let json = format!("{{\"docs\": [{}]}}", items.join(", "));

        match parse_str(&json, Format::Json) {
            Err(NavError::Malformed { path, .. }) => {
                prop_assert_eq!(path.to_string(), format!("docs[{before}]"));
            }
            other => prop_assert!(false, "expected Malformed, got {:?}", other),
        }
    }
}
