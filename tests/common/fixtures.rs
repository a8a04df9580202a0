//! Reusable sidebar documents.

/// Small well-formed tree in YAML.
pub const SIMPLE_YAML: &str = r#"
docs:
  - intro
  - Guides:
      - guides/setup
      - Advanced:
          - guides/advanced/tuning
  - faq
api:
  - api/overview
"#;

/// The same tree as `SIMPLE_YAML`, in JSON.
pub const SIMPLE_JSON: &str = r#"{
  "docs": [
    "intro",
    { "Guides": ["guides/setup", { "Advanced": ["guides/advanced/tuning"] }] },
    "faq"
  ],
  "api": ["api/overview"]
}
"#;

/// `faq` appears twice.
pub const DUPLICATE_ID_YAML: &str = r#"
docs:
  - faq
  - Help:
      - faq
"#;

/// A group with nothing in it.
pub const EMPTY_GROUP_YAML: &str = r#"
docs:
  - intro
  - Later: []
"#;

/// The second entry of `Guides` is a number.
pub const MALFORMED_YAML: &str = r#"
docs:
  - intro
  - Guides:
      - guides/setup
      - 42
"#;
