//! Design tokens for navtree CLI output.
//!
//! All icons and tree-drawing glyphs are sourced from this module.

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";

    // Tree drawing.
    pub const GROUP: &str = "▼";
    pub const BRANCH: &str = "├── ";
    pub const LAST: &str = "└── ";
    pub const PIPE: &str = "│   ";
    pub const BLANK: &str = "    ";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";

    pub const GROUP: &str = "+";
    pub const BRANCH: &str = "|-- ";
    pub const LAST: &str = "`-- ";
    pub const PIPE: &str = "|   ";
    pub const BLANK: &str = "    ";
}

/// Glyph set chosen once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub arrow: &'static str,
    pub group: &'static str,
    pub branch: &'static str,
    pub last: &'static str,
    pub pipe: &'static str,
    pub blank: &'static str,
}

impl Glyphs {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                success: icons::SUCCESS,
                error: icons::ERROR,
                warning: icons::WARNING,
                arrow: icons::ARROW,
                group: icons::GROUP,
                branch: icons::BRANCH,
                last: icons::LAST,
                pipe: icons::PIPE,
                blank: icons::BLANK,
            }
        } else {
            Self {
                success: icons_ascii::SUCCESS,
                error: icons_ascii::ERROR,
                warning: icons_ascii::WARNING,
                arrow: icons_ascii::ARROW,
                group: icons_ascii::GROUP,
                branch: icons_ascii::BRANCH,
                last: icons_ascii::LAST,
                pipe: icons_ascii::PIPE,
                blank: icons_ascii::BLANK,
            }
        }
    }
}
