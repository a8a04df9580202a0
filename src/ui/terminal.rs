#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_unicode: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok())
}

fn detect_capabilities_impl(get_env: impl Fn(&str) -> Option<String>) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    TerminalCapabilities {
        supports_unicode: !term_is_dumb && unicode_locale(&get_env),
    }
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for k in KEYS {
        if let Some(val) = get_env(k) {
            let v = val.to_lowercase();
            if v.is_empty() {
                continue;
            }
            // First non-empty locale variable wins (LC_ALL overrides LANG).
            return v.contains("utf-8") || v.contains("utf8");
        }
    }

    // No locale set: assume a modern UTF-8 terminal.
    true
}
