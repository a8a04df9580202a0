//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NavError, NavResult};

use super::types::{Config, Policy, Verbosity};

/// File picked up from the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "navtree.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> NavResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| NavError::Config {
        file: path.to_path_buf(),
        message: e.message().trim().to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Explicit config path, else `navtree.toml` in `cwd`, else defaults.
///
/// An explicit path that does not exist is an error; a missing implicit
/// file is not.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> NavResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => {
            let implicit = cwd.join(CONFIG_FILE_NAME);
            if implicit.is_file() {
                load_with_warnings(&implicit)?
            } else {
                (Config::default(), Vec::new())
            }
        }
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (NAVTREE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable source.
///
/// Unparseable values are ignored.
pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    let policy = |key: &str| get_env(key).as_deref().and_then(Policy::parse);

    if let Some(p) = policy("NAVTREE_DUPLICATE_IDS") {
        config.validation.duplicate_ids = p;
    }
    if let Some(p) = policy("NAVTREE_DUPLICATE_LABELS") {
        config.validation.duplicate_labels = p;
    }
    if let Some(p) = policy("NAVTREE_EMPTY_GROUPS") {
        config.validation.empty_groups = p;
    }

    // NAVTREE_MAX_DEPTH ("0" or "none" clears the limit)
    if let Some(val) = get_env("NAVTREE_MAX_DEPTH") {
        let val = val.trim().to_lowercase();
        if val == "none" || val == "0" {
            config.validation.max_depth = None;
        } else if let Ok(depth) = val.parse::<usize>() {
            config.validation.max_depth = Some(depth);
        }
    }

    if let Some(v) = get_env("NAVTREE_VERBOSITY").as_deref().and_then(Verbosity::parse) {
        config.output.verbosity = v;
    }

    if let Some(format) = get_env("NAVTREE_FORMAT").and_then(|f| f.parse().ok()) {
        config.output.format = format;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "validation",
        "duplicate_ids",
        "duplicate_labels",
        "empty_groups",
        "max_depth",
        "output",
        "verbosity",
        "format",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
