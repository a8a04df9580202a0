//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::NavResult;
use crate::parser::Format;
use crate::validate::Severity;

use super::loader::{self, ConfigWarning};

/// How a validation finding is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Not reported
    Allow,
    /// Reported as a warning
    Warn,
    /// Reported as an error (fails `check`)
    Deny,
}

impl Policy {
    pub fn severity(self) -> Option<Severity> {
        match self {
            Policy::Allow => None,
            Policy::Warn => Some(Severity::Warning),
            Policy::Deny => Some(Severity::Error),
        }
    }

    pub fn parse(s: &str) -> Option<Policy> {
        match s.trim().to_lowercase().as_str() {
            "allow" | "off" => Some(Policy::Allow),
            "warn" | "warning" => Some(Policy::Warn),
            "deny" | "error" => Some(Policy::Deny),
            _ => None,
        }
    }
}

/// Validation policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_deny")]
    pub duplicate_ids: Policy,

    #[serde(default = "default_warn")]
    pub duplicate_labels: Policy,

    #[serde(default = "default_warn")]
    pub empty_groups: Policy,

    /// Deepest allowed nesting; top-level entries are depth 1.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            duplicate_ids: Policy::Deny,
            duplicate_labels: Policy::Warn,
            empty_groups: Policy::Warn,
            max_depth: None,
        }
    }
}

fn default_deny() -> Policy {
    Policy::Deny
}

fn default_warn() -> Policy {
    Policy::Warn
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub fn parse(s: &str) -> Option<Verbosity> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }

    /// Raise the level by the number of `-v` flags.
    pub fn raised_by(self, count: u8) -> Verbosity {
        match (self as u8).saturating_add(count) {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            2 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    /// Default target of `convert` when `--to` is omitted
    #[serde(default)]
    pub format: Format,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> NavResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> NavResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the config file (explicit path, else `./navtree.toml`) and
    /// apply environment overrides.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> NavResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, cwd)
    }

    /// Apply environment variable overrides (NAVTREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
