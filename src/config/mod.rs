//! Configuration module for navtree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (NAVTREE_*)
//! 3. Config file (--config, or ./navtree.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides_from, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{Config, OutputConfig, Policy, ValidationConfig, Verbosity};
