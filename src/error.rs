//! Error types for navtree
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::models::EntryPath;
use crate::parser::Format;

/// Result type alias for navtree operations
pub type NavResult<T> = Result<T, NavError>;

/// Main error type for navtree operations
#[derive(Error, Debug)]
pub enum NavError {
    /// Lookup of a sidebar name that the tree does not declare
    #[error("sidebar '{name}' not found")]
    NotFound { name: String },

    /// An entry that is neither a document id nor a well-formed group
    #[error("malformed entry at {path}: {reason}")]
    Malformed { path: EntryPath, reason: String },

    /// Syntax error reported by the underlying format
    #[error("invalid {format} document: {message}")]
    Parse { format: Format, message: String },

    /// File extension does not map to a known format
    #[error("cannot infer format of {path} (expected .json, .yaml, .yml or .toml)")]
    UnknownFormat { path: PathBuf },

    /// Emitting a tree failed
    #[error("failed to write {format}: {message}")]
    Serialize { format: Format, message: String },

    /// Validation found errors
    #[error("sidebar validation failed with {errors} error(s)")]
    Validation { errors: usize },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_found() {
        let err = NavError::NotFound {
            name: "nonexistent".to_string(),
        };
        assert_eq!(err.to_string(), "sidebar 'nonexistent' not found");
    }

    #[test]
    fn test_error_display_malformed() {
        let err = NavError::Malformed {
            path: EntryPath::root("docs").index(2).group("Statsig Console").index(1),
            reason: "expected a document id or a single-key group, found integer".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed entry at docs[2]/Statsig Console[1]: expected a document id or a single-key group, found integer"
        );
    }

    #[test]
    fn test_error_display_unknown_format() {
        let err = NavError::UnknownFormat {
            path: PathBuf::from("sidebars.js"),
        };
        assert_eq!(
            err.to_string(),
            "cannot infer format of sidebars.js (expected .json, .yaml, .yml or .toml)"
        );
    }
}
