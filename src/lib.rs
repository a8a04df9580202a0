//! navtree - documentation sidebar navigation trees
//!
//! A sidebar document maps sidebar names to ordered entries, where each entry
//! is either a document id or a labeled group of further entries. navtree
//! loads such documents from JSON, YAML or TOML while keeping declaration
//! order, validates them, and emits them again in any supported format.
//!
//! The site's own `docs` sidebar is compiled in and available through
//! [`builtin::docs`].

pub mod builtin;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod validate;

// Re-exports for convenience
pub use config::Config;
pub use error::{NavError, NavResult};
pub use models::{EntryPath, Node, NodeKind, SidebarEntry, SidebarGroup, SidebarId, SidebarTree};
pub use parser::{load, parse_str, to_string, Format};
pub use validate::{load_validated, validate, Diagnostic, Severity, ValidationReport};
