//! Terminal and NDJSON output for the navtree CLI.

pub mod context;
pub mod json;
pub mod output;
pub mod terminal;
pub mod theme;
pub mod tree;
