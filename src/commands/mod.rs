//! CLI command handlers
//!
//! Each handler writes its primary output to `out` and returns whether the
//! run succeeded; hard failures are returned as errors.

mod check;
mod convert;
mod get;
mod ids;
mod show;

use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use navtree::config::Config;
use navtree::{builtin, parser, Format, SidebarTree};

use crate::cli::Commands;
use crate::ui::context::UiContext;

pub use check::cmd_check;
pub use convert::cmd_convert;
pub use get::cmd_get;
pub use ids::cmd_ids;
pub use show::cmd_show;

pub fn dispatch(ui: &UiContext, config: &Config, out: &mut dyn Write, command: Commands) -> Result<bool> {
    match command {
        Commands::Check {
            source,
            strict_warnings,
            max_depth,
        } => {
            let mut validation = config.validation.clone();
            if let Some(depth) = max_depth {
                validation.max_depth = Some(depth.get());
            }
            cmd_check(ui, &validation, out, source.as_deref(), strict_warnings)
        }
        Commands::Get {
            name,
            source,
            group,
        } => cmd_get(ui, out, source.as_deref(), &name, group.as_deref()).map(|_| true),
        Commands::Show { source } => cmd_show(ui, out, source.as_deref()).map(|_| true),
        Commands::Ids { source, sidebar } => {
            cmd_ids(ui, out, source.as_deref(), sidebar.as_deref()).map(|_| true)
        }
        Commands::Convert { source, to, output } => {
            // --to, else the output file's extension, else config
            let format = to
                .or_else(|| output.as_deref().and_then(|p| Format::from_path(p).ok()))
                .unwrap_or(config.output.format);
            cmd_convert(ui, out, source.as_deref(), format, output.as_deref()).map(|_| true)
        }
    }
}

/// The document at `source`, or the built-in tree.
pub(crate) fn load_source(source: Option<&Path>) -> Result<Cow<'static, SidebarTree>> {
    match source {
        Some(path) => {
            let tree = parser::load(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            Ok(Cow::Owned(tree))
        }
        None => Ok(Cow::Borrowed(builtin::docs())),
    }
}

/// Display name of the source for headers and events.
pub(crate) fn source_label(source: Option<&Path>) -> String {
    match source {
        Some(path) => path.display().to_string(),
        None => "<built-in>".to_string(),
    }
}
