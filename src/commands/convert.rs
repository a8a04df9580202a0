use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use navtree::{parser, Format};

use crate::ui::context::UiContext;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::json::write_event;

/// Converted document, emitted in JSON mode when writing to stdout.
#[derive(Debug, Serialize)]
struct DocumentEvent<'a> {
    event: &'static str,
    format: Format,
    content: &'a str,
}

pub fn cmd_convert(
    ui: &UiContext,
    out: &mut dyn Write,
    source: Option<&Path>,
    format: Format,
    output: Option<&Path>,
) -> Result<()> {
    if ui.json {
        write_event(out, &StartEvent::new("convert").with_source(super::source_label(source)))?;
    }

    let tree = super::load_source(source)?;
    let rendered = parser::to_string(&tree, format)?;

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            if ui.human() {
                eprintln!("{} Wrote {} to {}", ui.glyphs.success, format, path.display());
            }
        }
        None if ui.json => write_event(
            out,
            &DocumentEvent {
                event: "document",
                format,
                content: &rendered,
            },
        )?,
        None => out.write_all(rendered.as_bytes())?,
    }

    if ui.json {
        write_event(out, &CompleteEvent::success("convert"))?;
    }
    Ok(())
}
