use std::io::Write;
use std::path::Path;

use anyhow::Result;

use navtree::NodeKind;

use crate::ui::context::UiContext;
use crate::ui::json::events::{CompleteEvent, EntryEvent, StartEvent};
use crate::ui::json::write_event;

pub fn cmd_ids(
    ui: &UiContext,
    out: &mut dyn Write,
    source: Option<&Path>,
    sidebar: Option<&str>,
) -> Result<()> {
    if ui.json {
        write_event(out, &StartEvent::new("ids").with_source(super::source_label(source)))?;
    }

    let tree = super::load_source(source)?;
    if let Some(name) = sidebar {
        tree.get(name)?;
    }

    let ids = tree
        .ids()
        .into_iter()
        .filter(|(path, _)| sidebar.is_none() || path.sidebar() == sidebar);

    for (path, id) in ids {
        if ui.json {
            let depth = path.depth();
            write_event(out, &EntryEvent::new(&path, depth, NodeKind::Id(id)))?;
        } else if ui.verbose() {
            writeln!(out, "{}\t{}", id, path)?;
        } else {
            writeln!(out, "{}", id)?;
        }
    }

    if ui.json {
        write_event(out, &CompleteEvent::success("ids"))?;
    }
    Ok(())
}
