use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::ui::context::UiContext;
use crate::ui::json::events::{CompleteEvent, EntryEvent, StartEvent};
use crate::ui::json::write_event;
use crate::ui::tree::render_tree;

pub fn cmd_show(ui: &UiContext, out: &mut dyn Write, source: Option<&Path>) -> Result<()> {
    if ui.json {
        write_event(out, &StartEvent::new("show").with_source(super::source_label(source)))?;
    }

    let tree = super::load_source(source)?;

    if ui.json {
        for node in tree.nodes() {
            write_event(out, &EntryEvent::new(&node.path, node.depth, node.kind))?;
        }
        write_event(out, &CompleteEvent::success("show"))?;
    } else {
        out.write_all(render_tree(&tree, &ui.glyphs).as_bytes())?;
    }
    Ok(())
}
