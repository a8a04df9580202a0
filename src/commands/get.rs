use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Result};

use navtree::{Node, NodeKind};

use crate::ui::context::UiContext;
use crate::ui::json::events::{CompleteEvent, EntryEvent, StartEvent};
use crate::ui::json::write_event;
use crate::ui::tree::{render_group, render_sidebar};

pub fn cmd_get(
    ui: &UiContext,
    out: &mut dyn Write,
    source: Option<&Path>,
    name: &str,
    group: Option<&str>,
) -> Result<()> {
    if ui.json {
        write_event(out, &StartEvent::new("get").with_source(super::source_label(source)))?;
    }

    let tree = super::load_source(source)?;
    let entries = tree.get(name).map_err(|err| {
        let declared: Vec<&str> = tree.names().collect();
        anyhow!("{} (declared: {})", err, declared.join(", "))
    })?;

    let nodes: Vec<Node<'_>> = tree
        .nodes()
        .into_iter()
        .filter(|n| n.path.sidebar() == Some(name))
        .collect();

    let (selected, text) = match group {
        None => (nodes, render_sidebar(name, entries, &ui.glyphs)),
        Some(label) => {
            let (path, found) = nodes
                .iter()
                .find_map(|n| match n.kind {
                    NodeKind::Group(g) if g.label == label => Some((n.path.group(label), g)),
                    _ => None,
                })
                .ok_or_else(|| anyhow!("group '{}' not found in sidebar '{}'", label, name))?;
            let inside: Vec<Node<'_>> = nodes
                .iter()
                .filter(|n| n.path.starts_with(&path))
                .cloned()
                .collect();
            (inside, render_group(found, &ui.glyphs))
        }
    };

    if ui.json {
        for node in &selected {
            write_event(out, &EntryEvent::new(&node.path, node.depth, node.kind))?;
        }
        write_event(out, &CompleteEvent::success("get"))?;
    } else {
        out.write_all(text.as_bytes())?;
    }
    Ok(())
}
