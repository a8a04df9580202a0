use std::io::Write;
use std::path::Path;

use anyhow::Result;

use navtree::config::ValidationConfig;
use navtree::validate::validate;
use navtree::NodeKind;

use crate::ui::context::UiContext;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::json::write_event;
use crate::ui::output::print_diagnostics;

pub fn cmd_check(
    ui: &UiContext,
    validation: &ValidationConfig,
    out: &mut dyn Write,
    source: Option<&Path>,
    strict_warnings: bool,
) -> Result<bool> {
    let label = super::source_label(source);
    if ui.json {
        write_event(out, &StartEvent::new("check").with_source(&label))?;
    }

    let tree = super::load_source(source)?;
    let report = validate(&tree, validation);
    print_diagnostics(ui, out, &report)?;

    let errors = report.error_count();
    let warnings = report.warning_count();
    let failed = errors > 0 || (strict_warnings && warnings > 0);

    if ui.json {
        let event = if failed {
            CompleteEvent::failure("check")
        } else {
            CompleteEvent::success("check")
        };
        write_event(out, &event.with_counts(errors, warnings))?;
        return Ok(!failed);
    }

    if ui.verbose() {
        let nodes = tree.nodes();
        for name in tree.names() {
            let in_sidebar = nodes.iter().filter(|n| n.path.sidebar() == Some(name));
            let (ids, groups) = in_sidebar.fold((0, 0), |(ids, groups), n| match n.kind {
                NodeKind::Id(_) => (ids + 1, groups),
                NodeKind::Group(_) => (ids, groups + 1),
            });
            eprintln!("{} {}: {} ids, {} groups", ui.glyphs.arrow, name, ids, groups);
        }
    }

    if failed {
        eprintln!(
            "{} {}: {} error(s), {} warning(s)",
            ui.glyphs.error, label, errors, warnings
        );
    } else if ui.human() {
        writeln!(
            out,
            "{} {}: {} sidebar(s), {} document id(s), {} warning(s)",
            ui.glyphs.success,
            label,
            tree.len(),
            tree.ids().len(),
            warnings
        )?;
    }

    Ok(!failed)
}
