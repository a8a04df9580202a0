use std::io::{self, Write};

use navtree::config::ConfigWarning;
use navtree::validate::{Severity, ValidationReport};

use super::context::UiContext;
use super::json::events::{ConfigWarningEvent, DiagnosticEvent, ErrorEvent};
use super::json::write_event;

pub fn print_config_warnings(
    ui: &UiContext,
    out: &mut dyn Write,
    warnings: &[ConfigWarning],
) -> io::Result<()> {
    for w in warnings {
        if ui.json {
            write_event(out, &ConfigWarningEvent::from(w))?;
            continue;
        }
        if !ui.human() {
            continue;
        }

        let icon = ui.glyphs.warning;
        if let Some(line) = w.line {
            eprintln!("{} Unknown config key '{}' in {}:{}", icon, w.key, w.file.display(), line);
        } else {
            eprintln!("{} Unknown config key '{}' in {}", icon, w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
    Ok(())
}

/// Diagnostics go to stderr; errors are printed even at `quiet`.
pub fn print_diagnostics(
    ui: &UiContext,
    out: &mut dyn Write,
    report: &ValidationReport,
) -> io::Result<()> {
    for d in report.diagnostics() {
        if ui.json {
            write_event(out, &DiagnosticEvent::from(d))?;
            continue;
        }
        match d.severity {
            Severity::Error => eprintln!("{} {}", ui.glyphs.error, d),
            Severity::Warning if ui.human() => eprintln!("{} {}", ui.glyphs.warning, d),
            Severity::Warning => {}
        }
    }
    Ok(())
}

pub fn print_error(ui: &UiContext, command: &str, err: &anyhow::Error) {
    if ui.json {
        let mut out = io::stdout().lock();
        // stdout may already be closed; nothing left to report to
        let _ = write_event(&mut out, &ErrorEvent::new(command, format!("{:#}", err)));
        return;
    }
    eprintln!("{} Error: {:#}", ui.glyphs.error, err);
}
