//! Shared JSON event types for consistent CLI output.

use serde::Serialize;

use navtree::config::ConfigWarning;
use navtree::validate::{Diagnostic, Severity};
use navtree::{EntryPath, NodeKind};

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Event emitted when a command finishes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<usize>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            errors: None,
            warnings: None,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            success: false,
            ..Self::success(command)
        }
    }

    pub fn with_counts(mut self, errors: usize, warnings: usize) -> Self {
        self.errors = Some(errors);
        self.warnings = Some(warnings);
        self
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
        }
    }
}

/// One validation finding.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticEvent<'a> {
    pub event: &'static str,
    pub severity: Severity,
    pub code: &'static str,
    pub path: &'a EntryPath,
    pub message: String,
}

impl<'a> From<&'a Diagnostic> for DiagnosticEvent<'a> {
    fn from(d: &'a Diagnostic) -> Self {
        Self {
            event: "diagnostic",
            severity: d.severity,
            code: d.finding.code(),
            path: &d.path,
            message: d.finding.to_string(),
        }
    }
}

/// Unknown key in the config file.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigWarningEvent<'a> {
    pub event: &'static str,
    pub key: &'a str,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<&'a str>,
}

impl<'a> From<&'a ConfigWarning> for ConfigWarningEvent<'a> {
    fn from(w: &'a ConfigWarning) -> Self {
        Self {
            event: "config_warning",
            key: &w.key,
            file: w.file.display().to_string(),
            line: w.line,
            suggestion: w.suggestion.as_deref(),
        }
    }
}

/// One sidebar entry, emitted in document order by `get`, `show` and `ids`.
#[derive(Debug, Clone, Serialize)]
pub struct EntryEvent<'a> {
    pub event: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub path: &'a EntryPath,
    pub depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
}

impl<'a> EntryEvent<'a> {
    pub fn new(path: &'a EntryPath, depth: usize, kind: NodeKind<'a>) -> Self {
        let (kind, id, label) = match kind {
            NodeKind::Id(id) => ("id", Some(id.as_str()), None),
            NodeKind::Group(group) => ("group", None, Some(group.label.as_str())),
        };
        Self {
            event: "entry",
            kind,
            path,
            depth,
            id,
            label,
        }
    }
}
