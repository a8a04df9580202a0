//! Integrity checks for sidebar trees
//!
//! Nothing here is enforced by construction: a tree with duplicate ids still
//! loads and renders. The validator reports such problems so that authors and
//! CI can decide, through [`ValidationConfig`], how loudly to fail.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::config::ValidationConfig;
use crate::error::{NavError, NavResult};
use crate::models::{EntryPath, NodeKind, SidebarTree};
use crate::parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// What a diagnostic is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Same document id listed twice; `first` is the earlier occurrence
    DuplicateId { id: String, first: EntryPath },
    /// Same group label used twice
    DuplicateLabel { label: String, first: EntryPath },
    /// Group with no entries
    EmptyGroup { label: String },
    /// Empty or whitespace-only document id
    BlankId,
    /// Empty or whitespace-only group label
    BlankLabel,
    /// Entry nested deeper than `validation.max_depth`
    TooDeep { depth: usize, max: usize },
}

impl Finding {
    /// Stable machine-readable name, used in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            Finding::DuplicateId { .. } => "duplicate_id",
            Finding::DuplicateLabel { .. } => "duplicate_label",
            Finding::EmptyGroup { .. } => "empty_group",
            Finding::BlankId => "blank_id",
            Finding::BlankLabel => "blank_label",
            Finding::TooDeep { .. } => "too_deep",
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::DuplicateId { id, first } => {
                write!(f, "document id '{}' already listed at {}", id, first)
            }
            Finding::DuplicateLabel { label, first } => {
                write!(f, "group label '{}' already used at {}", label, first)
            }
            Finding::EmptyGroup { label } => write!(f, "group '{}' has no entries", label),
            Finding::BlankId => f.write_str("document id is blank"),
            Finding::BlankLabel => f.write_str("group label is blank"),
            Finding::TooDeep { depth, max } => {
                write!(f, "entry nested at depth {} (max {})", depth, max)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub path: EntryPath,
    pub finding: Finding,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.finding)
    }
}

/// Diagnostics in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.by_severity(Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }

    fn push(&mut self, severity: Option<Severity>, path: &EntryPath, finding: Finding) {
        if let Some(severity) = severity {
            self.diagnostics.push(Diagnostic {
                severity,
                path: path.clone(),
                finding,
            });
        }
    }
}

/// Run every check over the whole tree.
///
/// Ids and labels must be unique across all sidebars, not just within one.
pub fn validate(tree: &SidebarTree, config: &ValidationConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen_ids: HashMap<&str, EntryPath> = HashMap::new();
    let mut seen_labels: HashMap<&str, EntryPath> = HashMap::new();

    for node in tree.nodes() {
        if let Some(max) = config.max_depth {
            if node.depth > max {
                report.push(
                    Some(Severity::Error),
                    &node.path,
                    Finding::TooDeep {
                        depth: node.depth,
                        max,
                    },
                );
            }
        }

        match node.kind {
            NodeKind::Id(id) => {
                if id.as_str().trim().is_empty() {
                    report.push(Some(Severity::Error), &node.path, Finding::BlankId);
                    continue;
                }
                match seen_ids.get(id.as_str()) {
                    Some(first) => report.push(
                        config.duplicate_ids.severity(),
                        &node.path,
                        Finding::DuplicateId {
                            id: id.to_string(),
                            first: first.clone(),
                        },
                    ),
                    None => {
                        seen_ids.insert(id.as_str(), node.path.clone());
                    }
                }
            }
            NodeKind::Group(group) => {
                if group.label.trim().is_empty() {
                    report.push(Some(Severity::Error), &node.path, Finding::BlankLabel);
                } else {
                    match seen_labels.get(group.label.as_str()) {
                        Some(first) => report.push(
                            config.duplicate_labels.severity(),
                            &node.path,
                            Finding::DuplicateLabel {
                                label: group.label.clone(),
                                first: first.clone(),
                            },
                        ),
                        None => {
                            seen_labels.insert(group.label.as_str(), node.path.clone());
                        }
                    }
                }
                if group.items.is_empty() {
                    report.push(
                        config.empty_groups.severity(),
                        &node.path,
                        Finding::EmptyGroup {
                            label: group.label.clone(),
                        },
                    );
                }
            }
        }
    }

    report
}

/// Load a document and fail with [`NavError::Validation`] if it has errors.
///
/// On success the report is returned so callers can surface warnings.
pub fn load_validated(
    path: &Path,
    config: &ValidationConfig,
) -> NavResult<(SidebarTree, ValidationReport)> {
    let tree = parser::load(path)?;
    let report = validate(&tree, config);
    if report.has_errors() {
        return Err(NavError::Validation {
            errors: report.error_count(),
        });
    }
    Ok((tree, report))
}
