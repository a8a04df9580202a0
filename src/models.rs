//! Core data models for navtree
//!
//! Defines the navigation structures consumed by the documentation site:
//! - `SidebarTree`: ordered mapping from sidebar name to entries
//! - `SidebarEntry`: either a document id or a labeled group
//! - `SidebarGroup`: a label with its own ordered entries
//! - `EntryPath`: location of an entry, used in errors and diagnostics

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{NavError, NavResult};

/// Identifier of a single documentation page (e.g. `getting-started`).
///
/// Opaque to navtree: it is never resolved to content here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SidebarId(String);

impl SidebarId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SidebarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SidebarId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SidebarId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SidebarId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for SidebarId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// A labeled, ordered collection of entries rendered as a collapsible section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarGroup {
    pub label: String,
    pub items: Vec<SidebarEntry>,
}

impl SidebarGroup {
    pub fn new(label: impl Into<String>, items: Vec<SidebarEntry>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }

    /// Document ids directly inside this group (nested groups skipped).
    pub fn ids(&self) -> Vec<&SidebarId> {
        self.items.iter().filter_map(SidebarEntry::as_id).collect()
    }

    /// Depth-first search for the first nested group with `label`.
    pub fn find_group(&self, label: &str) -> Option<&SidebarGroup> {
        find_group_in(&self.items, label)
    }
}

impl Serialize for SidebarGroup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.label, &self.items)?;
        map.end()
    }
}

/// One sidebar item: a leaf page reference or a nested group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEntry {
    Id(SidebarId),
    Group(SidebarGroup),
}

impl SidebarEntry {
    pub fn id(id: impl Into<SidebarId>) -> Self {
        Self::Id(id.into())
    }

    pub fn group(label: impl Into<String>, items: Vec<SidebarEntry>) -> Self {
        Self::Group(SidebarGroup::new(label, items))
    }

    pub fn as_id(&self) -> Option<&SidebarId> {
        match self {
            Self::Id(id) => Some(id),
            Self::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&SidebarGroup> {
        match self {
            Self::Id(_) => None,
            Self::Group(group) => Some(group),
        }
    }
}

impl Serialize for SidebarEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Id(id) => id.serialize(serializer),
            Self::Group(group) => group.serialize(serializer),
        }
    }
}

/// Ordered mapping from sidebar name (e.g. `docs`) to its entries.
///
/// Declaration order is kept for both the sidebar names and their entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SidebarTree {
    sidebars: Vec<(String, Vec<SidebarEntry>)>,
}

impl SidebarTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a sidebar. Redeclaring a name replaces its entries in place.
    pub fn with_sidebar(mut self, name: impl Into<String>, entries: Vec<SidebarEntry>) -> Self {
        let name = name.into();
        match self.sidebars.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = entries,
            None => self.sidebars.push((name, entries)),
        }
        self
    }

    /// Look up a sidebar by exact name.
    pub fn get(&self, name: &str) -> NavResult<&[SidebarEntry]> {
        self.sidebars
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, entries)| entries.as_slice())
            .ok_or_else(|| NavError::NotFound {
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sidebars.iter().map(|(n, _)| n.as_str())
    }

    pub fn sidebars(&self) -> impl Iterator<Item = (&str, &[SidebarEntry])> {
        self.sidebars
            .iter()
            .map(|(n, entries)| (n.as_str(), entries.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }

    /// Depth-first search across all sidebars for the first group with `label`.
    pub fn find_group(&self, label: &str) -> Option<&SidebarGroup> {
        self.sidebars
            .iter()
            .find_map(|(_, entries)| find_group_in(entries, label))
    }

    /// Every id and group in document order, with its location and depth.
    ///
    /// Top-level entries have depth 1.
    pub fn nodes(&self) -> Vec<Node<'_>> {
        let mut out = Vec::new();
        for (name, entries) in &self.sidebars {
            collect_nodes(entries, &EntryPath::root(name), 1, &mut out);
        }
        out
    }

    /// Every document id in document order.
    pub fn ids(&self) -> Vec<(EntryPath, &SidebarId)> {
        self.nodes()
            .into_iter()
            .filter_map(|node| match node.kind {
                NodeKind::Id(id) => Some((node.path, id)),
                NodeKind::Group(_) => None,
            })
            .collect()
    }
}

impl Serialize for SidebarTree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.sidebars.len()))?;
        for (name, entries) in &self.sidebars {
            map.serialize_entry(name, entries)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SidebarTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = crate::parser::raw::RawNode::deserialize(deserializer)?;
        crate::parser::lower::lower_tree(raw).map_err(serde::de::Error::custom)
    }
}

fn find_group_in<'a>(entries: &'a [SidebarEntry], label: &str) -> Option<&'a SidebarGroup> {
    entries.iter().find_map(|entry| match entry {
        SidebarEntry::Id(_) => None,
        SidebarEntry::Group(group) if group.label == label => Some(group),
        SidebarEntry::Group(group) => find_group_in(&group.items, label),
    })
}

fn collect_nodes<'a>(
    entries: &'a [SidebarEntry],
    parent: &EntryPath,
    depth: usize,
    out: &mut Vec<Node<'a>>,
) {
    for (i, entry) in entries.iter().enumerate() {
        let path = parent.index(i);
        match entry {
            SidebarEntry::Id(id) => out.push(Node {
                path,
                depth,
                kind: NodeKind::Id(id),
            }),
            SidebarEntry::Group(group) => {
                let inner = path.group(&group.label);
                out.push(Node {
                    path,
                    depth,
                    kind: NodeKind::Group(group),
                });
                collect_nodes(&group.items, &inner, depth + 1, out);
            }
        }
    }
}

/// A visited entry produced by [`SidebarTree::nodes`].
#[derive(Debug, Clone, PartialEq)]
pub struct Node<'a> {
    pub path: EntryPath,
    pub depth: usize,
    pub kind: NodeKind<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind<'a> {
    Id(&'a SidebarId),
    Group(&'a SidebarGroup),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Root(String),
    Index(usize),
    Group(String),
}

/// Location of an entry inside a tree, displayed as `docs[2]/Statsig Console[1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPath {
    segments: Vec<Segment>,
}

impl EntryPath {
    /// Path of a top-level sidebar.
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Root(name.into())],
        }
    }

    /// Path of the document root, before any sidebar name is known.
    pub fn document() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// The `i`-th entry of the list at this path.
    pub fn index(&self, i: usize) -> Self {
        self.push(Segment::Index(i))
    }

    /// The entry list of the group labeled `label` at this path.
    pub fn group(&self, label: impl Into<String>) -> Self {
        self.push(Segment::Group(label.into()))
    }

    /// Name of the sidebar this path points into.
    pub fn sidebar(&self) -> Option<&str> {
        match self.segments.first() {
            Some(Segment::Root(name)) => Some(name),
            _ => None,
        }
    }

    /// Nesting depth of the entry; top-level entries are depth 1.
    pub fn depth(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Index(_)))
            .count()
    }

    /// Whether this path lies at or below `prefix`.
    pub fn starts_with(&self, prefix: &EntryPath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    fn push(&self, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for segment in &self.segments {
            match segment {
                Segment::Root(name) => f.write_str(name)?,
                Segment::Index(i) => write!(f, "[{}]", i)?,
                Segment::Group(label) => write!(f, "/{}", label)?,
            }
        }
        Ok(())
    }
}

impl Serialize for EntryPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SidebarTree {
        SidebarTree::new().with_sidebar(
            "docs",
            vec![
                SidebarEntry::id("intro"),
                SidebarEntry::group(
                    "Guides",
                    vec![
                        SidebarEntry::id("guides/one"),
                        SidebarEntry::group("Deep", vec![SidebarEntry::id("guides/deep")]),
                    ],
                ),
                SidebarEntry::id("outro"),
            ],
        )
    }

    #[test]
    fn test_get_declared_sidebar() {
        let tree = sample();
        let entries = tree.get("docs").unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], SidebarEntry::id("intro"));
    }

    #[test]
    fn test_get_undeclared_sidebar_is_not_found() {
        let tree = sample();
        let err = tree.get("api").unwrap_err();
        assert!(matches!(err, NavError::NotFound { ref name } if name == "api"));
    }

    #[test]
    fn test_get_is_exact_match() {
        let tree = sample();
        assert!(tree.get("Docs").is_err());
        assert!(tree.get("docs ").is_err());
    }

    #[test]
    fn test_with_sidebar_keeps_declaration_order() {
        let tree = SidebarTree::new()
            .with_sidebar("zeta", vec![])
            .with_sidebar("alpha", vec![])
            .with_sidebar("zeta", vec![SidebarEntry::id("z")]);
        let names: Vec<_> = tree.names().collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(tree.get("zeta").unwrap().len(), 1);
    }

    #[test]
    fn test_find_group_is_depth_first() {
        let tree = sample();
        let deep = tree.find_group("Deep").unwrap();
        assert_eq!(deep.ids(), vec![&SidebarId::new("guides/deep")]);
        assert!(tree.find_group("Missing").is_none());
    }

    #[test]
    fn test_nodes_report_paths_and_depths() {
        let tree = sample();
        let nodes = tree.nodes();
        let summary: Vec<(String, usize)> = nodes
            .iter()
            .map(|n| (n.path.to_string(), n.depth))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("docs[0]".to_string(), 1),
                ("docs[1]".to_string(), 1),
                ("docs[1]/Guides[0]".to_string(), 2),
                ("docs[1]/Guides[1]".to_string(), 2),
                ("docs[1]/Guides[1]/Deep[0]".to_string(), 3),
                ("docs[2]".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_ids_in_document_order() {
        let tree = sample();
        let ids: Vec<&str> = tree.ids().into_iter().map(|(_, id)| id.as_str()).collect();
        assert_eq!(ids, vec!["intro", "guides/one", "guides/deep", "outro"]);
    }

    #[test]
    fn test_serialize_group_as_single_key_object() {
        let entry = SidebarEntry::group("Guides", vec![SidebarEntry::id("a")]);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"Guides":["a"]}"#);
    }

    #[test]
    fn test_entry_path_display() {
        assert_eq!(EntryPath::document().to_string(), "<root>");
        assert_eq!(EntryPath::root("docs").to_string(), "docs");
        let path = EntryPath::root("docs").index(1).group("Guides").index(0);
        assert_eq!(path.to_string(), "docs[1]/Guides[0]");
        assert_eq!(path.sidebar(), Some("docs"));
        assert_eq!(path.depth(), 2);
    }

    #[test]
    fn test_entry_path_starts_with() {
        let group = EntryPath::root("docs").index(1).group("Guides");
        assert!(group.index(0).starts_with(&group));
        assert!(!EntryPath::root("docs").index(2).starts_with(&group));
        assert!(!EntryPath::root("api").starts_with(&EntryPath::root("docs")));
    }
}
