//! Lowering of `RawNode` documents into typed sidebar trees.

use crate::error::{NavError, NavResult};
use crate::models::{EntryPath, SidebarEntry, SidebarId, SidebarTree};

use super::raw::RawNode;

/// Convert a whole document. The root must map sidebar names to lists.
pub fn lower_tree(raw: RawNode) -> NavResult<SidebarTree> {
    let root = EntryPath::document();
    let pairs = match raw {
        RawNode::Map(pairs) => pairs,
        other => {
            return Err(malformed(
                &root,
                format!(
                    "expected a mapping of sidebar names to lists, found {}",
                    other.kind()
                ),
            ))
        }
    };

    let mut tree = SidebarTree::new();
    for (key, value) in pairs {
        let name = match key {
            RawNode::Str(name) => name,
            other => {
                return Err(malformed(
                    &root,
                    format!("sidebar name must be a string, found {}", other.kind()),
                ))
            }
        };
        if tree.names().any(|n| n == name) {
            return Err(malformed(&root, format!("sidebar '{}' declared twice", name)));
        }

        let path = EntryPath::root(&name);
        let items = match value {
            RawNode::Seq(items) => items,
            other => {
                return Err(malformed(
                    &path,
                    format!("expected a list of entries, found {}", other.kind()),
                ))
            }
        };
        let entries = lower_entries(items, &path)?;
        tree = tree.with_sidebar(name, entries);
    }
    Ok(tree)
}

fn lower_entries(items: Vec<RawNode>, parent: &EntryPath) -> NavResult<Vec<SidebarEntry>> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| lower_entry(item, &parent.index(i)))
        .collect()
}

fn lower_entry(item: RawNode, path: &EntryPath) -> NavResult<SidebarEntry> {
    match item {
        RawNode::Str(id) => Ok(SidebarEntry::Id(SidebarId::from(id))),
        RawNode::Map(mut pairs) => {
            if pairs.len() != 1 {
                return Err(malformed(
                    path,
                    format!(
                        "group mapping has {} keys, expected exactly one label",
                        pairs.len()
                    ),
                ));
            }
            let (key, value) = pairs.remove(0);
            let label = match key {
                RawNode::Str(label) => label,
                other => {
                    return Err(malformed(
                        path,
                        format!("group label must be a string, found {}", other.kind()),
                    ))
                }
            };
            match value {
                RawNode::Seq(items) => {
                    let inner = path.group(&label);
                    let entries = lower_entries(items, &inner)?;
                    Ok(SidebarEntry::group(label, entries))
                }
                other => Err(malformed(
                    path,
                    format!(
                        "group '{}' must hold a list of entries, found {}",
                        label,
                        other.kind()
                    ),
                )),
            }
        }
        other => Err(malformed(
            path,
            format!(
                "expected a document id or a single-key group, found {}",
                other.kind()
            ),
        )),
    }
}

fn malformed(path: &EntryPath, reason: String) -> NavError {
    NavError::Malformed {
        path: path.clone(),
        reason,
    }
}
