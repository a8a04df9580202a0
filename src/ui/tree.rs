//! Plain-text rendering of sidebar trees.

use navtree::{SidebarEntry, SidebarGroup, SidebarTree};

use super::theme::Glyphs;

/// Render one sidebar with its name as the root line.
pub fn render_sidebar(name: &str, entries: &[SidebarEntry], glyphs: &Glyphs) -> String {
    let mut out = format!("{}\n", name);
    render_entries(entries, "", glyphs, &mut out);
    out
}

/// Render a group with its label as the root line.
pub fn render_group(group: &SidebarGroup, glyphs: &Glyphs) -> String {
    render_sidebar(&format!("{} {}", glyphs.group, group.label), &group.items, glyphs)
}

/// Render every sidebar, separated by a blank line.
pub fn render_tree(tree: &SidebarTree, glyphs: &Glyphs) -> String {
    tree.sidebars()
        .map(|(name, entries)| render_sidebar(name, entries, glyphs))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_entries(entries: &[SidebarEntry], prefix: &str, glyphs: &Glyphs, out: &mut String) {
    for (i, entry) in entries.iter().enumerate() {
        let last = i + 1 == entries.len();
        let connector = if last { glyphs.last } else { glyphs.branch };
        match entry {
            SidebarEntry::Id(id) => {
                out.push_str(&format!("{}{}{}\n", prefix, connector, id));
            }
            SidebarEntry::Group(group) => {
                out.push_str(&format!(
                    "{}{}{} {}\n",
                    prefix, connector, glyphs.group, group.label
                ));
                let nested = if last { glyphs.blank } else { glyphs.pipe };
                render_entries(&group.items, &format!("{}{}", prefix, nested), glyphs, out);
            }
        }
    }
}
