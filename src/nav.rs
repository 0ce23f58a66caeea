//! Collapsible sidebar navigation.
//!
//! Branches open and close independently of one another; there is no
//! accordion behaviour.

use std::collections::HashSet;

use tracing::debug;

use crate::model::{Badge, IconRef, NavItem};
use crate::seed::NavSectionConfig;

/// Fields common to leaves and branches.
#[derive(Clone, Debug, PartialEq)]
pub struct NavEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: IconRef,
    pub badge: Option<Badge>,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NavNode {
    Leaf {
        entry: NavEntry,
        href: Option<&'static str>,
    },
    Branch {
        entry: NavEntry,
        children: Vec<NavNode>,
        expanded: bool,
    },
}

impl NavNode {
    /// Normalize an authored item. A group with zero children becomes a leaf
    /// with no link rather than a disclosure with nothing inside.
    pub fn from_item(item: &NavItem) -> Self {
        let entry = NavEntry {
            id: item.id,
            label: item.label,
            icon: item.icon,
            badge: item.badge.clone(),
            active: item.active,
        };

        match item.children {
            Some(ref children) if !children.is_empty() => NavNode::Branch {
                entry,
                children: children.iter().map(NavNode::from_item).collect(),
                expanded: item.expanded,
            },
            _ => NavNode::Leaf {
                entry,
                href: item.href,
            },
        }
    }

    pub fn entry(&self) -> &NavEntry {
        match self {
            NavNode::Leaf { entry, .. } | NavNode::Branch { entry, .. } => entry,
        }
    }

    pub fn id(&self) -> &'static str {
        self.entry().id
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, NavNode::Branch { .. })
    }

    /// Leaves highlight when active; branch headers also when any direct
    /// child is active.
    pub fn is_highlighted(&self) -> bool {
        match self {
            NavNode::Leaf { entry, .. } => entry.active,
            NavNode::Branch {
                entry, children, ..
            } => entry.active || children.iter().any(|c| c.entry().active),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavSection {
    pub title: &'static str,
    pub nodes: Vec<NavNode>,
}

/// A row of the sidebar as currently visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavRow<'a> {
    Heading(&'static str),
    Node {
        node: &'a NavNode,
        depth: usize,
        open: bool,
    },
}

#[derive(Clone, Debug)]
pub struct NavTree {
    sections: Vec<NavSection>,
    open: HashSet<&'static str>,
    /// Index into the selectable (non-heading) visible rows.
    pub cursor: usize,
}

impl NavTree {
    /// Initial open set: branches flagged `expanded` plus each section's
    /// default-open override.
    pub fn new(configs: Vec<NavSectionConfig>) -> Self {
        let mut open = HashSet::new();
        let mut sections = Vec::with_capacity(configs.len());

        for config in configs {
            let nodes: Vec<NavNode> = config.items.iter().map(NavNode::from_item).collect();
            for node in &nodes {
                if let NavNode::Branch {
                    entry, expanded, ..
                } = node
                {
                    if *expanded || config.default_open == Some(entry.id) {
                        open.insert(entry.id);
                    }
                }
            }
            sections.push(NavSection {
                title: config.title,
                nodes,
            });
        }

        Self {
            sections,
            open,
            cursor: 0,
        }
    }

    #[cfg(test)]
    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Flip one branch's disclosure. Leaves and unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) {
        let Some(branch_id) = self.find_branch(id) else {
            debug!(id, "toggle ignored: not a branch");
            return;
        };
        if !self.open.remove(branch_id) {
            self.open.insert(branch_id);
        }
    }

    fn find_branch(&self, id: &str) -> Option<&'static str> {
        fn walk(nodes: &[NavNode], id: &str) -> Option<&'static str> {
            nodes.iter().find_map(|node| match node {
                NavNode::Branch {
                    entry, children, ..
                } => {
                    if entry.id == id {
                        Some(entry.id)
                    } else {
                        walk(children, id)
                    }
                }
                NavNode::Leaf { .. } => None,
            })
        }
        self.sections.iter().find_map(|s| walk(&s.nodes, id))
    }

    /// Headings plus every node not hidden inside a closed branch.
    pub fn visible_rows(&self) -> Vec<NavRow<'_>> {
        let mut rows = Vec::new();
        for section in &self.sections {
            rows.push(NavRow::Heading(section.title));
            self.push_rows(&section.nodes, 0, &mut rows);
        }
        rows
    }

    fn push_rows<'a>(&'a self, nodes: &'a [NavNode], depth: usize, rows: &mut Vec<NavRow<'a>>) {
        for node in nodes {
            let open = self.is_open(node.id());
            rows.push(NavRow::Node { node, depth, open });
            if let NavNode::Branch { children, .. } = node {
                if open {
                    self.push_rows(children, depth + 1, rows);
                }
            }
        }
    }

    fn selectable(&self) -> Vec<&NavNode> {
        self.visible_rows()
            .into_iter()
            .filter_map(|row| match row {
                NavRow::Node { node, .. } => Some(node),
                NavRow::Heading(_) => None,
            })
            .collect()
    }

    pub fn selected(&self) -> Option<&NavNode> {
        self.selectable().get(self.cursor).copied()
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.selectable().len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Activate the row under the cursor: branches toggle, leaves report
    /// their link target (following it is out of scope for this page).
    pub fn activate_selected(&mut self) -> Option<&'static str> {
        let (id, href) = match self.selected()? {
            NavNode::Branch { entry, .. } => (entry.id, None),
            NavNode::Leaf { entry, href } => (entry.id, *href),
        };
        match href {
            None if self.find_branch(id).is_some() => {
                self.toggle(id);
                None
            }
            _ => {
                debug!(id, ?href, "nav link selected");
                href
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::nav_sections;

    fn tree() -> NavTree {
        NavTree::new(nav_sections())
    }

    #[test]
    fn test_initial_open_set() {
        let tree = tree();
        assert!(tree.is_open("dashboards"));
        assert!(!tree.is_open("apps"));
        assert!(!tree.is_open("authentication"));
    }

    #[test]
    fn test_default_override_opens_branch() {
        let mut configs = nav_sections();
        configs[1].default_open = Some("pages");
        let tree = NavTree::new(configs);
        assert!(tree.is_open("pages"));
        assert!(tree.is_open("dashboards"));
    }

    #[test]
    fn test_empty_group_becomes_leaf() {
        let tree = tree();
        let components = &tree.sections()[2].nodes;
        assert!(!components[0].is_branch());
        assert!(matches!(components[0], NavNode::Leaf { href: None, .. }));
    }

    #[test]
    fn test_opening_branch_keeps_others_open() {
        let mut tree = tree();
        tree.toggle("apps");
        tree.toggle("landing");
        assert!(tree.is_open("dashboards"));
        assert!(tree.is_open("apps"));
        assert!(tree.is_open("landing"));

        tree.toggle("apps");
        assert!(!tree.is_open("apps"));
        assert!(tree.is_open("dashboards"));
        assert!(tree.is_open("landing"));
    }

    #[test]
    fn test_toggle_leaf_or_unknown_is_noop() {
        let mut tree = tree();
        let before = tree.open.clone();
        tree.toggle("crypto");
        tree.toggle("nope");
        tree.toggle("base-ui");
        assert_eq!(tree.open, before);
    }

    #[test]
    fn test_branch_highlight_follows_active_child() {
        let tree = tree();
        let menu = &tree.sections()[0].nodes;
        assert!(menu[0].is_highlighted());
        assert!(!menu[6].is_highlighted());
    }

    #[test]
    fn test_visible_rows_hide_closed_children() {
        let mut tree = tree();
        let count = |t: &NavTree| t.visible_rows().len();
        let before = count(&tree);
        tree.toggle("apps");
        assert_eq!(count(&tree), before + 1);
        tree.toggle("dashboards");
        assert_eq!(count(&tree), before - 2);
    }

    #[test]
    fn test_activate_selected_toggles_branch() {
        let mut tree = tree();
        assert_eq!(tree.selected().map(|n| n.id()), Some("dashboards"));
        assert_eq!(tree.activate_selected(), None);
        assert!(!tree.is_open("dashboards"));

        tree.cursor_down();
        assert_eq!(tree.selected().map(|n| n.id()), Some("crypto"));
        assert_eq!(tree.activate_selected(), Some("#/crypto"));
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut tree = tree();
        tree.cursor_up();
        assert_eq!(tree.cursor, 0);
        for _ in 0..100 {
            tree.cursor_down();
        }
        assert_eq!(tree.selected().map(|n| n.id()), Some("forms"));
    }
}
