//! Expand/collapse state for the summary tree
//!
//! The tree is root → category → tier → item. Every header node owns its own
//! expanded flag, keyed by a [`NodeId`] derived from the content, so flags
//! stay put across redraws and are not reset when an ancestor collapses.

use std::collections::HashMap;

use crate::core::content::{self, Tier, TREE_ROOT_TITLE};

/// Stable identity of a header node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    Root,
    Category(&'static str),
    Tier(&'static str, Tier),
}

/// A header node and its children
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub id: NodeId,
    pub title: &'static str,
    pub children: Vec<TreeChild>,
}

/// Child of a header node
#[derive(Debug, Clone)]
pub enum TreeChild {
    Node(TreeNode),
    Leaf { text: &'static str, tier: Tier },
}

/// Build the summary tree from the content model
pub fn build_tree() -> TreeNode {
    let categories = content::categories()
        .iter()
        .map(|category| TreeNode {
            id: NodeId::Category(category.key),
            title: category.title,
            children: Tier::all()
                .iter()
                .map(|tier| {
                    TreeChild::Node(TreeNode {
                        id: NodeId::Tier(category.key, *tier),
                        title: tier.title(),
                        children: category
                            .items(*tier)
                            .iter()
                            .map(|text| TreeChild::Leaf {
                                text: *text,
                                tier: *tier,
                            })
                            .collect(),
                    })
                })
                .collect(),
        })
        .map(TreeChild::Node)
        .collect();

    TreeNode {
        id: NodeId::Root,
        title: TREE_ROOT_TITLE,
        children: categories,
    }
}

/// One visible line of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeRow {
    Header {
        id: NodeId,
        title: &'static str,
        depth: u16,
        expanded: bool,
    },
    Leaf {
        text: &'static str,
        tier: Tier,
        depth: u16,
    },
}

impl TreeRow {
    pub fn depth(&self) -> u16 {
        match self {
            TreeRow::Header { depth, .. } | TreeRow::Leaf { depth, .. } => *depth,
        }
    }

    /// Node id if this row is a header
    pub fn node_id(&self) -> Option<NodeId> {
        match self {
            TreeRow::Header { id, .. } => Some(*id),
            TreeRow::Leaf { .. } => None,
        }
    }
}

/// Per-node expanded flags plus a cursor over header rows
#[derive(Debug, Clone)]
pub struct TreeState {
    root: TreeNode,
    /// Only nodes that were toggled are stored; absent means expanded
    expanded: HashMap<NodeId, bool>,
    cursor: NodeId,
}

impl TreeState {
    /// Create a fully expanded tree with the cursor on the root
    pub fn new() -> Self {
        Self::with_root(build_tree())
    }

    /// Create state over an arbitrary tree
    pub fn with_root(root: TreeNode) -> Self {
        let cursor = root.id;
        Self {
            root,
            expanded: HashMap::new(),
            cursor,
        }
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.get(&id).copied().unwrap_or(true)
    }

    /// Flip one node's flag. Other nodes are untouched.
    pub fn toggle(&mut self, id: NodeId) {
        let expanded = !self.is_expanded(id);
        self.expanded.insert(id, expanded);
        tracing::debug!("Tree node {:?} expanded={}", id, expanded);
    }

    /// Node under the cursor
    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    /// Toggle the node under the cursor
    pub fn toggle_selected(&mut self) {
        self.toggle(self.cursor);
    }

    /// Move the cursor to the next visible header
    pub fn cursor_down(&mut self) {
        let headers = self.visible_headers();
        if let Some(pos) = headers.iter().position(|id| *id == self.cursor) {
            if let Some(next) = headers.get(pos + 1) {
                self.cursor = *next;
            }
        }
    }

    /// Move the cursor to the previous visible header
    pub fn cursor_up(&mut self) {
        let headers = self.visible_headers();
        if let Some(pos) = headers.iter().position(|id| *id == self.cursor) {
            if pos > 0 {
                self.cursor = headers[pos - 1];
            }
        }
    }

    /// Index of the cursor row within [`TreeState::visible_rows`]
    pub fn cursor_row(&self) -> usize {
        self.visible_rows()
            .iter()
            .position(|row| row.node_id() == Some(self.cursor))
            .unwrap_or(0)
    }

    /// Flatten the tree into the rows currently visible
    pub fn visible_rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        self.flatten(&self.root, 0, &mut rows);
        rows
    }

    fn flatten(&self, node: &TreeNode, depth: u16, rows: &mut Vec<TreeRow>) {
        let expanded = self.is_expanded(node.id);
        rows.push(TreeRow::Header {
            id: node.id,
            title: node.title,
            depth,
            expanded,
        });

        if !expanded {
            return;
        }

        for child in &node.children {
            match child {
                TreeChild::Node(inner) => self.flatten(inner, depth + 1, rows),
                TreeChild::Leaf { text, tier } => rows.push(TreeRow::Leaf {
                    text: *text,
                    tier: *tier,
                    depth: depth + 1,
                }),
            }
        }
    }

    fn visible_headers(&self) -> Vec<NodeId> {
        self.visible_rows()
            .iter()
            .filter_map(TreeRow::node_id)
            .collect()
    }
}

impl Default for TreeState {
    fn default() -> Self {
        Self::new()
    }
}
