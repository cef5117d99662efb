//! # TreeForge Tree Nodes
//!
//! File: cli/src/tree/node.rs
//!
//! ## Overview
//!
//! `TreeNode` is the typed representation of one entry of a tree description.
//! The folder/file distinction is a tagged enum (`NodeKind`): folders own an
//! ordered `Vec` of children, files own an optional explicit content string.
//! A file therefore cannot carry children at all, not even an empty list.
//!
//! Child order is the order the entries appeared in the source text and is
//! preserved through printing, flattening and archiving. Sibling names are not
//! required to be unique.
//!
//! ## Serialization
//!
//! Nodes serialize to the JSON shape used by `treeforge parse --json`:
//!
//! ```json
//! { "name": "src", "level": 0, "type": "folder", "children": [
//!     { "name": "index.ts", "level": 1, "type": "file" }
//! ] }
//! ```
//!
use serde::Serialize;

/// Level of the synthetic root; every parsed entry sits at level 0 or deeper.
pub const ROOT_LEVEL: i32 = -1;

/// Folder or file payload of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    Folder {
        children: Vec<TreeNode>,
    },
    File {
        /// Content decided by the caller; wins over synthesized content.
        #[serde(skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
}

/// One file or folder entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub name: String,
    /// Zero-based depth inferred from the source indentation (`ROOT_LEVEL` for the root).
    pub level: i32,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl TreeNode {
    /// Creates an empty folder node.
    pub fn folder(name: impl Into<String>, level: i32) -> Self {
        Self {
            name: name.into(),
            level,
            kind: NodeKind::Folder {
                children: Vec::new(),
            },
        }
    }

    /// Creates a file node whose content will be synthesized.
    pub fn file(name: impl Into<String>, level: i32) -> Self {
        Self {
            name: name.into(),
            level,
            kind: NodeKind::File { content: None },
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    /// Children of a folder; files yield an empty slice.
    pub fn children(&self) -> &[TreeNode] {
        match &self.kind {
            NodeKind::Folder { children } => children,
            NodeKind::File { .. } => &[],
        }
    }

    /// Mutable children of a folder, `None` for files.
    pub fn children_mut(&mut self) -> Option<&mut Vec<TreeNode>> {
        match &mut self.kind {
            NodeKind::Folder { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    /// Appends `child` as the last child. Returns `false` (dropping nothing
    /// into a file) when `self` is a file.
    pub fn push_child(&mut self, child: TreeNode) -> bool {
        match self.children_mut() {
            Some(children) => {
                children.push(child);
                true
            }
            None => false,
        }
    }

    /// Explicit content of a file node.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => content.as_deref(),
            NodeKind::Folder { .. } => None,
        }
    }

    /// Sets explicit content on a file node. Returns `false` for folders.
    pub fn set_content(&mut self, value: impl Into<String>) -> bool {
        match &mut self.kind {
            NodeKind::File { content } => {
                *content = Some(value.into());
                true
            }
            NodeKind::Folder { .. } => false,
        }
    }

    /// Looks up a descendant by a `/`-separated path relative to this node.
    pub fn find_mut(&mut self, path: &str) -> Option<&mut TreeNode> {
        let mut node = self;
        for segment in path.split('/').filter(|segment| !segment.is_empty()) {
            node = node
                .children_mut()?
                .iter_mut()
                .find(|child| child.name == segment)?;
        }
        Some(node)
    }

    /// Number of file nodes below (and including) this node.
    pub fn count_files(&self) -> usize {
        match &self.kind {
            NodeKind::File { .. } => 1,
            NodeKind::Folder { children } => children.iter().map(TreeNode::count_files).sum(),
        }
    }

    /// Number of folder nodes strictly below this node.
    pub fn count_folders(&self) -> usize {
        self.children()
            .iter()
            .map(|child| {
                if child.is_folder() {
                    1 + child.count_folders()
                } else {
                    0
                }
            })
            .sum()
    }
}

#[cfg(test)]
impl TreeNode {
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |node, segment| {
                node.children().iter().find(|child| child.name == segment)
            })
    }
}
