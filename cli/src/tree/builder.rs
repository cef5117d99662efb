//! # TreeForge Tree Builder
//!
//! File: cli/src/tree/builder.rs
//!
//! The construction stack shared by the text parser and the directory
//! snapshot. Entries arrive in depth-first pre-order together with their
//! level; the builder keeps the chain of open folders, outermost first, with
//! the synthetic root at the bottom.
//!
//! A folder is appended to its parent when it is closed (popped). Because a
//! folder is always closed before any later sibling is appended, child order
//! matches arrival order.
//!
use super::node::{TreeNode, ROOT_LEVEL};

#[derive(Debug)]
pub(crate) struct TreeBuilder {
    stack: Vec<TreeNode>,
}

impl TreeBuilder {
    pub(crate) fn new(root_name: impl Into<String>) -> Self {
        Self {
            stack: vec![TreeNode::folder(root_name, ROOT_LEVEL)],
        }
    }

    /// Closes open folders until the innermost one is a strict ancestor of an
    /// entry at `level`, and returns that ancestor's level. Never closes the root.
    pub(crate) fn unwind_to(&mut self, level: i32) -> i32 {
        while self.stack.len() > 1 && self.top_level() >= level {
            self.close_top();
        }
        self.top_level()
    }

    /// Appends `node` under the innermost open folder. Folders stay open and
    /// become the parent of the entries that follow.
    pub(crate) fn attach(&mut self, node: TreeNode) {
        if node.is_folder() {
            self.stack.push(node);
        } else if let Some(parent) = self.stack.last_mut() {
            parent.push_child(node);
        }
    }

    /// Closes every open folder and returns the root.
    pub(crate) fn finish(mut self) -> TreeNode {
        while self.stack.len() > 1 {
            self.close_top();
        }
        self.stack
            .pop()
            .unwrap_or_else(|| TreeNode::folder(String::new(), ROOT_LEVEL))
    }

    fn top_level(&self) -> i32 {
        self.stack.last().map_or(ROOT_LEVEL, |top| top.level)
    }

    fn close_top(&mut self) {
        if self.stack.len() < 2 {
            return;
        }
        if let Some(node) = self.stack.pop() {
            if let Some(parent) = self.stack.last_mut() {
                parent.push_child(node);
            }
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order_across_closes() {
        let mut builder = TreeBuilder::new("root");
        assert_eq!(builder.unwind_to(0), ROOT_LEVEL);
        builder.attach(TreeNode::folder("a", 0));
        assert_eq!(builder.unwind_to(1), 0);
        builder.attach(TreeNode::file("a1", 1));
        assert_eq!(builder.unwind_to(0), ROOT_LEVEL);
        builder.attach(TreeNode::file("b", 0));

        let root = builder.finish();
        let names: Vec<_> = root.children().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(root.children()[0].children()[0].name, "a1");
    }

    #[test]
    fn test_unwind_never_pops_root() {
        let mut builder = TreeBuilder::new("root");
        assert_eq!(builder.unwind_to(ROOT_LEVEL), ROOT_LEVEL);
        assert_eq!(builder.finish().name, "root");
    }
}
