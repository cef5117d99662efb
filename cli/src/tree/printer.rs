//! # TreeForge Tree Printer
//!
//! File: cli/src/tree/printer.rs
//!
//! ## Overview
//!
//! Renders a `TreeNode` as `tree`-style text, the inverse of the parser:
//!
//! ```text
//! my-app/
//! ├── src/
//! │   ├── main.rs
//! │   └── lib.rs
//! ├── Cargo.toml
//! └── README.md
//! ```
//!
//! Folders are suffixed with `/` so the output parses back into the same
//! structure with the default 4-column unit. Entries keep their tree order
//! (no sorting). Optional ANSI bold highlights folder names on terminals; bold
//! output is for display only and is not meant to be parsed again.
//!
use super::node::TreeNode;
use std::fmt::Write as FmtWrite;

// --- Constants for Tree Drawing ---

/// Connector for intermediate items in a listing ("T" shape).
const TEE: &str = "├── ";
/// Connector for the last item in a listing ("L" shape).
const ELBOW: &str = "└── ";
/// Vertical line used for ongoing indentation levels.
const PIPE: &str = "│   ";
/// Spacer used for indentation levels after the last item has been printed.
const SPACER: &str = "    ";
/// ANSI escape code to start bold text formatting (for folders).
const BOLD_START: &str = "\x1b[1m";
/// ANSI escape code to reset text formatting.
const BOLD_END: &str = "\x1b[0m";

/// Display options for the printer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintOptions {
    /// Wrap folder names in ANSI bold.
    pub bold_folders: bool,
}

/// Renders `root` including a first line with the root's own name.
pub fn render_tree(root: &TreeNode, options: PrintOptions) -> String {
    let mut output = String::new();
    write_name(&mut output, root, options);
    output.push('\n');
    walk(root, &mut String::new(), options, &mut output);
    output
}

/// Renders only the descendants of `root`, as top-level entries.
///
/// `parse_tree(&render_entries(&root, ..), ..)` rebuilds `root` when parsed with
/// the same root name and the default unit.
pub fn render_entries(root: &TreeNode, options: PrintOptions) -> String {
    let mut output = String::new();
    let children = root.children();
    for child in children {
        write_name(&mut output, child, options);
        output.push('\n');
        walk(child, &mut String::new(), options, &mut output);
    }
    output
}

fn write_name(output: &mut String, node: &TreeNode, options: PrintOptions) {
    // Writing into a String cannot fail.
    let _ = if node.is_folder() && options.bold_folders {
        write!(output, "{}{}/{}", BOLD_START, node.name, BOLD_END)
    } else if node.is_folder() {
        write!(output, "{}/", node.name)
    } else {
        write!(output, "{}", node.name)
    };
}

/// Writes the children of `node`, one line each, recursing into folders.
/// `current_prefix` holds the pipes/spacers of the enclosing levels and is
/// restored before returning.
fn walk(node: &TreeNode, current_prefix: &mut String, options: PrintOptions, output: &mut String) {
    let children = node.children();
    let count = children.len();
    for (index, child) in children.iter().enumerate() {
        let is_last_entry = index + 1 == count;
        output.push_str(current_prefix);
        output.push_str(if is_last_entry { ELBOW } else { TEE });
        write_name(output, child, options);
        output.push('\n');

        if child.is_folder() {
            let prefix_component = if is_last_entry { SPACER } else { PIPE };
            current_prefix.push_str(prefix_component);
            walk(child, current_prefix, options, output);
            current_prefix.truncate(current_prefix.len() - prefix_component.len());
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::ROOT_LEVEL;
    use crate::tree::parser::{parse_tree, ParseOptions};

    fn sample() -> TreeNode {
        let mut root = TreeNode::folder("test-project", ROOT_LEVEL);
        let mut src = TreeNode::folder("src", 0);
        src.push_child(TreeNode::file("main.rs", 1));
        src.push_child(TreeNode::file("lib.rs", 1));
        let mut tests = TreeNode::folder("tests", 0);
        tests.push_child(TreeNode::file("integration.rs", 1));
        root.push_child(src);
        root.push_child(tests);
        root.push_child(TreeNode::file("Cargo.toml", 0));
        root
    }

    #[test]
    fn test_render_tree_basic() {
        let rendered = render_tree(&sample(), PrintOptions::default());
        let expected = "\
test-project/
├── src/
│   ├── main.rs
│   └── lib.rs
├── tests/
│   └── integration.rs
└── Cargo.toml
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_bold_folders() {
        let rendered = render_tree(&sample(), PrintOptions { bold_folders: true });
        assert!(rendered.starts_with(&format!("{}test-project/{}", BOLD_START, BOLD_END)));
        assert!(rendered.contains(&format!("├── {}src/{}", BOLD_START, BOLD_END)));
        assert!(rendered.contains("└── Cargo.toml\n"));
    }

    #[test]
    fn test_render_empty_root() {
        let root = TreeNode::folder("empty-project", ROOT_LEVEL);
        assert_eq!(render_tree(&root, PrintOptions::default()), "empty-project/\n");
        assert_eq!(render_entries(&root, PrintOptions::default()), "");
    }

    #[test]
    fn test_last_folder_uses_spacer() {
        let mut root = TreeNode::folder("r", ROOT_LEVEL);
        let mut a = TreeNode::folder("a", 0);
        let mut b = TreeNode::folder("b", 1);
        b.push_child(TreeNode::file("c.txt", 2));
        a.push_child(b);
        root.push_child(a);
        assert_eq!(render_entries(&root, PrintOptions::default()), "a/\n└── b/\n    └── c.txt\n");
    }

    #[test]
    fn test_entries_round_trip_through_parser() {
        let original = sample();
        let text = render_entries(&original, PrintOptions::default());
        let reparsed = parse_tree(&text, &ParseOptions::new("test-project", 4)).unwrap();
        assert_eq!(reparsed, original);
    }
}
