//! # TreeForge Content Overlay
//!
//! File: cli/src/project/overlay.rs
//!
//! Fills in explicit content from a directory of hand-written files
//! (`treeforge generate --overlay DIR`). A tree file `src/index.ts` takes the
//! text of `DIR/src/index.ts` when that file exists; every other file is left
//! for the synthesizer. Overlay files with no matching tree entry are ignored.
//!
use crate::common::fs::io::read_file_to_string;
use crate::core::error::Result;
use crate::tree::TreeNode;
use std::path::Path;
use tracing::{debug, info};

/// Sets explicit content on every file of `root` that has a counterpart under
/// `dir`. Returns the overlaid paths in tree order.
///
/// # Errors
///
/// Fails when `dir` is not a directory or a matching file cannot be read
/// (for instance because it is not UTF-8).
pub fn apply_overlay(root: &mut TreeNode, dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        anyhow::bail!(
            "Overlay path '{}' does not exist or is not a directory.",
            dir.display()
        );
    }

    let mut paths = Vec::new();
    collect_file_paths(root, "", &mut paths);

    let mut overlaid = Vec::new();
    for path in paths {
        let source = dir.join(&path);
        if !source.is_file() {
            continue;
        }
        let text = read_file_to_string(&source)?;
        if let Some(node) = root.find_mut(&path) {
            node.set_content(text);
            debug!("Overlay supplies '{}'", path);
            overlaid.push(path);
        }
    }
    info!(
        "Overlay '{}' supplied {} file(s)",
        dir.display(),
        overlaid.len()
    );
    Ok(overlaid)
}

fn collect_file_paths(node: &TreeNode, parent: &str, out: &mut Vec<String>) {
    for child in node.children() {
        let path = if parent.is_empty() {
            child.name.clone()
        } else {
            format!("{}/{}", parent, child.name)
        };
        if child.is_folder() {
            collect_file_paths(child, &path, out);
        } else {
            out.push(path);
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{parse_tree, ParseOptions};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_overlay_sets_matching_files_only() -> Result<()> {
        let dir = tempdir()?;
        fs::create_dir_all(dir.path().join("src"))?;
        fs::write(dir.path().join("src/index.ts"), "console.log('mine');\n")?;
        fs::write(dir.path().join("unrelated.txt"), "ignored")?;

        let mut root = parse_tree("src/\n    index.ts\n    app.ts\n", &ParseOptions::default())?;
        let overlaid = apply_overlay(&mut root, dir.path())?;

        assert_eq!(overlaid, vec!["src/index.ts".to_string()]);
        assert_eq!(
            root.find("src/index.ts").and_then(TreeNode::content),
            Some("console.log('mine');\n")
        );
        assert_eq!(root.find("src/app.ts").and_then(TreeNode::content), None);
        assert!(root.find("unrelated.txt").is_none());
        Ok(())
    }

    #[test]
    fn test_overlay_requires_directory() {
        let mut root = parse_tree("a.txt\n", &ParseOptions::default()).expect("valid");
        let err = apply_overlay(&mut root, Path::new("/no/such/overlay")).unwrap_err();
        assert!(err.to_string().contains("is not a directory"));
    }
}
