//! # TreeForge Directory Snapshot
//!
//! File: cli/src/tree/scan.rs
//!
//! ## Overview
//!
//! Builds a `TreeNode` from an existing directory so it can be printed as tree
//! text (`treeforge snapshot`), edited, and fed back into `generate`.
//!
//! ## Architecture
//!
//! - `walkdir` yields entries in depth-first pre-order; within a directory,
//!   folders come first, then files, each group sorted by name.
//! - Hidden entries (names starting with `.`) are skipped unless requested;
//!   skipping a hidden folder prunes its whole subtree.
//! - Symbolic links are not followed, so link cycles cannot recurse; a link
//!   is listed as a file.
//! - Entries that cannot be read are logged and skipped.
//! - Names are kept verbatim. A name with whitespace before a `#`
//!   (`notes #1.md`) is logged with a warning, because the parser reads
//!   everything from that `#` on as a comment.
//!
use super::builder::TreeBuilder;
use super::node::TreeNode;
use super::parser::has_comment_marker;
use crate::core::error::Result;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Options for a directory snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Include entries whose name starts with `.`.
    pub include_hidden: bool,
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Scans `root_path` into a tree whose root is named `root_name`.
///
/// # Errors
///
/// Fails when `root_path` does not exist or is not a directory.
pub fn scan_directory(root_path: &Path, root_name: &str, options: &ScanOptions) -> Result<TreeNode> {
    if !root_path.exists() {
        anyhow::bail!(
            "Cannot snapshot: Path '{}' does not exist.",
            root_path.display()
        );
    }
    if !root_path.is_dir() {
        anyhow::bail!(
            "Cannot snapshot: Path '{}' is not a directory.",
            root_path.display()
        );
    }

    let include_hidden = options.include_hidden;
    let walker = WalkDir::new(root_path)
        .min_depth(1)
        .follow_links(false)
        .sort_by(|a, b| {
            let (a_dir, b_dir) = (a.file_type().is_dir(), b.file_type().is_dir());
            b_dir.cmp(&a_dir).then_with(|| a.file_name().cmp(b.file_name()))
        })
        .into_iter()
        .filter_entry(move |entry| include_hidden || !is_hidden(entry));

    let mut builder = TreeBuilder::new(root_name);
    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                warn!(
                    "Failed to access entry during walk in '{}': {}",
                    root_path.display(),
                    e
                );
                continue;
            }
        };
        let level = entry.depth() as i32 - 1;
        let name = entry.file_name().to_string_lossy().to_string();
        if has_comment_marker(&name) {
            warn!(
                "'{}' contains ' #'; parsing the snapshot will cut the name there",
                entry.path().display()
            );
        }
        builder.unwind_to(level);
        if entry.file_type().is_dir() {
            builder.attach(TreeNode::folder(name, level));
        } else {
            builder.attach(TreeNode::file(name, level));
        }
    }

    let root = builder.finish();
    debug!(
        "Snapshot of '{}': {} files, {} folders",
        root_path.display(),
        root.count_files(),
        root.count_folders()
    );
    Ok(root)
}
