//! # TreeForge Snapshot Command
//!
//! File: cli/src/commands/snapshot.rs
//!
//! ## Overview
//!
//! `treeforge snapshot <DIR>` prints an existing directory as tree text. The
//! output can be edited and fed straight back into `treeforge generate`: its
//! first line is the project folder, so `generate` picks the name up from it.
//!
use crate::core::error::Result;
use crate::tree::printer::{render_tree, PrintOptions};
use crate::tree::scan::{scan_directory, ScanOptions};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Arguments for `treeforge snapshot`.
#[derive(Parser, Debug)]
pub struct SnapshotArgs {
    /// Directory to describe.
    #[arg(value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Include hidden entries (names starting with '.').
    #[arg(long)]
    pub hidden: bool,

    /// Name printed for the root folder (defaults to the directory name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Handles `treeforge snapshot`.
pub async fn handle_snapshot(args: SnapshotArgs) -> Result<()> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None => directory_name(&args.directory),
    };
    let options = ScanOptions {
        include_hidden: args.hidden,
    };
    let root = scan_directory(&args.directory, &name, &options)?;
    info!(
        "Snapshot of '{}': {} folders, {} files",
        args.directory.display(),
        root.count_folders(),
        root.count_files()
    );
    print!("{}", render_tree(&root, PrintOptions::default()));
    Ok(())
}

/// Final component of `path`, resolving `.` and `..` through the filesystem.
fn directory_name(path: &std::path::Path) -> String {
    let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "project".to_string())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_args() {
        let args = SnapshotArgs::try_parse_from(["snapshot"]).unwrap();
        assert_eq!(args.directory, PathBuf::from("."));
        assert!(!args.hidden);

        let args = SnapshotArgs::try_parse_from(["snapshot", "/srv/app", "--hidden", "--name", "app"])
            .unwrap();
        assert_eq!(args.directory, PathBuf::from("/srv/app"));
        assert!(args.hidden);
        assert_eq!(args.name.as_deref(), Some("app"));
    }

    #[test]
    fn test_directory_name() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("shop");
        std::fs::create_dir(&nested).unwrap();
        assert_eq!(directory_name(&nested), "shop");
        assert_eq!(directory_name(&nested.join("..").join("shop")), "shop");
    }
}
