//! # TreeForge CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each `.rs` file in
//! that directory is compiled as its own test crate and pulls this module in
//! with `mod common;`.
//!
//! Every command built here runs in a caller-supplied working directory with
//! `TREEFORGE_CONFIG` pointing at a file that does not exist, so a developer's
//! own configuration can never leak into test results.
//!

// Not every test crate uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// The tree used by most end-to-end tests.
pub const SAMPLE_TREE: &str = "my-app/\n├── package.json\n└── src/\n    └── index.ts\n";

/// A `treeforge` command isolated from user configuration, running in `cwd`.
pub fn treeforge_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("treeforge").expect("Failed to find treeforge binary for testing");
    cmd.current_dir(cwd)
        .env("TREEFORGE_CONFIG", cwd.join("no-such-config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

/// Writes `text` to `dir/name` and returns the path.
pub fn write_tree(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).expect("Failed to write tree file");
    path
}
