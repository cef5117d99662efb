//! # TreeForge CLI Snapshot Integration Tests
//!
//! File: cli/tests/snapshot.rs
//!
//! ## Overview
//!
//! `treeforge snapshot` prints a directory as tree text that `parse` and
//! `generate` accept again.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn build_fixture(root: &std::path::Path) {
    fs::create_dir_all(root.join("shop/src")).unwrap();
    fs::write(root.join("shop/package.json"), "{}").unwrap();
    fs::write(root.join("shop/src/app.ts"), "").unwrap();
    fs::write(root.join("shop/.env"), "SECRET=1").unwrap();
}

#[test]
fn test_snapshot_prints_tree() {
    let tmp = tempdir().unwrap();
    build_fixture(tmp.path());

    treeforge_cmd(tmp.path())
        .args(["snapshot", "shop"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "shop/\n├── src/\n│   └── app.ts\n└── package.json\n",
        ));
}

#[test]
fn test_snapshot_hidden_and_name() {
    let tmp = tempdir().unwrap();
    build_fixture(tmp.path());

    treeforge_cmd(tmp.path())
        .args(["snapshot", "shop", "--hidden", "--name", "store"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("store/\n")
                .and(predicate::str::contains("├── .env")),
        );
}

#[test]
fn test_snapshot_output_feeds_generate() {
    let tmp = tempdir().unwrap();
    build_fixture(tmp.path());

    let output = treeforge_cmd(tmp.path())
        .args(["snapshot", "shop"])
        .output()
        .unwrap();
    assert!(output.status.success());

    treeforge_cmd(tmp.path())
        .args(["generate", "-", "-o", "copy"])
        .write_stdin(output.stdout)
        .assert()
        .success();

    let project = tmp.path().join("copy/shop");
    assert!(project.join("src/app.ts").is_file());
    assert!(fs::read_to_string(project.join("package.json"))
        .unwrap()
        .contains("\"name\": \"shop\""));
}

#[test]
fn test_snapshot_missing_directory() {
    let tmp = tempdir().unwrap();
    treeforge_cmd(tmp.path())
        .args(["snapshot", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
