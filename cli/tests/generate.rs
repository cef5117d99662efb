//! # TreeForge CLI Generate Integration Tests
//!
//! File: cli/tests/generate.rs
//!
//! ## Overview
//!
//! End-to-end tests for `treeforge generate`: directory output, settings
//! flags, settings-implied extras, archives, dry runs, overlays and the
//! guarantees around existing targets and parse failures.
//!

mod common;
use common::*;
use flate2::read::GzDecoder;
use predicates::prelude::*;
use std::fs;
use tar::Archive;
use tempfile::tempdir;

#[test]
fn test_generate_writes_project_directory() {
    let tmp = tempdir().unwrap();
    let tree = write_tree(tmp.path(), "tree.txt", SAMPLE_TREE);

    treeforge_cmd(tmp.path())
        .arg("generate")
        .arg(&tree)
        .args(["-o", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'my-app' created successfully!"));

    let project = tmp.path().join("out/my-app");
    let package = fs::read_to_string(project.join("package.json")).unwrap();
    assert!(package.contains("\"name\": \"my-app\""));
    let parsed: serde_json::Value = serde_json::from_str(&package).unwrap();
    assert_eq!(parsed["license"], "MIT");

    assert!(project.join("src/index.ts").is_file());
    assert!(project.join("README.md").is_file());
    assert!(project.join("LICENSE").is_file());
    let gitignore = fs::read_to_string(project.join(".gitignore")).unwrap();
    assert!(gitignore.contains(".next"));
    // The wrapping folder is the project root, not a nested folder.
    assert!(!project.join("my-app").exists());
}

#[test]
fn test_generate_settings_flags() {
    let tmp = tempdir().unwrap();
    let tree = write_tree(tmp.path(), "api.txt", "main.py\nrequirements.txt\n");

    treeforge_cmd(tmp.path())
        .arg("generate")
        .arg(&tree)
        .args([
            "--type",
            "python",
            "--license",
            "Apache-2.0",
            "--author",
            "Acme Corp",
            "--description",
            "Inventory service",
            "--no-readme",
            "--vercel-ignore",
            "-o",
            "out",
        ])
        .assert()
        .success();

    let project = tmp.path().join("out/api");
    assert!(project.join("main.py").is_file());
    assert!(project.join(".vercelignore").is_file());
    assert!(!project.join("README.md").exists());
    assert!(!project.join("vercel.json").exists());
    let license = fs::read_to_string(project.join("LICENSE")).unwrap();
    assert!(license.contains("Apache License"));
    assert!(license.contains("Acme Corp"));
    let gitignore = fs::read_to_string(project.join(".gitignore")).unwrap();
    assert!(gitignore.contains("__pycache__"));
}

#[test]
fn test_generate_readme_contains_description() {
    let tmp = tempdir().unwrap();
    treeforge_cmd(tmp.path())
        .args(["generate", "-", "--name", "hello-app", "--description", "hello", "-o", "out"])
        .write_stdin("README.md\n")
        .assert()
        .success();

    let readme = fs::read_to_string(tmp.path().join("out/hello-app/README.md")).unwrap();
    assert!(readme.contains("hello"));
}

#[test]
fn test_generate_refuses_existing_target_without_force() {
    let tmp = tempdir().unwrap();
    let tree = write_tree(tmp.path(), "tree.txt", SAMPLE_TREE);
    fs::create_dir_all(tmp.path().join("out/my-app")).unwrap();
    fs::write(tmp.path().join("out/my-app/notes.txt"), "keep me").unwrap();

    treeforge_cmd(tmp.path())
        .arg("generate")
        .arg(&tree)
        .args(["-o", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists. Use --force to overwrite."));
    assert!(!tmp.path().join("out/my-app/package.json").exists());

    treeforge_cmd(tmp.path())
        .arg("generate")
        .arg(&tree)
        .args(["-o", "out", "--force"])
        .assert()
        .success();
    assert!(tmp.path().join("out/my-app/package.json").is_file());
    assert_eq!(
        fs::read_to_string(tmp.path().join("out/my-app/notes.txt")).unwrap(),
        "keep me"
    );
}

#[test]
fn test_generate_parse_error_writes_nothing() {
    let tmp = tempdir().unwrap();
    let tree = write_tree(tmp.path(), "bad.txt", "src/\n        deep.ts\n");

    treeforge_cmd(tmp.path())
        .arg("generate")
        .arg(&tree)
        .args(["-o", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line 2: invalid indentation"));
    assert!(!tmp.path().join("out").exists());
}

#[test]
fn test_generate_rejects_name_outside_output_dir() {
    let tmp = tempdir().unwrap();
    let tree = write_tree(tmp.path(), "tree.txt", "a.txt\n");
    let escaped = tmp.path().join("escaped");

    for name in [escaped.to_str().unwrap(), "../escaped", ".."] {
        treeforge_cmd(tmp.path())
            .arg("generate")
            .arg(&tree)
            .args(["-o", "out", "--name", name])
            .assert()
            .failure()
            .stderr(predicate::str::contains("is not a valid project name"));
    }
    assert!(!escaped.exists());
    assert!(!tmp.path().join("out").exists());
}

#[test]
fn test_generate_dry_run() {
    let tmp = tempdir().unwrap();
    let tree = write_tree(tmp.path(), "tree.txt", SAMPLE_TREE);

    treeforge_cmd(tmp.path())
        .arg("generate")
        .arg(&tree)
        .args(["--dry-run", "-o", "out"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Dry run: 'my-app' would contain 5 file(s)")
                .and(predicate::str::contains("src/index.ts"))
                .and(predicate::str::contains("Nothing was written.")),
        );
    assert!(!tmp.path().join("out").exists());
}

#[test]
fn test_generate_archive() {
    let tmp = tempdir().unwrap();
    let tree = write_tree(tmp.path(), "tree.txt", SAMPLE_TREE);

    treeforge_cmd(tmp.path())
        .arg("generate")
        .arg(&tree)
        .args(["--archive", "my-app.tar.gz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'my-app' archived: 5 files"));

    let bytes = fs::read(tmp.path().join("my-app.tar.gz")).unwrap();
    let mut archive = Archive::new(GzDecoder::new(bytes.as_slice()));
    let paths: Vec<String> = archive
        .entries()
        .unwrap()
        .map(|entry| {
            let entry = entry.unwrap();
            let path = entry.path().unwrap().to_string_lossy().replace('\\', "/");
            path.trim_end_matches('/').to_string()
        })
        .collect();
    assert!(paths.contains(&"my-app/package.json".to_string()));
    assert!(paths.contains(&"my-app/src/index.ts".to_string()));
    assert!(paths.contains(&"my-app/LICENSE".to_string()));
    assert!(paths.iter().all(|p| p == "my-app" || p.starts_with("my-app/")));
    // No directory was written next to the archive.
    assert!(!tmp.path().join("my-app").exists());
}

#[test]
fn test_generate_overlay_supplies_explicit_content() {
    let tmp = tempdir().unwrap();
    let tree = write_tree(tmp.path(), "tree.txt", SAMPLE_TREE);
    let overlay = tmp.path().join("overlay");
    fs::create_dir_all(overlay.join("src")).unwrap();
    fs::write(overlay.join("src/index.ts"), "console.log('hand written');\n").unwrap();

    treeforge_cmd(tmp.path())
        .arg("generate")
        .arg(&tree)
        .arg("--overlay")
        .arg(&overlay)
        .args(["-o", "out"])
        .assert()
        .success();

    let project = tmp.path().join("out/my-app");
    assert_eq!(
        fs::read_to_string(project.join("src/index.ts")).unwrap(),
        "console.log('hand written');\n"
    );
    // Files without an overlay counterpart are still synthesized.
    assert!(fs::read_to_string(project.join("package.json"))
        .unwrap()
        .contains("\"name\": \"my-app\""));
}

#[test]
fn test_generate_unknown_type_falls_back_to_generic() {
    let tmp = tempdir().unwrap();
    treeforge_cmd(tmp.path())
        .args(["generate", "-", "--name", "legacy", "--type", "cobol", "-o", "out"])
        .write_stdin("main.cbl\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown project type 'cobol'"));

    let content = fs::read_to_string(tmp.path().join("out/legacy/main.cbl")).unwrap();
    assert_eq!(content, "// main.cbl\n");
}

#[test]
fn test_generate_uses_project_config() {
    let tmp = tempdir().unwrap();
    fs::create_dir(tmp.path().join(".git")).unwrap();
    fs::write(
        tmp.path().join(".treeforge.toml"),
        "[defaults]\nlicense = \"BSD-3-Clause\"\nreadme = false\n\n[output]\ndirectory = \"generated\"\n",
    )
    .unwrap();
    let tree = write_tree(tmp.path(), "tree.txt", SAMPLE_TREE);

    treeforge_cmd(tmp.path())
        .arg("generate")
        .arg(&tree)
        .assert()
        .success();

    let project = tmp.path().join("generated/my-app");
    let license = fs::read_to_string(project.join("LICENSE")).unwrap();
    assert!(license.contains("BSD 3-Clause"));
    assert!(!project.join("README.md").exists());
}
