//! # TreeForge Generate Command
//!
//! File: cli/src/commands/generate.rs
//!
//! ## Overview
//!
//! `treeforge generate <FILE|->` is the end-to-end path: parse the tree text,
//! resolve project settings, synthesize every file and write the result as a
//! directory or a `.tar.gz` archive.
//!
//! ## Architecture
//!
//! 1. Load configuration; read the tree text (file or stdin).
//! 2. Parse with the resolved indentation unit. Parse errors abort before
//!    anything is written.
//! 3. If the tree wraps everything in one folder, that folder becomes the
//!    project root and names the project (unless `--name` is given). A name
//!    that is not a single folder name is rejected.
//! 4. With `--overlay DIR`, files found under `DIR` become explicit content.
//! 5. Resolve `ProjectSettings` (flags over configuration) and assemble the
//!    `FileMap` with the built-in plugin registry.
//! 6. `--dry-run` lists the files; otherwise write via `OutputArgs`.
//!
//! ## Examples
//!
//! ```bash
//! treeforge generate structure.txt -o ~/projects
//! treeforge generate structure.txt --type python --license Apache-2.0
//! treeforge generate - --archive my-app.tar.gz < structure.txt
//! ```
//!
use super::args::{
    name_from_input, parse_source, print_completion_message, read_tree_source,
    validate_project_name, OutputArgs, SettingsArgs,
};
use crate::core::config;
use crate::core::error::Result;
use crate::project::{self, FileMap};
use crate::synth::PluginRegistry;
use crate::tree::ParseOptions;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

/// Arguments for `treeforge generate`.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Tree text file, or `-` for stdin.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Project name (defaults to the single top-level folder, then the input file name).
    #[arg(long)]
    pub name: Option<String>,

    /// Directory of hand-written files used verbatim for matching tree entries.
    #[arg(long, value_name = "DIR")]
    pub overlay: Option<PathBuf>,

    /// List the files that would be generated without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Handles `treeforge generate`.
pub async fn handle_generate(args: GenerateArgs) -> Result<()> {
    let cfg = config::load_config().context("Failed to load TreeForge configuration")?;
    let text = read_tree_source(&args.input)?;

    let options = ParseOptions::new(name_from_input(&args.input), args.settings.indent_unit(&cfg));
    let parsed = parse_source(&text, &options)?;
    let mut root = project::unwrap_project_folder(parsed);
    if let Some(name) = &args.name {
        root.name = name.clone();
    }
    // The root name becomes the output folder, whichever way it was chosen.
    root.name = validate_project_name(&root.name)?;
    if let Some(dir) = &args.overlay {
        project::overlay::apply_overlay(&mut root, dir)?;
    }

    let settings = args.settings.resolve(&cfg, &root.name, None);
    let registry = PluginRegistry::with_builtin();
    let map = project::assemble(&root, &settings, &registry);
    if map.is_empty() {
        warn!("'{}' contains no files; only its folders will be created", map.root_name());
    }
    info!(
        "Generated '{}' with the '{}' plugin",
        map.root_name(),
        registry.resolve(&settings.project_type).id()
    );

    if args.dry_run {
        print_dry_run(&map);
        return Ok(());
    }

    let written = args.output.write(&map, &cfg)?;
    print_completion_message(&written, &map);
    Ok(())
}

fn print_dry_run(map: &FileMap) {
    println!("Dry run: '{}' would contain {} file(s):\n", map.root_name(), map.len());
    let width = map.paths().map(str::len).max().unwrap_or(0);
    for (path, content) in map.iter() {
        println!("  {:<width$}  {:>6} B", path, content.len(), width = width);
    }
    for dir in map.empty_dirs() {
        println!("  {}/", dir);
    }
    println!("\nNothing was written.");
}
