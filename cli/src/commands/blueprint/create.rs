//! # TreeForge Blueprint Create Command
//!
//! File: cli/src/commands/blueprint/create.rs
//!
//! ## Overview
//!
//! Implements `treeforge blueprint create --lang <ID> <PROJECT_NAME>`: parses
//! the blueprint's tree under the given project name, synthesizes every file
//! with the blueprint's project type (unless `--type` overrides it) and writes
//! the project as a directory or archive.
//!
//! The settings flags are the same as for `treeforge generate`.
//!
//! ## Examples
//!
//! ```bash
//! treeforge blueprint create --lang saas acme-cloud
//! treeforge blueprint create -l dashboard admin --license BSD-3-Clause -o ~/work
//! treeforge blueprint create -l api orders-api --archive orders-api.tar.gz
//! ```
//!
use crate::blueprints;
use crate::commands::args::{
    print_completion_message, validate_project_name, OutputArgs, SettingsArgs,
};
use crate::core::config;
use crate::core::error::{ForgeError, Result};
use crate::project;
use crate::synth::PluginRegistry;
use crate::tree::{parse_tree, ParseOptions};
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// Arguments for `treeforge blueprint create`.
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Blueprint id (see `treeforge blueprint list`).
    #[arg(long, short = 'l', required = true)]
    lang: String,

    /// Name of the new project; also the name of the created folder.
    #[arg(required = true)]
    project_name: String,

    #[command(flatten)]
    settings: SettingsArgs,

    #[command(flatten)]
    output: OutputArgs,
}

/// Handles `treeforge blueprint create`.
pub async fn handle_create(args: CreateArgs) -> Result<()> {
    let bp = blueprints::find(&args.lang).ok_or_else(|| ForgeError::BlueprintNotFound {
        name: args.lang.clone(),
    })?;
    let project_name = validate_project_name(&args.project_name)?;

    info!(
        "Creating project '{}' from blueprint '{}'",
        project_name, bp.id
    );
    let cfg = config::load_config().context("Failed to load TreeForge configuration")?;
    // Blueprint trees are written with the default 4-column unit.
    let root = parse_tree(bp.tree, &ParseOptions::new(project_name.as_str(), 4))
        .with_context(|| format!("Built-in blueprint '{}' failed to parse", bp.id))?;

    let settings = args
        .settings
        .resolve(&cfg, &project_name, Some(bp.project_type));
    let registry = PluginRegistry::with_builtin();
    let map = project::assemble(&root, &settings, &registry);

    let written = args.output.write(&map, &cfg)?;
    print_completion_message(&written, &map);
    Ok(())
}
