//! # TreeForge Blueprint Command Group
//!
//! File: cli/src/commands/blueprint/mod.rs
//!
//! ## Overview
//!
//! This module serves as the entry point and router for the `treeforge
//! blueprint` command group. It defines the available subcommands (`list`,
//! `info`, `create`) for the built-in sample trees (`crate::blueprints`) and
//! delegates the execution to the appropriate submodule handlers.
//!
//! ## Architecture
//!
//! - `BlueprintArgs`: Top-level arguments for the command group.
//! - `BlueprintCommand`: Enum defining all blueprint subcommands.
//! - `handle_blueprint`: Routes execution to the relevant subcommand handler.
//!
//! ## Examples
//!
//! ```bash
//! # List available blueprints
//! treeforge blueprint list
//!
//! # Show the tree of a blueprint
//! treeforge blueprint info saas
//!
//! # Create a new project from a blueprint
//! treeforge blueprint create --lang dashboard admin-panel
//! ```
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

mod create;
mod info;
mod list;

/// # Blueprint Command Group Arguments (`BlueprintArgs`)
#[derive(Parser, Debug)]
#[command(about = "Explore built-in project blueprints and create projects from them")]
pub struct BlueprintArgs {
    #[command(subcommand)]
    command: BlueprintCommand,
}

/// # Blueprint Subcommands (`BlueprintCommand`)
#[derive(Subcommand, Debug)]
enum BlueprintCommand {
    /// List the built-in blueprints.
    List(list::ListArgs),
    /// Create a new project from a blueprint.
    Create(create::CreateArgs),
    /// Show the description and tree of a blueprint.
    Info(info::InfoArgs),
}

/// # Handle Blueprint Command (`handle_blueprint`)
pub async fn handle_blueprint(args: BlueprintArgs) -> Result<()> {
    debug!("Handling blueprint command: {:?}", args.command);
    match args.command {
        BlueprintCommand::List(list_args) => list::handle_list(list_args).await?,
        BlueprintCommand::Create(create_args) => create::handle_create(create_args).await?,
        BlueprintCommand::Info(info_args) => info::handle_info(info_args).await?,
    }
    Ok(())
}
