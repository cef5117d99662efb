//! # TreeForge Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the TreeForge CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handlers
//!
//! ## Architecture
//!
//! - `tree`: tree text ⇄ `TreeNode` (parser, printer, directory scan)
//! - `synth`: content plugins that turn a file path into file content
//! - `project`: flattening a tree into a `FileMap` plus settings-implied extras
//! - `common`: writing a `FileMap` as a directory or `.tar.gz`
//! - `core`: errors, configuration, settings, naming, templating
//! - `blueprints`: built-in sample trees
//! - `commands`: one module per subcommand
//!
//! All errors are propagated to this level for consistent handling.
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! treeforge --help
//!
//! # Generate a project with increased verbosity
//! treeforge -vv generate structure.txt -o ~/projects
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod blueprints;
mod commands;
mod common;
mod core;
mod project;
mod synth;
mod tree;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "treeforge",
    about = "🌳 TreeForge: turn tree-style file listings into project scaffolds",
    long_about = "Parse `tree`-style structure text, synthesize sensible starter content for every\n\
                  file and write the project as a directory or a .tar.gz archive.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Validate tree text and print the parsed structure.
    #[command(alias = "p")]
    Parse(commands::parse::ParseArgs),
    /// Generate a project from tree text.
    #[command(alias = "g")]
    Generate(commands::generate::GenerateArgs),
    /// Work with the built-in blueprints.
    #[command(alias = "b")]
    Blueprint(commands::blueprint::BlueprintArgs),
    /// Print an existing directory as tree text.
    #[command(alias = "s")]
    Snapshot(commands::snapshot::SnapshotArgs),
    /// List the project types accepted by --type.
    Types(commands::types::TypesArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Parse(args) => commands::parse::handle_parse(args).await,
        Commands::Generate(args) => commands::generate::handle_generate(args).await,
        Commands::Blueprint(args) => commands::blueprint::handle_blueprint(args).await,
        Commands::Snapshot(args) => commands::snapshot::handle_snapshot(args).await,
        Commands::Types(args) => commands::types::handle_types(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;

    fn treeforge_cmd() -> Command {
        Command::cargo_bin("treeforge").expect("Failed to find treeforge binary for testing")
    }

    #[test]
    fn test_main_help_flag() {
        treeforge_cmd().arg("--help").assert().success();
    }

    #[test]
    fn test_main_version_flag() {
        treeforge_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
