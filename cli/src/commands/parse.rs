//! # TreeForge Parse Command
//!
//! File: cli/src/commands/parse.rs
//!
//! ## Overview
//!
//! `treeforge parse <FILE|->` validates tree text and shows how it was
//! understood: either re-printed as a normalized tree (the entries only, the
//! synthetic root is not printed) with a count summary, or as JSON (`--json`)
//! in the `TreeNode` serialization shape, root included.
//!
//! Nothing is written to disk. A malformed line makes the command fail with
//! the line number and the reason.
//!
//! ## Examples
//!
//! ```bash
//! treeforge parse structure.txt
//! pbpaste | treeforge parse - --json
//! treeforge parse --indent 2 compact.txt
//! ```
//!
use super::args::{name_from_input, parse_source, read_tree_source, validate_project_name};
use crate::core::config;
use crate::core::error::Result;
use crate::tree::printer::{render_entries, PrintOptions};
use crate::tree::ParseOptions;
use anyhow::Context;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;

/// Arguments for `treeforge parse`.
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Tree text file, or `-` for stdin.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Columns per indentation level (1-8).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
    pub indent: Option<u8>,

    /// Name for the root node (defaults to the input file name).
    #[arg(long)]
    pub name: Option<String>,

    /// Print the parsed tree as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Handles `treeforge parse`.
pub async fn handle_parse(args: ParseArgs) -> Result<()> {
    let cfg = config::load_config().context("Failed to load TreeForge configuration")?;
    let text = read_tree_source(&args.input)?;
    let root_name = match &args.name {
        Some(name) => validate_project_name(name)?,
        None => name_from_input(&args.input),
    };
    let options = ParseOptions::new(
        root_name,
        args.indent.map(usize::from).unwrap_or_else(|| cfg.indent_unit()),
    );

    let root = parse_source(&text, &options)?;
    info!(
        "Parsed '{}' with a {}-column unit",
        args.input.display(),
        options.indent_unit
    );

    if args.json {
        let json = serde_json::to_string_pretty(&root).context("Failed to serialize tree")?;
        println!("{}", json);
        return Ok(());
    }

    let print_options = PrintOptions {
        bold_folders: std::io::stdout().is_terminal(),
    };
    print!("{}", render_entries(&root, print_options));
    println!(
        "\n{} folder(s), {} file(s)",
        root.count_folders(),
        root.count_files()
    );
    Ok(())
}
