//! # TreeForge Blueprint List Command
//!
//! File: cli/src/commands/blueprint/list.rs
//!
//! ## Overview
//!
//! Implements `treeforge blueprint list`: a table of the built-in blueprints
//! with their id, default project type and description.
//!
//! ```text
//! ID        | Type   | Description
//! ----------+--------+--------------------------------------------------
//! saas      | nextjs | Next.js marketing site with pricing, ...
//! ```
//!
use crate::blueprints::{self, Blueprint};
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

/// Arguments for `treeforge blueprint list` (none yet).
#[derive(Parser, Debug)]
pub struct ListArgs {}

/// Handles `treeforge blueprint list`.
pub async fn handle_list(_args: ListArgs) -> Result<()> {
    let all = blueprints::all();
    info!("Listing {} built-in blueprints", all.len());
    print!("{}", format_table(all));
    Ok(())
}

fn format_table(blueprints: &[Blueprint]) -> String {
    let id_width = blueprints.iter().map(|bp| bp.id.len()).max().unwrap_or(0).max(2);
    let type_width = blueprints
        .iter()
        .map(|bp| bp.project_type.len())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = String::from("\nBuilt-in Blueprints:\n\n");
    out.push_str(&format!(
        "{:<iw$} | {:<tw$} | Description\n",
        "ID",
        "Type",
        iw = id_width,
        tw = type_width
    ));
    out.push_str(&format!(
        "{:-<iw$}-+-{:-<tw$}-+-{:-<50}\n",
        "",
        "",
        "",
        iw = id_width,
        tw = type_width
    ));
    for bp in blueprints {
        out.push_str(&format!(
            "{:<iw$} | {:<tw$} | {}\n",
            bp.id,
            bp.project_type,
            bp.description,
            iw = id_width,
            tw = type_width
        ));
    }
    out.push_str(&format!("\nFound {} blueprint(s).\n", blueprints.len()));
    out.push_str(
        "Use 'treeforge blueprint info <ID>' for details or 'treeforge blueprint create --lang <ID> <NAME>' to use one.\n",
    );
    out
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_blueprint() {
        let table = format_table(blueprints::all());
        for bp in blueprints::all() {
            assert!(table.contains(bp.id));
            assert!(table.contains(bp.description));
        }
        assert!(table.contains("ID        | Type   | Description"));
        assert!(table.contains("Found 5 blueprint(s)."));
    }
}
