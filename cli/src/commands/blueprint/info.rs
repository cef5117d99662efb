//! # TreeForge Blueprint Info Command
//!
//! File: cli/src/commands/blueprint/info.rs
//!
//! ## Overview
//!
//! Implements `treeforge blueprint info <ID>`: a boxed summary of one
//! blueprint with its description, default project type, the tree it creates
//! and how to use it.
//!
//! ```text
//! ┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┓
//! ┃ 🔎 Blueprint Details: saas
//! ┣━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┫
//! ┃ 🏷️  Title:         SaaS Starter
//! ┃ 📝 Description:   Next.js marketing site with pricing, ...
//! ┃ 🛠️  Project Type:  nextjs
//! ┣--------------------------------------------------------------------┫
//! ┃ 📁 File Structure:
//! ┃    saas/
//! ┃    ├── app/
//! ...
//! ```
//!
use crate::blueprints::{self, Blueprint};
use crate::core::error::{ForgeError, Result};
use crate::tree::printer::{render_tree, PrintOptions};
use crate::tree::{parse_tree, ParseOptions};
use clap::Parser;
use tracing::{debug, warn};

const HEAVY_RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const LIGHT_RULE: &str = "--------------------------------------------------------------------";

/// Arguments for `treeforge blueprint info`.
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Blueprint id (see `treeforge blueprint list`).
    #[arg(required = true)]
    blueprint_name: String,
}

/// Handles `treeforge blueprint info`.
pub async fn handle_info(args: InfoArgs) -> Result<()> {
    let bp = blueprints::find(&args.blueprint_name).ok_or_else(|| ForgeError::BlueprintNotFound {
        name: args.blueprint_name.clone(),
    })?;
    debug!("Displaying blueprint '{}'", bp.id);
    print!("{}", format_details(bp));
    Ok(())
}

fn format_details(bp: &Blueprint) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n┏{}┓\n", HEAVY_RULE));
    out.push_str(&format!("┃ 🔎 Blueprint Details: {}\n", bp.id));
    out.push_str(&format!("┣{}┫\n", HEAVY_RULE));
    out.push_str(&format!("┃ 🏷️  Title:         {}\n", bp.title));
    out.push_str(&format!("┃ 📝 Description:   {}\n", bp.description));
    out.push_str(&format!("┃ 🛠️  Project Type:  {}\n", bp.project_type));
    out.push_str(&format!("┣{}┫\n", LIGHT_RULE));

    out.push_str("┃ 📁 File Structure:\n");
    match parse_tree(bp.tree, &ParseOptions::new(bp.id, 4)) {
        Ok(root) => {
            for line in render_tree(&root, PrintOptions::default()).lines() {
                out.push_str(&format!("┃    {}\n", line));
            }
            out.push_str(&format!(
                "┃    ({} folders, {} files before settings-implied extras)\n",
                root.count_folders(),
                root.count_files()
            ));
        }
        Err(e) => {
            warn!("Blueprint '{}' has an invalid tree: {}", bp.id, e);
            out.push_str("┃    [Error displaying file structure]\n");
        }
    }
    out.push_str(&format!("┣{}┫\n", LIGHT_RULE));

    out.push_str("┃ 🚀 Usage:\n");
    out.push_str("┃    To create a new project from this blueprint:\n");
    out.push_str(&format!(
        "┃      treeforge blueprint create --lang {} <your-project-name>\n",
        bp.id
    ));
    out.push_str("┃\n");
    out.push_str("┃    Example:\n");
    out.push_str(&format!(
        "┃      treeforge blueprint create --lang {} my-{}-app\n",
        bp.id, bp.id
    ));
    out.push_str(&format!("┗{}┛\n", HEAVY_RULE));
    out
}
