//! # TreeForge Types Command
//!
//! File: cli/src/commands/types.rs
//!
//! Implements `treeforge types`: lists the registered content plugins, the
//! values accepted by `--type` and `[defaults] project_type`.
//!
use crate::core::error::Result;
use crate::synth::PluginRegistry;
use clap::Parser;

/// Arguments for `treeforge types`.
#[derive(Parser, Debug)]
pub struct TypesArgs {
    /// Also list the file extensions and config files each plugin knows.
    #[arg(long)]
    pub detailed: bool,
}

/// Handles `treeforge types`.
pub async fn handle_types(args: TypesArgs) -> Result<()> {
    let registry = PluginRegistry::with_builtin();
    print!("{}", format_types(&registry, args.detailed));
    Ok(())
}

fn format_types(registry: &PluginRegistry, detailed: bool) -> String {
    let plugins = registry.plugins();
    let id_width = plugins.iter().map(|p| p.id().len()).max().unwrap_or(0);

    let mut out = String::from("\nProject types:\n\n");
    for plugin in &plugins {
        out.push_str(&format!("  {:<w$}  {}\n", plugin.id(), plugin.name(), w = id_width));
        if detailed {
            out.push_str(&format!(
                "  {:<w$}    extensions:   {}\n",
                "",
                plugin.extensions().join(", "),
                w = id_width
            ));
            out.push_str(&format!(
                "  {:<w$}    config files: {}\n",
                "",
                plugin.config_files().join(", "),
                w = id_width
            ));
        }
    }
    out.push_str("\nUnknown types fall back to 'generic'.\n");
    out
}
