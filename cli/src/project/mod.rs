//! # TreeForge Project Assembly
//!
//! File: cli/src/project/mod.rs
//!
//! ## Overview
//!
//! Turns a parsed tree plus project settings into the `FileMap` handed to the
//! writers (`common::fs::io::write_file_map`, `common::archive::tar`):
//!
//! 1. `flatten`: depth-first walk, explicit content first, synthesis otherwise
//! 2. `extras::add_project_extras`: settings-implied root files
//!
//! `overlay::apply_overlay` runs before flattening when the user supplies a
//! directory of hand-written files; those become explicit content.
//!
//! `unwrap_project_folder` handles trees that wrap everything in a single
//! top-level folder (`my-app/` followed by its contents): the command layer
//! uses that folder as the project root so the output is not nested twice.
//!
pub mod extras;
pub mod file_map;
pub mod flatten;
pub mod overlay;

pub use file_map::FileMap;
pub use flatten::flatten;

use crate::core::settings::ProjectSettings;
use crate::synth::PluginRegistry;
use crate::tree::{TreeNode, ROOT_LEVEL};
use tracing::info;

/// Flattens `root` and adds the settings-implied extras.
pub fn assemble(root: &TreeNode, settings: &ProjectSettings, registry: &PluginRegistry) -> FileMap {
    let mut map = flatten(root, settings, registry);
    let added = extras::add_project_extras(&mut map, settings, registry);
    info!(
        "Assembled '{}': {} files ({} added from settings), {} empty folders",
        map.root_name(),
        map.len(),
        added.len(),
        map.empty_dirs().len()
    );
    map
}

/// If the only entry under `root` is a folder, returns that folder as the new
/// root; otherwise returns `root` unchanged.
pub fn unwrap_project_folder(root: TreeNode) -> TreeNode {
    let single_folder = matches!(root.children(), [only] if only.is_folder());
    if !single_folder {
        return root;
    }
    let mut root = root;
    match root.children_mut().and_then(|children| children.pop()) {
        Some(mut folder) => {
            folder.level = ROOT_LEVEL;
            folder
        }
        None => root,
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{parse_tree, ParseOptions};

    #[test]
    fn test_unwrap_single_top_folder() {
        let root = parse_tree("my-app/\n├── package.json\n└── src/\n    └── index.ts\n", &ParseOptions::default())
            .expect("valid");
        let project = unwrap_project_folder(root);
        assert_eq!(project.name, "my-app");
        assert_eq!(project.level, ROOT_LEVEL);

        let map = assemble(&project, &ProjectSettings::named("my-app"), &PluginRegistry::with_builtin());
        let paths: Vec<_> = map.paths().collect();
        assert_eq!(
            paths,
            vec!["package.json", "src/index.ts", "README.md", ".gitignore", "LICENSE"]
        );
        assert_eq!(map.root_name(), "my-app");
    }

    #[test]
    fn test_unwrap_keeps_multi_entry_roots() {
        let root = parse_tree("src/\nREADME.md\n", &ParseOptions::default()).expect("valid");
        assert_eq!(unwrap_project_folder(root).name, "project");

        let single_file = parse_tree("README.md\n", &ParseOptions::default()).expect("valid");
        assert_eq!(unwrap_project_folder(single_file).children().len(), 1);
    }
}
