//! # TreeForge Flattening
//!
//! File: cli/src/project/flatten.rs
//!
//! Depth-first walk turning a `TreeNode` into a `FileMap`. Paths are relative
//! to the root (the root's own name is not part of them) and joined with `/`.
//! A file's explicit content is used verbatim; otherwise the registry
//! synthesizes it from the path.
//!
use super::file_map::FileMap;
use crate::core::settings::ProjectSettings;
use crate::synth::PluginRegistry;
use crate::tree::TreeNode;
use tracing::trace;

/// Flattens every descendant of `root` into a new `FileMap` named after it.
pub fn flatten(root: &TreeNode, settings: &ProjectSettings, registry: &PluginRegistry) -> FileMap {
    let mut map = FileMap::new(root.name.clone());
    for child in root.children() {
        walk(child, "", settings, registry, &mut map);
    }
    map
}

fn walk(
    node: &TreeNode,
    parent: &str,
    settings: &ProjectSettings,
    registry: &PluginRegistry,
    map: &mut FileMap,
) {
    let path = if parent.is_empty() {
        node.name.clone()
    } else {
        format!("{}/{}", parent, node.name)
    };

    if node.is_file() {
        let text = match node.content() {
            Some(explicit) => {
                trace!("'{}' has explicit content", path);
                explicit.to_string()
            }
            None => registry.synthesize(&path, settings),
        };
        map.insert(path, text);
        return;
    }

    if node.children().is_empty() {
        map.add_empty_dir(path.clone());
    }
    for child in node.children() {
        walk(child, &path, settings, registry, map);
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{parse_tree, ParseOptions};
    use serde_json::Value;

    fn parse(text: &str, root_name: &str) -> TreeNode {
        parse_tree(
            text,
            &ParseOptions {
                root_name: root_name.to_string(),
                ..ParseOptions::default()
            },
        )
        .expect("valid tree")
    }

    #[test]
    fn test_my_app_paths_and_package_json() {
        let text = "my-app/\n├── package.json\n├── src/\n│   └── index.ts\n";
        let root = parse(text, "my-app");
        let settings = ProjectSettings::named("my-app");
        let map = flatten(&root, &settings, &PluginRegistry::with_builtin());

        let paths: Vec<_> = map.paths().collect();
        assert_eq!(paths, vec!["my-app/package.json", "my-app/src/index.ts"]);

        let package = map.get("my-app/package.json").expect("package.json");
        let value: Value = serde_json::from_str(package).expect("valid JSON");
        assert_eq!(value["name"], "my-app");
        assert!(package.contains("\"name\": \"my-app\""));
    }

    #[test]
    fn test_explicit_content_wins() {
        let mut root = parse("src/\n    index.ts\npackage.json\n", "demo");
        assert!(root
            .find_mut("src/index.ts")
            .expect("node")
            .set_content("console.log('hand written');\n"));
        root.find_mut("package.json").expect("node").set_content("");

        let map = flatten(&root, &ProjectSettings::named("demo"), &PluginRegistry::with_builtin());
        assert_eq!(map.get("src/index.ts"), Some("console.log('hand written');\n"));
        // Explicit empty content is still explicit.
        assert_eq!(map.get("package.json"), Some(""));
    }

    #[test]
    fn test_readme_uses_description() {
        let root = parse("README.md\n", "demo");
        let settings = ProjectSettings {
            description: "hello".into(),
            ..ProjectSettings::named("demo")
        };
        let map = flatten(&root, &settings, &PluginRegistry::with_builtin());
        assert_eq!(map.len(), 1);
        assert!(map.get("README.md").expect("readme").contains("hello"));
    }

    #[test]
    fn test_empty_folders_and_order() {
        let root = parse("public/\nsrc/\n    b.ts\n    a.ts\nz.md\n", "demo");
        let map = flatten(&root, &ProjectSettings::named("demo"), &PluginRegistry::with_builtin());
        assert_eq!(map.empty_dirs(), &["public".to_string()]);
        let paths: Vec<_> = map.paths().collect();
        assert_eq!(paths, vec!["src/b.ts", "src/a.ts", "z.md"]);
        assert_eq!(map.root_name(), "demo");
    }

    #[test]
    fn test_duplicate_names_collapse_to_last() {
        let mut root = parse("a.txt\na.txt\n", "demo");
        root.children_mut().expect("folder")[1].set_content("second");
        let map = flatten(&root, &ProjectSettings::named("demo"), &PluginRegistry::with_builtin());
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a.txt"), Some("second"));
    }
}
