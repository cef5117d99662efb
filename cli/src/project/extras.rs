//! # TreeForge Project Extras
//!
//! File: cli/src/project/extras.rs
//!
//! Root-level files implied by the project settings rather than the tree:
//!
//! | File            | Added when                      |
//! |-----------------|---------------------------------|
//! | `README.md`     | `readme`                        |
//! | `.gitignore`    | `gitignore` is not `none`       |
//! | `LICENSE`       | `license` is not `none`         |
//! | `vercel.json`   | `include_vercel_config`         |
//! | `.vercelignore` | `include_vercel_ignore`         |
//!
//! An extra is skipped when the tree already has a root file of that kind
//! (`readme`, `license.md`, ... compared case-insensitively). Contents come from
//! the active plugin, exactly as if the file had been listed in the tree.
//!
use super::file_map::FileMap;
use crate::core::settings::{GitignoreTemplate, License, ProjectSettings};
use crate::synth::PluginRegistry;
use tracing::debug;

struct Extra {
    path: &'static str,
    equivalents: &'static [&'static str],
    wanted: fn(&ProjectSettings) -> bool,
}

const EXTRAS: &[Extra] = &[
    Extra {
        path: "README.md",
        equivalents: &["readme.md", "readme"],
        wanted: |s| s.readme,
    },
    Extra {
        path: ".gitignore",
        equivalents: &[".gitignore"],
        wanted: |s| s.gitignore != GitignoreTemplate::None,
    },
    Extra {
        path: "LICENSE",
        equivalents: &["license", "license.md", "license.txt"],
        wanted: |s| s.license != License::None,
    },
    Extra {
        path: "vercel.json",
        equivalents: &["vercel.json"],
        wanted: |s| s.include_vercel_config,
    },
    Extra {
        path: ".vercelignore",
        equivalents: &[".vercelignore"],
        wanted: |s| s.include_vercel_ignore,
    },
];

fn has_root_file(map: &FileMap, equivalents: &[&str]) -> bool {
    map.paths()
        .filter(|path| !path.contains('/'))
        .any(|path| equivalents.iter().any(|name| path.eq_ignore_ascii_case(name)))
}

/// Adds the settings-implied files missing from `map`; returns the added paths.
pub fn add_project_extras(
    map: &mut FileMap,
    settings: &ProjectSettings,
    registry: &PluginRegistry,
) -> Vec<&'static str> {
    let mut added = Vec::new();
    for extra in EXTRAS {
        if !(extra.wanted)(settings) {
            continue;
        }
        if has_root_file(map, extra.equivalents) {
            debug!("Tree already provides '{}'; not adding it", extra.path);
            continue;
        }
        map.insert(extra.path, registry.synthesize(extra.path, settings));
        added.push(extra.path);
    }
    added
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_add_readme_gitignore_license() {
        let mut map = FileMap::new("demo");
        map.insert("src/index.ts", "x");
        let added = add_project_extras(&mut map, &ProjectSettings::named("demo"), &PluginRegistry::with_builtin());
        assert_eq!(added, vec!["README.md", ".gitignore", "LICENSE"]);
        let paths: Vec<_> = map.paths().collect();
        assert_eq!(paths, vec!["src/index.ts", "README.md", ".gitignore", "LICENSE"]);
    }

    #[test]
    fn test_existing_files_are_never_overridden() {
        let mut map = FileMap::new("demo");
        map.insert("readme.md", "mine");
        map.insert("LICENSE.txt", "custom");
        map.insert("docs/LICENSE", "nested does not count");
        let added = add_project_extras(&mut map, &ProjectSettings::named("demo"), &PluginRegistry::with_builtin());
        assert_eq!(added, vec![".gitignore"]);
        assert_eq!(map.get("readme.md"), Some("mine"));
        assert_eq!(map.get("LICENSE.txt"), Some("custom"));
    }

    #[test]
    fn test_flags_control_extras() {
        let settings = ProjectSettings {
            readme: false,
            gitignore: GitignoreTemplate::None,
            license: License::None,
            include_vercel_config: true,
            include_vercel_ignore: true,
            ..ProjectSettings::named("demo")
        };
        let mut map = FileMap::new("demo");
        let added = add_project_extras(&mut map, &settings, &PluginRegistry::with_builtin());
        assert_eq!(added, vec!["vercel.json", ".vercelignore"]);
        assert!(map.get("vercel.json").expect("vercel.json").contains("\"framework\": \"nextjs\""));
    }
}
