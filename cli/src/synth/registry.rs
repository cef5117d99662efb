//! # TreeForge Plugin Registry
//!
//! File: cli/src/synth/registry.rs
//!
//! ## Overview
//!
//! Resolves `ProjectSettings::project_type` to a `Plugin`. The registry is an
//! ordinary value owned by the command that needs it; ids are matched
//! case-insensitively, and unknown ids resolve to the built-in generic plugin
//! with a warning, so `synthesize` never fails.
//!
//! ## Examples
//!
//! ```rust
//! let registry = PluginRegistry::with_builtin();
//! let text = registry.synthesize("app/layout.tsx", &settings);
//! ```
//!
use super::plugins::{GenericPlugin, NextJsPlugin, NodePlugin, PythonPlugin, ReactPlugin};
use super::Plugin;
use crate::core::settings::ProjectSettings;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Keyed collection of content plugins with a generic fallback.
pub struct PluginRegistry {
    plugins: HashMap<String, Arc<dyn Plugin>>,
    fallback: Arc<dyn Plugin>,
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.ids())
            .field("fallback", &self.fallback.id())
            .finish()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl PluginRegistry {
    /// A registry holding only the generic fallback.
    pub fn new() -> Self {
        let fallback: Arc<dyn Plugin> = Arc::new(GenericPlugin::new());
        let mut plugins = HashMap::new();
        plugins.insert(fallback.id().to_string(), Arc::clone(&fallback));
        Self { plugins, fallback }
    }

    /// A registry with every built-in plugin.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(NextJsPlugin::new()));
        registry.register(Arc::new(ReactPlugin::new()));
        registry.register(Arc::new(NodePlugin::new()));
        registry.register(Arc::new(PythonPlugin::new()));
        registry
    }

    /// Adds `plugin`, replacing any plugin registered under the same id.
    pub fn register(&mut self, plugin: Arc<dyn Plugin>) {
        let id = plugin.id().to_ascii_lowercase();
        debug!("Registering content plugin '{}' ({})", id, plugin.name());
        if self.plugins.insert(id.clone(), plugin).is_some() {
            warn!("Content plugin '{}' was registered twice; the later one wins.", id);
        }
    }

    /// Looks up a plugin by id.
    pub fn get(&self, id: &str) -> Option<&dyn Plugin> {
        self.plugins
            .get(&id.trim().to_ascii_lowercase())
            .map(|plugin| plugin.as_ref())
    }

    /// The plugin for `id`, or the generic fallback.
    pub fn resolve(&self, id: &str) -> &dyn Plugin {
        match self.get(id) {
            Some(plugin) => plugin,
            None => {
                warn!(
                    "Unknown project type '{}'; using the {} generator.",
                    id,
                    self.fallback.id()
                );
                self.fallback.as_ref()
            }
        }
    }

    /// Registered plugin ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.plugins.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Registered plugins, sorted by id.
    pub fn plugins(&self) -> Vec<&dyn Plugin> {
        self.ids()
            .into_iter()
            .filter_map(|id| self.plugins.get(id))
            .map(|plugin| plugin.as_ref())
            .collect()
    }

    /// Content for the file at `path`, generated by the plugin named in
    /// `settings.project_type`.
    pub fn synthesize(&self, path: &str, settings: &ProjectSettings) -> String {
        self.resolve(&settings.project_type)
            .generate_content(path, settings)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn settings_for(project_type: &str) -> ProjectSettings {
        ProjectSettings {
            project_type: project_type.into(),
            ..ProjectSettings::named("my-app")
        }
    }

    #[test]
    fn test_builtin_ids() {
        let registry = PluginRegistry::with_builtin();
        assert_eq!(registry.ids(), vec!["generic", "nextjs", "node", "python", "react"]);
        assert!(registry.get("NextJS").is_some());
        assert_eq!(registry.plugins().len(), 5);
    }

    #[test]
    fn test_unknown_type_falls_back_to_generic() {
        let registry = PluginRegistry::with_builtin();
        assert_eq!(registry.resolve("cobol").id(), "generic");
        let text = registry.synthesize("main.cbl", &settings_for("cobol"));
        assert_eq!(text, "// main.cbl\n");
    }

    #[test]
    fn test_synthesis_is_total_for_every_plugin() {
        let registry = PluginRegistry::with_builtin();
        let names = [
            "file.unknownext",
            "Makefile",
            ".dotfile",
            "LICENSE",
            "x",
            "a.b.c",
            "Ünïcødé.tsx",
            "page.tsx",
            "",
        ];
        for id in registry.ids() {
            let settings = settings_for(id);
            for name in names {
                let text = registry.synthesize(name, &settings);
                assert!(!text.is_empty(), "plugin {} produced nothing for {:?}", id, name);
            }
        }
    }

    #[test]
    fn test_package_json_scenario() {
        let registry = PluginRegistry::with_builtin();
        for id in registry.ids() {
            let text = registry.synthesize("package.json", &settings_for(id));
            let value: Value = serde_json::from_str(&text)
                .unwrap_or_else(|e| panic!("{}: invalid JSON: {}", id, e));
            assert_eq!(value["name"], "my-app");
            assert!(text.contains("\"name\": \"my-app\""));
        }
    }

    #[test]
    fn test_register_replaces_same_id() {
        let mut registry = PluginRegistry::new();
        assert_eq!(registry.ids(), vec!["generic"]);
        registry.register(Arc::new(NodePlugin::new()));
        registry.register(Arc::new(NodePlugin::new()));
        assert_eq!(registry.ids(), vec!["generic", "node"]);
    }
}
