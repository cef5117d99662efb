//! # TreeForge Content Synthesizer
//!
//! File: cli/src/synth/mod.rs
//!
//! ## Overview
//!
//! Decides what text goes into a file that the tree text only names. The
//! entry point is `PluginRegistry::synthesize(path, settings)`, a total
//! function: every non-empty file name gets non-empty content.
//!
//! ## Architecture
//!
//! - `rule`: `Rule` = `Matcher` + generator fn, evaluated first match wins,
//!   plus the placeholder fallback
//! - `common`: rules shared by every plugin (well-known names, one generator
//!   per extension)
//! - `licenses`, `gitignore`: LICENSE texts and `.gitignore` presets
//! - `plugins`: one rule set per target framework (`nextjs`, `react`, `node`,
//!   `python`, and the `generic` fallback)
//! - `registry`: maps `settings.project_type` to a plugin
//!
//! Each plugin's rule list is assembled in a fixed order:
//!
//! 1. plugin basename rules
//! 2. shared basename rules
//! 3. plugin extension rules (with basename-substring sub-dispatch)
//! 4. shared extension rules
//!
//! anything left over gets `rule::placeholder`.
//!
pub mod common;
pub mod gitignore;
pub mod licenses;
pub mod plugins;
pub mod registry;
pub mod rule;

pub use registry::PluginRegistry;
pub use rule::{FileContext, Rule};

use crate::core::settings::ProjectSettings;
use tracing::debug;

/// A rule set generating file content for one target framework or language.
pub trait Plugin: Send + Sync {
    /// Registry key, matched against `ProjectSettings::project_type`.
    fn id(&self) -> &'static str;

    /// Human-readable name for listings.
    fn name(&self) -> &'static str;

    /// File extensions the plugin has dedicated generators for.
    fn extensions(&self) -> &'static [&'static str];

    /// Configuration file names the plugin has dedicated generators for.
    fn config_files(&self) -> &'static [&'static str];

    /// The complete ordered rule list, shared rules included.
    fn rules(&self) -> &[Rule];

    /// Content for the file at `path` (relative, `/`-separated).
    ///
    /// Never fails and never returns an empty string for a non-empty name.
    fn generate_content(&self, path: &str, settings: &ProjectSettings) -> String {
        let file = FileContext::new(path);
        match rule::first_match(self.rules(), &file) {
            Some(matched) => {
                debug!("[{}] '{}' matched rule '{}'", self.id(), path, matched.label);
                let text = (matched.generate)(&file, settings);
                if text.is_empty() {
                    rule::placeholder(&file)
                } else {
                    text
                }
            }
            None => {
                debug!("[{}] '{}' matched no rule; using placeholder", self.id(), path);
                rule::placeholder(&file)
            }
        }
    }
}

/// Concatenates rule groups into one ordered list.
pub fn compose(groups: &[&[Rule]]) -> Vec<Rule> {
    groups.iter().flat_map(|group| group.iter().copied()).collect()
}
