//! # Generic Plugin
//!
//! File: cli/src/synth/plugins/generic.rs
//!
//! The fallback plugin used when `project_type` names no registered plugin.
//! It carries only the shared rules.
//!
use crate::synth::common;
use crate::synth::rule::Rule;
use crate::synth::{compose, Plugin};

pub const GENERIC_ID: &str = "generic";

/// Shared rules only.
pub struct GenericPlugin {
    rules: Vec<Rule>,
}

impl GenericPlugin {
    pub fn new() -> Self {
        Self {
            rules: compose(&[common::BASENAME_RULES, common::EXTENSION_RULES]),
        }
    }
}

impl Default for GenericPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for GenericPlugin {
    fn id(&self) -> &'static str {
        GENERIC_ID
    }

    fn name(&self) -> &'static str {
        "Generic"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[
            "tsx", "jsx", "ts", "js", "css", "md", "json", "html", "py", "yml", "sh", "sql", "svg",
            "txt",
        ]
    }

    fn config_files(&self) -> &'static [&'static str] {
        &["package.json", "README.md", ".gitignore", "LICENSE", "tsconfig.json"]
    }

    fn rules(&self) -> &[Rule] {
        &self.rules
    }
}
