//! # TreeForge Project Settings
//!
//! File: cli/src/core/settings.rs
//!
//! ## Overview
//!
//! `ProjectSettings` is the read-only record of project metadata consumed by
//! the content synthesizer: the project name and description that end up in
//! `package.json` and `README.md`, the license whose text fills `LICENSE`, the
//! `.gitignore` preset, the Vercel toggles and the plugin id (`project_type`)
//! that selects which rule set generates file contents.
//!
//! Settings are assembled once per command from code defaults, config files
//! (`core::config`) and command-line flags, and are never mutated by the
//! synthesizer. The default `year` is a fixed constant; the command layer
//! stamps the current year.
//!
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `.gitignore` preset written for the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum GitignoreTemplate {
    #[default]
    Node,
    React,
    Next,
    Python,
    None,
}

/// License embedded in `LICENSE` and referenced from `package.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum License {
    #[default]
    #[serde(rename = "MIT")]
    #[value(name = "MIT")]
    Mit,
    #[serde(rename = "Apache-2.0")]
    #[value(name = "Apache-2.0")]
    Apache2,
    #[serde(rename = "GPL-3.0")]
    #[value(name = "GPL-3.0")]
    Gpl3,
    #[serde(rename = "BSD-3-Clause")]
    #[value(name = "BSD-3-Clause")]
    Bsd3Clause,
    #[serde(rename = "none")]
    #[value(name = "none")]
    None,
}

impl License {
    /// SPDX identifier as used in `package.json` and `pyproject.toml`.
    /// Projects without a license are marked `UNLICENSED`, which npm understands.
    pub fn spdx(&self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Apache2 => "Apache-2.0",
            License::Gpl3 => "GPL-3.0",
            License::Bsd3Clause => "BSD-3-Clause",
            License::None => "UNLICENSED",
        }
    }

    /// Human-readable license name.
    pub fn display_name(&self) -> &'static str {
        match self {
            License::Mit => "MIT License",
            License::Apache2 => "Apache License 2.0",
            License::Gpl3 => "GNU General Public License v3.0",
            License::Bsd3Clause => "BSD 3-Clause License",
            License::None => "All rights reserved",
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spdx())
    }
}

/// Copyright year used until the command layer supplies the current one.
pub const DEFAULT_YEAR: i32 = 2024;

/// Project metadata read by the content synthesizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Project name; also the name of the parsed tree's root.
    pub name: String,
    pub description: String,
    /// Marks `package.json` as `"private": true`.
    pub private: bool,
    pub gitignore: GitignoreTemplate,
    pub license: License,
    /// Add a README.md at the project root when the tree has none.
    pub readme: bool,
    pub include_vercel_config: bool,
    pub include_vercel_ignore: bool,
    /// Plugin id (`nextjs`, `react`, `node`, `python`, ...).
    pub project_type: String,
    /// Copyright holder; falls back to the project name when empty.
    pub author: String,
    /// Copyright year. Kept as data so generated output is reproducible.
    pub year: i32,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            name: "my-app".to_string(),
            description: String::new(),
            private: false,
            gitignore: GitignoreTemplate::default(),
            license: License::default(),
            readme: true,
            include_vercel_config: false,
            include_vercel_ignore: false,
            project_type: "nextjs".to_string(),
            author: String::new(),
            year: DEFAULT_YEAR,
        }
    }
}

impl ProjectSettings {
    /// Default settings for a project with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The name printed in copyright lines.
    pub fn copyright_holder(&self) -> &str {
        if self.author.trim().is_empty() {
            &self.name
        } else {
            &self.author
        }
    }

    /// Description with a generic fallback for templates that need some text.
    pub fn description_or_default(&self) -> String {
        if self.description.trim().is_empty() {
            format!("{} project scaffolded with TreeForge", self.name)
        } else {
            self.description.clone()
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_identifiers() {
        assert_eq!(License::Mit.spdx(), "MIT");
        assert_eq!(License::Apache2.to_string(), "Apache-2.0");
        assert_eq!(License::None.spdx(), "UNLICENSED");
        assert_eq!(License::Bsd3Clause.display_name(), "BSD 3-Clause License");
    }

    #[test]
    fn test_settings_deserialize_from_toml() {
        let settings: ProjectSettings = toml::from_str(
            r#"
            name = "shop"
            description = "A store"
            private = true
            gitignore = "next"
            license = "Apache-2.0"
            readme = false
            include_vercel_config = true
            include_vercel_ignore = false
            project_type = "nextjs"
            author = "Acme"
            year = 2031
            "#,
        )
        .expect("settings should parse");
        assert_eq!(settings.gitignore, GitignoreTemplate::Next);
        assert_eq!(settings.license, License::Apache2);
        assert_eq!(settings.copyright_holder(), "Acme");
        assert_eq!(settings.year, 2031);
    }

    #[test]
    fn test_default_year_is_fixed() {
        assert_eq!(ProjectSettings::default().year, DEFAULT_YEAR);
        assert_eq!(ProjectSettings::named("a"), ProjectSettings::named("a"));
    }

    #[test]
    fn test_copyright_holder_falls_back_to_name() {
        let settings = ProjectSettings::named("widget");
        assert_eq!(settings.copyright_holder(), "widget");
        assert_eq!(
            settings.description_or_default(),
            "widget project scaffolded with TreeForge"
        );
    }

    #[test]
    fn test_license_value_enum_names() {
        let parsed = License::from_str("BSD-3-Clause", false).expect("known license");
        assert_eq!(parsed, License::Bsd3Clause);
        let gitignore = GitignoreTemplate::from_str("python", false).expect("known preset");
        assert_eq!(gitignore, GitignoreTemplate::Python);
    }
}
