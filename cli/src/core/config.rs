//! # TreeForge Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for TreeForge, handling
//! loading, merging, validation, and access to configuration data. Configuration
//! supplies the default project settings (license, `.gitignore` preset, project
//! type, ...), the parser's indentation unit and the default output directory.
//! Command-line flags always win over anything configured here.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.treeforge.toml` in the current directory or an ancestor
//!    (the search stops at a directory containing `.git`)
//! 2. User-specific `~/.config/treeforge/config.toml`, or the file named by the
//!    `TREEFORGE_CONFIG` environment variable when it is set
//! 3. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [defaults]
//! license = "Apache-2.0"
//! gitignore = "next"
//! project_type = "nextjs"
//! author = "Acme Corp"
//!
//! [parser]
//! indent_unit = 4
//!
//! [output]
//! directory = "~/projects"
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let settings = cfg.settings_for("my-app");
//! let unit = cfg.indent_unit();
//! ```
//!
use crate::core::error::{ForgeError, Result};
use crate::core::settings::{GitignoreTemplate, License, ProjectSettings};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: SettingsDefaults,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Default values for `ProjectSettings`. Unset fields keep the built-in default.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SettingsDefaults {
    pub description: Option<String>,
    pub private: Option<bool>,
    pub gitignore: Option<GitignoreTemplate>,
    pub license: Option<License>,
    pub readme: Option<bool>,
    pub include_vercel_config: Option<bool>,
    pub include_vercel_ignore: Option<bool>,
    pub project_type: Option<String>,
    pub author: Option<String>,
}

/// Settings for the tree parser.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    /// Columns of prefix per nesting level.
    pub indent_unit: Option<usize>,
}

/// Where generated projects are written.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Parent directory for generated projects (can use ~). Will be expanded.
    pub directory: Option<String>,
}

const DEFAULT_OUTPUT_DIR: &str = ".";
const PROJECT_CONFIG_FILENAME: &str = ".treeforge.toml";
/// Environment variable that replaces the user config file location.
pub const CONFIG_ENV_VAR: &str = "TREEFORGE_CONFIG";
/// Largest accepted indentation unit.
const MAX_INDENT_UNIT: usize = 8;

impl Config {
    /// Configured indentation unit, or the parser's default.
    pub fn indent_unit(&self) -> usize {
        self.parser
            .indent_unit
            .unwrap_or(crate::tree::parser::DEFAULT_INDENT_UNIT)
    }

    /// Configured output directory, or the current directory.
    pub fn output_dir(&self) -> &str {
        self.output.directory.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR)
    }

    /// Builds `ProjectSettings` for `name` from the configured defaults.
    pub fn settings_for(&self, name: &str) -> ProjectSettings {
        let base = ProjectSettings::named(name);
        let d = &self.defaults;
        ProjectSettings {
            description: d.description.clone().unwrap_or(base.description),
            private: d.private.unwrap_or(base.private),
            gitignore: d.gitignore.unwrap_or(base.gitignore),
            license: d.license.unwrap_or(base.license),
            readme: d.readme.unwrap_or(base.readme),
            include_vercel_config: d
                .include_vercel_config
                .unwrap_or(base.include_vercel_config),
            include_vercel_ignore: d
                .include_vercel_ignore
                .unwrap_or(base.include_vercel_ignore),
            project_type: d.project_type.clone().unwrap_or(base.project_type),
            author: d.author.clone().unwrap_or(base.author),
            ..base
        }
    }
}

/// Loads, merges, expands and validates the configuration for this invocation.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
        let config_path = PathBuf::from(shellexpand::tilde(&explicit).into_owned());
        if config_path.is_file() {
            info!(
                "Loading configuration from {}: {}",
                CONFIG_ENV_VAR,
                config_path.display()
            );
            return load_config_from_path(&config_path).map(Some);
        }
        debug!(
            "{} points to '{}', which is not a file; using built-in defaults.",
            CONFIG_ENV_VAR,
            config_path.display()
        );
        return Ok(None);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "TreeForge", "treeforge") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.treeforge.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let (p, u) = (project_cfg.defaults, user.defaults);
    Config {
        defaults: SettingsDefaults {
            description: p.description.or(u.description),
            private: p.private.or(u.private),
            gitignore: p.gitignore.or(u.gitignore),
            license: p.license.or(u.license),
            readme: p.readme.or(u.readme),
            include_vercel_config: p.include_vercel_config.or(u.include_vercel_config),
            include_vercel_ignore: p.include_vercel_ignore.or(u.include_vercel_ignore),
            project_type: p.project_type.or(u.project_type),
            author: p.author.or(u.author),
        },
        parser: ParserConfig {
            indent_unit: project_cfg.parser.indent_unit.or(user.parser.indent_unit),
        },
        output: OutputConfig {
            directory: project_cfg.output.directory.or(user.output.directory),
        },
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(directory) = config.output.directory.as_mut() {
        *directory = shellexpand::tilde(directory.as_str()).into_owned();
        debug!("Expanded output directory: {}", directory);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    let unit = config.indent_unit();
    if unit == 0 || unit > MAX_INDENT_UNIT {
        return Err(anyhow!(ForgeError::Config(format!(
            "indent_unit must be between 1 and {}, got {}.",
            MAX_INDENT_UNIT, unit
        ))));
    }
    let out_dir = PathBuf::from(config.output_dir());
    if out_dir.exists() && !out_dir.is_dir() {
        return Err(anyhow!(ForgeError::Config(format!(
            "Configured output path '{}' exists but is not a directory.",
            out_dir.display()
        ))));
    }
    if let Some(project_type) = &config.defaults.project_type {
        if project_type.trim().is_empty() {
            return Err(anyhow!(ForgeError::Config(
                "project_type must not be empty.".to_string()
            )));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [defaults]
            license = "GPL-3.0"
            gitignore = "python"
            project_type = "python"
            readme = false

            [parser]
            indent_unit = 2

            [output]
            directory = "~/scaffolds"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.defaults.license, Some(License::Gpl3));
        assert_eq!(config.defaults.gitignore, Some(GitignoreTemplate::Python));
        assert_eq!(config.defaults.project_type.as_deref(), Some("python"));
        assert_eq!(config.defaults.readme, Some(false));
        assert_eq!(config.defaults.author, None);
        assert_eq!(config.indent_unit(), 2);
        assert_eq!(config.output_dir(), "~/scaffolds"); // Not yet expanded
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[defaults]\ncolour = \"red\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_for_applies_defaults() {
        let config = Config {
            defaults: SettingsDefaults {
                license: Some(License::Apache2),
                author: Some("Acme".into()),
                include_vercel_config: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        let settings = config.settings_for("shop");
        assert_eq!(settings.name, "shop");
        assert_eq!(settings.license, License::Apache2);
        assert_eq!(settings.author, "Acme");
        assert!(settings.include_vercel_config);
        // Untouched fields keep the built-in defaults.
        assert!(settings.readme);
        assert_eq!(settings.project_type, "nextjs");
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user = Config {
            defaults: SettingsDefaults {
                license: Some(License::Mit),
                author: Some("User".into()),
                ..Default::default()
            },
            parser: ParserConfig {
                indent_unit: Some(2),
            },
            output: OutputConfig {
                directory: Some("/home/user/out".into()),
            },
        };
        let project = Config {
            defaults: SettingsDefaults {
                license: Some(License::Bsd3Clause),
                ..Default::default()
            },
            ..Default::default()
        };
        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.defaults.license, Some(License::Bsd3Clause));
        assert_eq!(merged.defaults.author.as_deref(), Some("User"));
        assert_eq!(merged.indent_unit(), 2);
        assert_eq!(merged.output_dir(), "/home/user/out");
    }

    #[test]
    fn test_merge_project_can_restore_default_values() {
        let user = Config {
            parser: ParserConfig {
                indent_unit: Some(2),
            },
            output: OutputConfig {
                directory: Some("/home/user/out".into()),
            },
            ..Default::default()
        };
        let project: Config =
            toml::from_str("[parser]\nindent_unit = 4\n\n[output]\ndirectory = \".\"\n").unwrap();
        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.indent_unit(), 4);
        assert_eq!(merged.output_dir(), ".");
    }

    #[test]
    fn test_unset_values_fall_back_to_builtin_defaults() {
        let config = Config::default();
        assert_eq!(config.indent_unit(), 4);
        assert_eq!(config.output_dir(), ".");
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            output: OutputConfig {
                directory: Some("~/tf_test".to_string()),
            },
            ..Default::default()
        };
        expand_config_paths(&mut config).unwrap();
        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(
            config.output_dir(),
            home_dir.join("tf_test").to_string_lossy()
        );
    }

    #[test]
    fn test_validate_config_indent_unit_bounds() {
        let mut config = Config::default();
        assert!(validate_config(&config).is_ok());

        config.parser.indent_unit = Some(0);
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("indent_unit must be between 1 and 8"));

        config.parser.indent_unit = Some(9);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_output_path_is_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("not_a_dir");
        fs::write(&file_path, "").unwrap();

        let config = Config {
            output: OutputConfig {
                directory: Some(file_path.to_string_lossy().to_string()),
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("is not a directory"));
    }

    #[test]
    fn test_find_project_config_stops_at_git() {
        let temp_dir = tempdir().unwrap();
        let repo = temp_dir.path().join("repo");
        let nested = repo.join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::create_dir(repo.join(".git")).unwrap();
        // A config above the repository root must not be picked up.
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();
        assert_eq!(find_project_config_path(&nested), None);

        fs::write(repo.join(PROJECT_CONFIG_FILENAME), "[parser]\nindent_unit = 2\n").unwrap();
        assert_eq!(
            find_project_config_path(&nested),
            Some(repo.join(PROJECT_CONFIG_FILENAME))
        );
    }
}
