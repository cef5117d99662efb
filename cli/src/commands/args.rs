//! # TreeForge Shared Command Arguments
//!
//! File: cli/src/commands/args.rs
//!
//! ## Overview
//!
//! Argument groups flattened into several commands, plus the helpers that turn
//! them into parser options, `ProjectSettings` and written output:
//!
//! - `SettingsArgs`: project metadata flags. Every flag that is given wins over
//!   the loaded configuration; flags that are absent leave it untouched.
//! - `OutputArgs`: where a generated project goes (`-o`, `--archive`, `--force`).
//! - `read_tree_source`: reads tree text from a file, or from stdin for `-`.
//! - `parse_source`: parses it, quoting the offending line on failure.
//! - `validate_project_name`: rejects names that are not a single folder name.
//!
use crate::common::archive::tar::create_project_archive;
use crate::common::fs::io;
use crate::core::config::Config;
use crate::core::error::{ForgeError, Result};
use crate::core::settings::{GitignoreTemplate, License, ProjectSettings};
use crate::project::FileMap;
use crate::tree::{parse_tree, ParseOptions, TreeNode};
use anyhow::Context;
use chrono::{Datelike, Local};
use clap::Args;
use std::env;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Input path meaning "read from standard input".
pub const STDIN_MARKER: &str = "-";

/// Project metadata flags shared by `generate` and `blueprint create`.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct SettingsArgs {
    /// Project description used in package.json and README.md.
    #[arg(long)]
    pub description: Option<String>,

    /// Mark package.json as private.
    #[arg(long)]
    pub private: bool,

    /// .gitignore preset.
    #[arg(long, value_enum)]
    pub gitignore: Option<GitignoreTemplate>,

    /// License written to LICENSE and package.json.
    #[arg(long, value_enum)]
    pub license: Option<License>,

    /// Do not add a README.md to the project root.
    #[arg(long)]
    pub no_readme: bool,

    /// Add a vercel.json to the project root.
    #[arg(long)]
    pub vercel_config: bool,

    /// Add a .vercelignore to the project root.
    #[arg(long)]
    pub vercel_ignore: bool,

    /// Content plugin (nextjs, react, node, python, generic).
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub project_type: Option<String>,

    /// Copyright holder for the license.
    #[arg(long)]
    pub author: Option<String>,

    /// Columns per indentation level in the tree text (1-8).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
    pub indent: Option<u8>,
}

impl SettingsArgs {
    /// Indentation unit: the flag, else the configured value.
    pub fn indent_unit(&self, config: &Config) -> usize {
        self.indent
            .map(usize::from)
            .unwrap_or_else(|| config.indent_unit())
    }

    /// Builds the settings for project `name`.
    ///
    /// Precedence for the project type is flag, then `preferred_type` (a
    /// blueprint's own type), then configuration. Without an explicit
    /// `.gitignore` preset (flag or config) the preset follows the project
    /// type.
    pub fn resolve(&self, config: &Config, name: &str, preferred_type: Option<&str>) -> ProjectSettings {
        let mut settings = config.settings_for(name);
        settings.year = Local::now().year();

        if let Some(project_type) = self.project_type.as_deref().or(preferred_type) {
            settings.project_type = project_type.trim().to_ascii_lowercase();
        }
        if let Some(description) = &self.description {
            settings.description = description.clone();
        }
        if let Some(author) = &self.author {
            settings.author = author.clone();
        }
        if let Some(license) = self.license {
            settings.license = license;
        }
        settings.gitignore = self
            .gitignore
            .or(config.defaults.gitignore)
            .unwrap_or_else(|| gitignore_for(&settings.project_type));
        if self.private {
            settings.private = true;
        }
        if self.no_readme {
            settings.readme = false;
        }
        if self.vercel_config {
            settings.include_vercel_config = true;
        }
        if self.vercel_ignore {
            settings.include_vercel_ignore = true;
        }

        debug!("Resolved project settings: {:?}", settings);
        settings
    }
}

/// The `.gitignore` preset that suits a project type.
pub fn gitignore_for(project_type: &str) -> GitignoreTemplate {
    match project_type {
        "nextjs" => GitignoreTemplate::Next,
        "react" => GitignoreTemplate::React,
        "python" => GitignoreTemplate::Python,
        _ => GitignoreTemplate::Node,
    }
}

/// Destination flags for commands that produce a project.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct OutputArgs {
    /// Parent directory for the project folder (defaults to the configured output directory).
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Write a .tar.gz archive to this path instead of a directory.
    #[arg(long, value_name = "FILE")]
    pub archive: Option<PathBuf>,

    /// Overwrite an existing project directory or archive.
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Where a project ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Written {
    Directory(PathBuf),
    Archive { path: PathBuf, bytes: usize },
}

impl OutputArgs {
    /// Writes `map` to the archive or directory named by these flags.
    pub fn write(&self, map: &FileMap, config: &Config) -> Result<Written> {
        match &self.archive {
            Some(archive) => {
                let path = absolute(archive)?;
                if path.exists() && !self.force {
                    anyhow::bail!(ForgeError::TargetExists {
                        path: path.display().to_string(),
                    });
                }
                let bytes = create_project_archive(map)
                    .with_context(|| format!("Failed to build archive for '{}'", map.root_name()))?;
                if let Some(parent) = path.parent() {
                    io::ensure_dir_exists(parent)?;
                }
                std::fs::write(&path, &bytes)
                    .with_context(|| format!("Failed to write archive '{}'", path.display()))?;
                info!("Wrote archive {} ({} bytes)", path.display(), bytes.len());
                Ok(Written::Archive {
                    path,
                    bytes: bytes.len(),
                })
            }
            None => {
                let output_dir = match &self.output {
                    Some(dir) => absolute(dir)?,
                    None => absolute(Path::new(config.output_dir()))?,
                };
                let target = io::write_file_map(&output_dir, map, self.force)?;
                Ok(Written::Directory(target))
            }
        }
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().context("Failed to get current working directory")?;
    Ok(cwd.join(path))
}

/// Reads tree text from `input`, or from stdin when it is `-`.
pub fn read_tree_source(input: &Path) -> Result<String> {
    if input.as_os_str() == STDIN_MARKER {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read tree text from stdin")?;
        return Ok(text);
    }
    if !input.is_file() {
        anyhow::bail!(ForgeError::FileSystem(format!(
            "Input file '{}' does not exist or is not a file.",
            input.display()
        )));
    }
    io::read_file_to_string(input)
}

/// Parses `text`; a failure reports the reason followed by the offending line.
pub fn parse_source(text: &str, options: &ParseOptions) -> Result<TreeNode> {
    parse_tree(text, options).map_err(|err| {
        let quoted = err
            .line()
            .and_then(|line| text.lines().nth(line - 1).map(|source| (line, source)));
        match quoted {
            Some((line, source)) => anyhow::anyhow!("{}\n  {:>4} | {}", err, line, source),
            None => anyhow::Error::new(err),
        }
    })
}

/// Checks a user-supplied project name and returns it trimmed. The name
/// becomes a folder under the output directory, so it must be a single path
/// component.
pub fn validate_project_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed.contains(['/', '\\'])
        || trimmed.contains("..")
        || trimmed.chars().any(char::is_control)
    {
        anyhow::bail!(ForgeError::ArgumentParsing(format!(
            "'{}' is not a valid project name.",
            name
        )));
    }
    Ok(trimmed.to_string())
}

/// Project name implied by an input path: its file stem, or `project` for stdin.
pub fn name_from_input(input: &Path) -> String {
    if input.as_os_str() == STDIN_MARKER {
        return "project".to_string();
    }
    match input.file_stem().map(|stem| stem.to_string_lossy().trim().to_string()) {
        Some(stem) if !stem.is_empty() => stem,
        _ => {
            warn!("Cannot derive a project name from '{}'; using 'project'.", input.display());
            "project".to_string()
        }
    }
}

/// Prints where a project was written and what to do next.
pub fn print_completion_message(written: &Written, map: &FileMap) {
    match written {
        Written::Archive { path, bytes } => {
            println!(
                "\n✅ Project '{}' archived: {} files, {} bytes.",
                map.root_name(),
                map.len(),
                bytes
            );
            println!("   Archive: {}", display_relative(path));
            println!("\nExtract it with: tar -xzf {}", display_relative(path));
        }
        Written::Directory(target) => {
            println!(
                "\n✅ Project '{}' created successfully! ({} files)",
                map.root_name(),
                map.len()
            );
            println!("   Location: {}", target.display());
            println!("\nNext steps:");
            println!("  1. Navigate to your project: cd {}", display_relative(target));

            let mut step_number = 2;
            if map.contains("README.md") {
                println!("  {}. Review project instructions: cat README.md", step_number);
                step_number += 1;
            }
            if map.contains("package.json") {
                println!("  {}. Install Node.js dependencies: npm install", step_number);
            } else if map.contains("requirements.txt") || map.contains("pyproject.toml") {
                println!(
                    "  {}. Install Python dependencies (consider using a virtual environment):",
                    step_number
                );
                println!("     python -m venv .venv && source .venv/bin/activate");
                println!("     pip install -r requirements.txt");
            }
        }
    }
}

/// `path` relative to the current directory when possible.
fn display_relative(path: &Path) -> String {
    match env::current_dir() {
        Ok(cwd) => pathdiff::diff_paths(path, &cwd)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| path.display().to_string()),
        Err(_) => path.display().to_string(),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SettingsDefaults;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        settings: SettingsArgs,
        #[command(flatten)]
        output: OutputArgs,
    }

    #[test]
    fn test_settings_flags_parse() {
        let cli = TestCli::try_parse_from([
            "test",
            "--description",
            "A shop",
            "--private",
            "--gitignore",
            "python",
            "--license",
            "Apache-2.0",
            "--no-readme",
            "--vercel-config",
            "--type",
            "node",
            "--author",
            "Acme",
            "--indent",
            "2",
            "-o",
            "/tmp/out",
            "--force",
        ])
        .expect("valid flags");
        assert_eq!(cli.settings.description.as_deref(), Some("A shop"));
        assert!(cli.settings.private);
        assert_eq!(cli.settings.gitignore, Some(GitignoreTemplate::Python));
        assert_eq!(cli.settings.license, Some(License::Apache2));
        assert!(cli.settings.no_readme);
        assert!(cli.settings.vercel_config);
        assert!(!cli.settings.vercel_ignore);
        assert_eq!(cli.settings.project_type.as_deref(), Some("node"));
        assert_eq!(cli.settings.indent, Some(2));
        assert_eq!(cli.output.output, Some(PathBuf::from("/tmp/out")));
        assert!(cli.output.force);
        assert!(cli.output.archive.is_none());
    }

    #[test]
    fn test_indent_out_of_range_rejected() {
        assert!(TestCli::try_parse_from(["test", "--indent", "0"]).is_err());
        assert!(TestCli::try_parse_from(["test", "--indent", "9"]).is_err());
        assert!(TestCli::try_parse_from(["test", "--license", "WTFPL"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            defaults: SettingsDefaults {
                license: Some(License::Gpl3),
                author: Some("Config Author".into()),
                project_type: Some("react".into()),
                ..Default::default()
            },
            ..Default::default()
        };

        let untouched = SettingsArgs::default().resolve(&config, "app", None);
        assert_eq!(untouched.license, License::Gpl3);
        assert_eq!(untouched.author, "Config Author");
        assert_eq!(untouched.project_type, "react");
        assert_eq!(untouched.gitignore, GitignoreTemplate::React);
        assert!(untouched.readme);
        // The copyright year is stamped from the clock here, not by the defaults.
        assert_eq!(untouched.year, Local::now().year());

        let flags = SettingsArgs {
            license: Some(License::Mit),
            author: Some("Flag Author".into()),
            project_type: Some("Python".into()),
            no_readme: true,
            ..Default::default()
        };
        let settings = flags.resolve(&config, "app", Some("nextjs"));
        assert_eq!(settings.license, License::Mit);
        assert_eq!(settings.author, "Flag Author");
        assert_eq!(settings.project_type, "python");
        assert_eq!(settings.gitignore, GitignoreTemplate::Python);
        assert!(!settings.readme);
        assert_eq!(settings.name, "app");
    }

    #[test]
    fn test_preferred_type_beats_config_but_not_flag() {
        let config = Config {
            defaults: SettingsDefaults {
                project_type: Some("python".into()),
                gitignore: Some(GitignoreTemplate::None),
                ..Default::default()
            },
            ..Default::default()
        };
        let settings = SettingsArgs::default().resolve(&config, "app", Some("node"));
        assert_eq!(settings.project_type, "node");
        // A configured preset is kept even when the type changes.
        assert_eq!(settings.gitignore, GitignoreTemplate::None);
    }

    #[test]
    fn test_indent_unit_falls_back_to_config() {
        let mut config = Config::default();
        config.parser.indent_unit = Some(2);
        assert_eq!(SettingsArgs::default().indent_unit(&config), 2);
        let args = SettingsArgs {
            indent: Some(3),
            ..Default::default()
        };
        assert_eq!(args.indent_unit(&config), 3);
    }

    #[test]
    fn test_parse_source_quotes_bad_line() {
        let err = parse_source("src/\n        deep.ts\n", &ParseOptions::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Line 2: invalid indentation"));
        assert!(message.ends_with("     2 |         deep.ts"));

        let empty = parse_source("\n\n", &ParseOptions::default()).unwrap_err();
        assert!(empty.to_string().starts_with("Tree text is empty"));
    }

    #[test]
    fn test_name_from_input() {
        assert_eq!(name_from_input(Path::new("-")), "project");
        assert_eq!(name_from_input(Path::new("trees/shop.txt")), "shop");
        assert_eq!(name_from_input(Path::new("my-app")), "my-app");
    }

    #[test]
    fn test_validate_project_name() {
        assert_eq!(validate_project_name("  shop ").unwrap(), "shop");
        assert_eq!(validate_project_name("my.app").unwrap(), "my.app");
        for bad in ["", "  ", ".", "..", "../up", "/tmp/escaped", "a/b", "a\\b", "tab\there"] {
            let err = validate_project_name(bad).unwrap_err();
            assert!(err.to_string().contains("is not a valid project name"), "{:?}", bad);
        }
    }

    #[test]
    fn test_read_tree_source_missing_file() {
        let err = read_tree_source(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_write_archive_refuses_existing_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let archive = dir.path().join("demo.tar.gz");
        std::fs::write(&archive, "old")?;
        let mut map = FileMap::new("demo");
        map.insert("a.txt", "a");

        let args = OutputArgs {
            archive: Some(archive.clone()),
            ..Default::default()
        };
        assert!(args.write(&map, &Config::default()).is_err());

        let forced = OutputArgs {
            force: true,
            ..args
        };
        match forced.write(&map, &Config::default())? {
            Written::Archive { path, bytes } => {
                assert_eq!(path, archive);
                assert_eq!(std::fs::metadata(&path)?.len() as usize, bytes);
            }
            other => panic!("unexpected {:?}", other),
        }
        Ok(())
    }
}
