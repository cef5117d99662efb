//! # TreeForge Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` that add context to errors, plus the
//! directory writer for generated projects.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: `mkdir -p`, failing when the path is a file.
//! - **`read_file_to_string`**: `fs::read_to_string` with context.
//! - **`write_string_to_file`**: creates the parent directory, then writes.
//! - **`write_file_map`**: writes a `FileMap` under `<output>/<root name>/`.
//!   An existing target is refused unless `force` is set, in which case
//!   files are written over whatever is there (nothing is deleted).
//!
//! ## Usage
//!
//! ```rust
//! let target = io::write_file_map(Path::new("./out"), &map, false)?;
//! println!("Wrote {}", target.display());
//! ```
//!
use crate::core::error::{ForgeError, Result};
use crate::project::FileMap;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Ensures that a directory exists at `path`, creating parents as needed.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if creating
/// it fails.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        debug!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ForgeError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes `content` to `path`, creating the parent directory first.
/// An existing file is overwritten.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote content to file: {:?}", path);
    Ok(())
}

/// Writes every entry of `map` below `output_dir/<root name>/` and returns
/// that project directory.
///
/// # Errors
///
/// - `ForgeError::TargetExists` when the project directory exists and
///   `force` is not set.
/// - `ForgeError::FileSystem` when the target exists as a file.
/// - Any I/O failure while creating folders or writing files.
pub fn write_file_map(output_dir: &Path, map: &FileMap, force: bool) -> Result<PathBuf> {
    let target = output_dir.join(map.root_name());

    if target.exists() {
        if !target.is_dir() {
            anyhow::bail!(ForgeError::FileSystem(format!(
                "Target path '{}' exists but is not a directory.",
                target.display()
            )));
        }
        if !force {
            anyhow::bail!(ForgeError::TargetExists {
                path: target.display().to_string(),
            });
        }
        warn!(
            "Target directory '{}' already exists. Proceeding due to --force flag. Existing files may be overwritten.",
            target.display()
        );
    }
    ensure_dir_exists(&target)?;

    for (relative, content) in map.iter() {
        write_string_to_file(&target.join(relative), content)?;
    }
    for dir in map.empty_dirs() {
        ensure_dir_exists(&target.join(dir))?;
    }

    info!(
        "Wrote {} files ({} bytes) to {}",
        map.len(),
        map.total_bytes(),
        target.display()
    );
    Ok(target)
}
