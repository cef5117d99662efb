//! # TreeForge Project Archives
//!
//! File: cli/src/common/archive/tar.rs
//!
//! ## Overview
//!
//! Bundles a generated `FileMap` into a gzipped tarball (`.tar.gz`) held in
//! memory, without touching the filesystem. Every entry lives under
//! `<root name>/`, so extracting the archive creates a single project folder.
//!
//! ## Architecture
//!
//! - Entries are appended with `tar::Builder::append_data` from hand-built
//!   `tar::Header`s (GNU format) in `FileMap` order.
//! - Parent folders are emitted once, before their first entry, followed by
//!   the recorded empty folders.
//! - Files get mode `0644` and folders `0755`; every entry carries the same
//!   fixed modification time, so the same map always yields the same bytes.
//! - The tar stream is written through `flate2::write::GzEncoder`.
//!
use crate::core::error::Result;
use crate::project::FileMap;
use anyhow::Context;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::collections::HashSet;
use std::io::Write;
use tar::{EntryType, Header};
use tracing::debug;

const FILE_MODE: u32 = 0o644;
const DIR_MODE: u32 = 0o755;
/// 2024-01-01T00:00:00Z
const FIXED_MTIME: u64 = 1_704_067_200;

fn header(entry_type: EntryType, mode: u32, size: u64) -> Header {
    let mut header = Header::new_gnu();
    header.set_entry_type(entry_type);
    header.set_mode(mode);
    header.set_size(size);
    header.set_mtime(FIXED_MTIME);
    header.set_uid(0);
    header.set_gid(0);
    header
}

fn append_dir<W: Write>(
    builder: &mut tar::Builder<W>,
    written: &mut HashSet<String>,
    path: &str,
) -> Result<()> {
    if !written.insert(path.to_string()) {
        return Ok(());
    }
    let mut dir_header = header(EntryType::Directory, DIR_MODE, 0);
    builder
        .append_data(&mut dir_header, format!("{}/", path), std::io::empty())
        .with_context(|| format!("Failed to add directory '{}' to the archive", path))?;
    Ok(())
}

/// Appends `path` and each of its ancestors that has not been written yet.
fn append_dir_chain<W: Write>(
    builder: &mut tar::Builder<W>,
    written: &mut HashSet<String>,
    path: &str,
) -> Result<()> {
    let mut end = 0;
    while let Some(offset) = path[end..].find('/') {
        end += offset;
        append_dir(builder, written, &path[..end])?;
        end += 1;
    }
    append_dir(builder, written, path)
}

/// Builds a `.tar.gz` of `map` in memory.
///
/// # Errors
///
/// Returns an `Err` if an entry cannot be appended (for instance a path too
/// long for the header) or if finishing the tar or gzip stream fails.
pub fn create_project_archive(map: &FileMap) -> Result<Vec<u8>> {
    let root = map.root_name();
    let mut tar_gz_bytes = Vec::new();
    let encoder = GzEncoder::new(&mut tar_gz_bytes, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    let mut written = HashSet::new();

    append_dir(&mut builder, &mut written, root)?;
    for (relative, content) in map.iter() {
        let full_path = format!("{}/{}", root, relative);
        if let Some((parent, _)) = full_path.rsplit_once('/') {
            append_dir_chain(&mut builder, &mut written, parent)?;
        }
        let mut file_header = header(EntryType::Regular, FILE_MODE, content.len() as u64);
        builder
            .append_data(&mut file_header, &full_path, content.as_bytes())
            .with_context(|| format!("Failed to add '{}' to the archive", full_path))?;
    }
    for dir in map.empty_dirs() {
        append_dir_chain(&mut builder, &mut written, &format!("{}/{}", root, dir))?;
    }

    let encoder = builder
        .into_inner()
        .context("Failed to finalize tar archive structure")?;
    encoder
        .finish()
        .context("Failed to finish gzip compression stream")?;

    debug!(
        "Archived '{}': {} files, {} folders, {} compressed bytes",
        root,
        map.len(),
        written.len(),
        tar_gz_bytes.len()
    );
    Ok(tar_gz_bytes)
}
