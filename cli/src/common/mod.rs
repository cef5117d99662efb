//! # TreeForge Common Utilities
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Output plumbing shared by the commands that produce projects:
//!
//! - `fs`: filesystem helpers and the directory writer for a `FileMap`
//! - `archive`: the in-memory `.tar.gz` writer for a `FileMap`
//!

/// Utilities for bundling generated projects into archives.
pub mod archive;
/// Utilities for filesystem operations (I/O, writing generated projects).
pub mod fs;
