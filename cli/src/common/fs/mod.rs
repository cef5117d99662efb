//! # TreeForge Filesystem Utilities
//!
//! File: cli/src/common/fs/mod.rs
//!

/// Basic file I/O and the `FileMap` directory writer.
pub mod io;
