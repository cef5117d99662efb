//! # TreeForge Archive Utilities
//!
//! File: cli/src/common/archive/mod.rs
//!

/// Gzipped tarballs of generated projects.
pub mod tar;
