//! # TreeForge Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components shared by the
//! tree parser, the content synthesizer and the command handlers.
//!
//! ## Architecture
//!
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types (`ParseError`, `ForgeError`) and the `Result` alias
//! - `naming`: Case conversion for project and component names
//! - `settings`: The `ProjectSettings` record read by the synthesizer
//! - `templating`: Tera rendering of interpolated file templates
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{ForgeError, Result}; // For error handling
//! use crate::core::settings::ProjectSettings; // Project metadata
//! ```
//!
pub mod config;
pub mod error;
pub mod naming;
pub mod settings;
pub mod templating;
