//! # TreeForge Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the TreeForge CLI and
//! makes them accessible to the main application entry point (`main.rs`).
//!
//! ## Command Groups
//!
//! - `parse`: validate tree text and print it back (or as JSON)
//! - `generate`: tree text → project directory or archive
//! - `blueprint`: built-in sample trees (`list`, `info`, `create`)
//! - `snapshot`: existing directory → tree text
//! - `types`: the registered content plugins
//!
//! `args` holds the argument groups and output helpers the commands share.
//! Each command defines its own arguments structure and an async handler.
//!

pub mod args;
pub mod blueprint;
pub mod generate;
pub mod parse;
pub mod snapshot;
pub mod types;
