//! # TreeForge Tree Model
//!
//! File: cli/src/tree/mod.rs
//!
//! ## Overview
//!
//! Everything about the hierarchical file/folder model:
//!
//! - `node`: `TreeNode` and its `NodeKind` (folder with children, or file with
//!   optional explicit content)
//! - `parser`: tree text → `TreeNode` (stack-based, strict indentation)
//! - `printer`: `TreeNode` → tree text
//! - `scan`: existing directory → `TreeNode`
//! - `builder`: the construction stack shared by `parser` and `scan`
//!
mod builder;
pub mod node;
pub mod parser;
pub mod printer;
pub mod scan;

pub use node::{NodeKind, TreeNode, ROOT_LEVEL};
pub use parser::{parse_tree, ParseOptions};
