//! # TreeForge Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout TreeForge. It follows a
//! two-layer approach:
//!
//! - `ParseError`: the typed failure of the tree parser. Every variant except
//!   `EmptyInput` carries the 1-based line number of the offending line so an
//!   editor or terminal front end can point at it.
//! - `ForgeError`: application-level failures (configuration, filesystem,
//!   template rendering, unknown blueprints).
//! - `Result<T>`: a type alias for `anyhow::Result<T>` used by command handlers
//!   so context can be attached as errors travel up to `main`.
//!
//! The content synthesizer has no error type of its own: it is total and
//! degrades to a placeholder instead of failing.
//!
//! ## Examples
//!
//! ```rust
//! let root = parser::parse_tree(&text, &options)
//!     .with_context(|| format!("Failed to parse tree from '{}'", path.display()))?;
//!
//! match parser::parse_tree("", &options) {
//!     Err(ParseError::EmptyInput) => println!("nothing to do"),
//!     Err(e) => eprintln!("line {:?}: {}", e.line(), e),
//!     Ok(root) => println!("{} entries", root.children().len()),
//! }
//! ```
//!
use thiserror::Error;

/// Failure modes of the tree parser.
///
/// The parser aborts on the first bad line rather than skipping it: dropping a
/// line would desynchronize the construction stack and silently re-parent the
/// lines that follow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Tree text is empty: no non-blank lines were found.")]
    EmptyInput,

    #[error("Line {line}: invalid indentation: {reason}")]
    InvalidIndentation { line: usize, reason: String },

    #[error("Line {line}: invalid name '{name}': {reason}")]
    InvalidName {
        line: usize,
        name: String,
        reason: String,
    },
}

impl ParseError {
    /// The 1-based line number the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::EmptyInput => None,
            ParseError::InvalidIndentation { line, .. } | ParseError::InvalidName { line, .. } => {
                Some(*line)
            }
        }
    }
}

/// Custom error type for the TreeForge application.
#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Blueprint '{name}' not found. Run 'treeforge blueprint list' to see available blueprints.")]
    BlueprintNotFound { name: String },

    #[error("Target '{path}' already exists. Use --force to overwrite.")]
    TargetExists { path: String },

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
