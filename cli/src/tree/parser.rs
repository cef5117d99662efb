//! # TreeForge Tree Parser
//!
//! File: cli/src/tree/parser.rs
//!
//! ## Overview
//!
//! Converts an indentation-based tree description, such as the output of the
//! `tree` command, into a `TreeNode` hierarchy:
//!
//! ```text
//! my-app/
//! ├── package.json
//! ├── src/
//! │   └── index.ts
//! └── README.md
//! ```
//!
//! ## Rules
//!
//! - **Prefix**: leading spaces, tabs, non-breaking spaces and the box-drawing
//!   glyphs `│ ├ └ ─` are indentation. Each counts as one column, except a tab
//!   which counts as one full indentation unit.
//! - **Level**: prefix width divided by the indentation unit (4 by default, the
//!   width of `├── `). A width that is not a multiple of the unit is rejected.
//! - **Folders**: a name ending in `/` is a folder; the slash is removed.
//! - **Comments**: whitespace followed by `#` starts a trailing comment; a line
//!   whose entry starts with `# ` is a comment line.
//! - **Blank lines** and lines made only of prefix glyphs are ignored.
//! - **Strict nesting**: after popping the construction stack back to the
//!   nearest strict ancestor, an entry must sit exactly one level below it.
//!   Deeper entries (indentation jumps, entries nested under a file) fail with
//!   `ParseError::InvalidIndentation`.
//! - **Names** must be non-empty and may not contain `..`, `/`, `\` or control
//!   characters; `.` alone is rejected too.
//!
//! The parser always returns the synthetic root, renamed to
//! `ParseOptions::root_name`; the entries of the text are its descendants.
//!
use super::builder::TreeBuilder;
use super::node::{TreeNode, ROOT_LEVEL};
use crate::core::error::ParseError;
use tracing::{debug, trace};

/// Columns of prefix per nesting level when nothing else is configured.
pub const DEFAULT_INDENT_UNIT: usize = 4;

/// Options controlling a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Columns of prefix per nesting level.
    pub indent_unit: usize,
    /// Name given to the returned root node.
    pub root_name: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT_UNIT,
            root_name: "project".to_string(),
        }
    }
}

impl ParseOptions {
    pub fn new(root_name: impl Into<String>, indent_unit: usize) -> Self {
        Self {
            indent_unit,
            root_name: root_name.into(),
        }
    }
}

/// One interpreted, non-blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LineEntry {
    level: usize,
    name: String,
    is_folder: bool,
}

/// Parses `source` into a tree rooted at a folder named `options.root_name`.
///
/// # Errors
///
/// - `ParseError::EmptyInput` when no line carries an entry.
/// - `ParseError::InvalidIndentation` for misaligned or over-deep lines.
/// - `ParseError::InvalidName` for names that could escape the project directory.
///
/// Parsing stops at the first bad line; no partial tree is returned.
pub fn parse_tree(source: &str, options: &ParseOptions) -> Result<TreeNode, ParseError> {
    let unit = options.indent_unit.max(1);
    let mut builder = TreeBuilder::new(options.root_name.clone());
    // Name, kind and level of the previous entry, for error messages.
    let mut previous: Option<(String, bool, i32)> = None;
    let mut entries = 0usize;

    for (index, raw_line) in source.lines().enumerate() {
        let line_no = index + 1;
        let Some(entry) = scan_line(raw_line, unit, line_no)? else {
            trace!("Line {}: blank, skipped", line_no);
            continue;
        };
        let level = entry.level as i32;

        let parent_level = builder.unwind_to(level);
        if level != parent_level + 1 {
            return Err(ParseError::InvalidIndentation {
                line: line_no,
                reason: nesting_reason(level, parent_level, previous.as_ref()),
            });
        }

        debug!(
            "Line {}: level {} {} '{}'",
            line_no,
            level,
            if entry.is_folder { "folder" } else { "file" },
            entry.name
        );
        previous = Some((entry.name.clone(), entry.is_folder, level));
        entries += 1;

        builder.attach(if entry.is_folder {
            TreeNode::folder(entry.name, level)
        } else {
            TreeNode::file(entry.name, level)
        });
    }

    if entries == 0 {
        return Err(ParseError::EmptyInput);
    }

    let root = builder.finish();
    debug!(
        "Parsed {} entries ({} files, {} folders) under '{}'",
        entries,
        root.count_files(),
        root.count_folders(),
        root.name
    );
    Ok(root)
}

fn nesting_reason(level: i32, parent_level: i32, previous: Option<&(String, bool, i32)>) -> String {
    match previous {
        Some((name, false, prev_level)) if *prev_level == level - 1 => format!(
            "'{}' is a file and cannot contain entries",
            name
        ),
        _ if parent_level == ROOT_LEVEL => format!(
            "entry is at level {} but top-level entries must not be indented",
            level
        ),
        _ => format!(
            "entry is at level {} but its enclosing folder is at level {} (indentation may only grow one level at a time)",
            level, parent_level
        ),
    }
}

/// Interprets one raw line. Returns `Ok(None)` for lines without an entry.
fn scan_line(raw: &str, unit: usize, line_no: usize) -> Result<Option<LineEntry>, ParseError> {
    let mut width = 0usize;
    let mut rest_start = raw.len();
    for (offset, c) in raw.char_indices() {
        match c {
            ' ' | '\u{a0}' | '│' | '├' | '└' | '─' => width += 1,
            '\t' => width += unit,
            _ => {
                rest_start = offset;
                break;
            }
        }
    }

    let cleaned = strip_comment(&raw[rest_start..]).trim_end();
    if cleaned.is_empty() || is_comment_line(cleaned) {
        return Ok(None);
    }

    if width % unit != 0 {
        return Err(ParseError::InvalidIndentation {
            line: line_no,
            reason: format!(
                "indentation of {} columns is not a multiple of the {}-column unit",
                width, unit
            ),
        });
    }

    let (name, is_folder) = match cleaned.strip_suffix('/') {
        Some(stripped) => (stripped.trim_end(), true),
        None => (cleaned, false),
    };
    validate_name(name, line_no)?;

    Ok(Some(LineEntry {
        level: width / unit,
        name: name.to_string(),
        is_folder,
    }))
}

/// Removes a trailing `# comment` introduced by whitespace.
fn strip_comment(text: &str) -> &str {
    let mut previous_is_space = false;
    for (offset, c) in text.char_indices() {
        if c == '#' && previous_is_space {
            return &text[..offset];
        }
        previous_is_space = c.is_whitespace();
    }
    text
}

/// Whether part of `name` would be read back as a trailing comment.
pub(crate) fn has_comment_marker(name: &str) -> bool {
    strip_comment(name).len() != name.len()
}

fn is_comment_line(text: &str) -> bool {
    text == "#" || text.starts_with("# ")
}

fn validate_name(name: &str, line_no: usize) -> Result<(), ParseError> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name == "." {
        Some("'.' is not a valid entry name")
    } else if name.contains("..") {
        Some("names may not contain '..'")
    } else if name.contains('/') || name.contains('\\') {
        Some("names may not contain path separators")
    } else if name.chars().any(char::is_control) {
        Some("names may not contain control characters")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ParseError::InvalidName {
            line: line_no,
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
