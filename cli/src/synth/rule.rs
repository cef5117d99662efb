//! # TreeForge Content Rules
//!
//! File: cli/src/synth/rule.rs
//!
//! ## Overview
//!
//! A `Rule` pairs a `Matcher` (a predicate over the file name) with a
//! generator function. A plugin owns an ordered `Vec<Rule>`; the first rule
//! whose matcher accepts the file produces its content, so the order of the
//! list is part of the observable behavior.
//!
//! Matchers work on the file's basename and are case-insensitive:
//!
//! - `Basename`: exact name (`package.json`)
//! - `AnyBasename`: one of several exact names (`LICENSE`, `LICENSE.md`)
//! - `ExtensionContains`: extension in a set and basename containing a substring
//!   (`.tsx` + `layout`)
//! - `Extension`: extension in a set
//! - `Dotfile`: any name starting with `.`
//!
//! When no rule matches, `placeholder` supplies the fallback text; it is never
//! empty.
//!
use crate::core::settings::ProjectSettings;
use crate::core::templating;
use tracing::warn;

/// File-name facts the matchers and generators work from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContext<'a> {
    /// Path relative to the project root, `/`-separated.
    pub path: &'a str,
    /// Final path segment.
    pub basename: &'a str,
    /// Basename without the final extension (`.env` keeps its dot).
    pub stem: &'a str,
    /// Lowercased extension without the dot; empty when there is none.
    pub extension: String,
    basename_lower: String,
}

impl<'a> FileContext<'a> {
    pub fn new(path: &'a str) -> Self {
        let basename = path.rsplit('/').next().unwrap_or(path);
        let (stem, extension) = match basename.rfind('.') {
            Some(dot) if dot > 0 => (&basename[..dot], basename[dot + 1..].to_ascii_lowercase()),
            _ => (basename, String::new()),
        };
        Self {
            path,
            basename,
            stem,
            extension,
            basename_lower: basename.to_lowercase(),
        }
    }

    pub fn is_dotfile(&self) -> bool {
        self.basename.starts_with('.')
    }

    /// Lowercased basename, for substring checks.
    pub fn basename_lower(&self) -> &str {
        &self.basename_lower
    }

    /// The folder part of the path, empty for root-level files.
    pub fn directory(&self) -> &'a str {
        match self.path.rfind('/') {
            Some(slash) => &self.path[..slash],
            None => "",
        }
    }
}

/// Predicate deciding whether a rule applies to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    Basename(&'static str),
    AnyBasename(&'static [&'static str]),
    ExtensionContains {
        extensions: &'static [&'static str],
        needle: &'static str,
    },
    Extension(&'static [&'static str]),
    Dotfile,
}

impl Matcher {
    pub fn matches(&self, file: &FileContext<'_>) -> bool {
        match self {
            Matcher::Basename(name) => file.basename.eq_ignore_ascii_case(name),
            Matcher::AnyBasename(names) => {
                names.iter().any(|name| file.basename.eq_ignore_ascii_case(name))
            }
            Matcher::ExtensionContains { extensions, needle } => {
                extensions.contains(&file.extension.as_str())
                    && file.basename_lower().contains(needle)
            }
            Matcher::Extension(extensions) => extensions.contains(&file.extension.as_str()),
            Matcher::Dotfile => file.is_dotfile(),
        }
    }
}

/// Content generator signature.
pub type Generator = fn(&FileContext<'_>, &ProjectSettings) -> String;

/// A matcher with the generator it selects.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Short description used in logs.
    pub label: &'static str,
    pub matcher: Matcher,
    pub generate: Generator,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("label", &self.label)
            .field("matcher", &self.matcher)
            .finish()
    }
}

impl Rule {
    pub const fn new(label: &'static str, matcher: Matcher, generate: Generator) -> Self {
        Self {
            label,
            matcher,
            generate,
        }
    }
}

/// Returns the first rule in `rules` that matches `file`.
pub fn first_match<'r>(rules: &'r [Rule], file: &FileContext<'_>) -> Option<&'r Rule> {
    rules.iter().find(|rule| rule.matcher.matches(file))
}

/// Fallback text for files no rule recognizes.
pub fn placeholder(file: &FileContext<'_>) -> String {
    if file.is_dotfile() {
        format!("# {} configuration file\n", file.basename)
    } else {
        format!("// {}\n", file.basename)
    }
}

/// Generator for dotfiles no earlier rule claims; same text as the fallback.
pub fn dotfile_comment(file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    placeholder(file)
}

/// Renders `template` with the project context plus file variables
/// (`file_name`, `file_stem`, `file_path`, `component_name`, `typescript`).
///
/// Rendering problems are logged and the file falls back to `placeholder`, so
/// generators stay total.
pub fn render(file: &FileContext<'_>, settings: &ProjectSettings, template: &str) -> String {
    render_with(file, settings, template, |_| {})
}

/// Like `render`, with `extend` adding template-specific variables.
pub fn render_with<F>(
    file: &FileContext<'_>,
    settings: &ProjectSettings,
    template: &str,
    extend: F,
) -> String
where
    F: FnOnce(&mut tera::Context),
{
    let rendered = templating::project_context(settings).and_then(|mut context| {
        context.insert("file_name", file.basename);
        context.insert("file_stem", file.stem);
        context.insert("file_path", file.path);
        context.insert("component_name", &crate::core::naming::component_name(file.stem));
        context.insert("typescript", &matches!(file.extension.as_str(), "ts" | "tsx"));
        extend(&mut context);
        templating::render_str(file.path, template, &context)
    });
    match rendered {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => placeholder(file),
        Err(e) => {
            warn!("Falling back to placeholder for '{}': {:#}", file.path, e);
            placeholder(file)
        }
    }
}
