//! # TreeForge Template System
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! This module renders the interpolated file templates used by the content
//! synthesizer (README, LICENSE, layouts, components, ...). Templates are plain
//! Tera strings rendered with `Tera::one_off`; no template directory or
//! template registry is involved.
//!
//! ## Architecture
//!
//! 1. `project_context` serializes `ProjectSettings` into a `tera::Context` and
//!    adds derived variables:
//!    - `project_name_snake`, `project_name_camel`, `project_name_pascal`
//!    - `license_spdx`, `license_name`, `copyright_holder`
//!    - `description_text` (the description, or a generic sentence when empty)
//! 2. Callers add file-specific variables (`file_name`, `component_name`, ...)
//!    with `tera::Context::insert`.
//! 3. `render_str` renders one template, wrapping Tera failures in
//!    `ForgeError::Template` with the template label as context.
//!
//! Templates never contain literal `{{`, `{%` or `{#` sequences except as Tera
//! syntax, so JSX style objects are avoided in template text.
//!
//! ## Examples
//!
//! ```rust
//! let mut context = templating::project_context(&settings)?;
//! context.insert("component_name", "Button");
//! let text = templating::render_str("button.tsx", "export function {{ component_name }}() {}", &context)?;
//! ```
//!
use crate::core::error::{ForgeError, Result};
use crate::core::naming;
use crate::core::settings::ProjectSettings;
use anyhow::anyhow;
use tera::Tera;
use tracing::debug;

/// Builds the base Tera context for a project.
pub fn project_context(settings: &ProjectSettings) -> Result<tera::Context> {
    let mut context = tera::Context::from_serialize(settings).map_err(|e| {
        anyhow!(ForgeError::Template { source: e })
            .context("Failed to create Tera context from project settings")
    })?;
    context.insert("project_name_snake", &naming::to_snake_case(&settings.name));
    context.insert("project_name_camel", &naming::to_camel_case(&settings.name));
    context.insert("project_name_pascal", &naming::to_pascal_case(&settings.name));
    context.insert("license_spdx", settings.license.spdx());
    context.insert("license_name", settings.license.display_name());
    context.insert("copyright_holder", settings.copyright_holder());
    context.insert("description_text", &settings.description_or_default());
    Ok(context)
}

/// Renders a single template string.
///
/// `label` names the template in error messages (usually the target file name).
pub fn render_str(label: &str, template: &str, context: &tera::Context) -> Result<String> {
    debug!("Rendering template for '{}'", label);
    Tera::one_off(template, context, false).map_err(|e| {
        anyhow!(ForgeError::Template { source: e })
            .context(format!("Tera rendering failed for template '{}'", label))
    })
}
