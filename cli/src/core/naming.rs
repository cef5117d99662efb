//! # TreeForge Name Case Conversion
//!
//! File: cli/src/core/naming.rs
//!
//! Converts project and file names into the casing conventions generated code
//! needs: `snake_case` for Python modules, `camelCase` for variables and
//! `PascalCase` for React component names derived from file stems
//! (`user-card.tsx` → `UserCard`).
//!
//! Word delimiters are `-`, `_`, `.` and spaces.

fn is_delimiter(c: char) -> bool {
    matches!(c, '-' | '_' | '.' | ' ')
}

/// Converts a kebab-case or other input string to snake_case.
/// Replaces delimiters with underscores and converts to lowercase.
pub fn to_snake_case(input: &str) -> String {
    input
        .chars()
        .map(|c| if is_delimiter(c) { '_' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Converts a kebab-case or snake_case string to camelCase.
pub fn to_camel_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut capitalize_next = false;
    let mut first_word_char = true;

    for c in input.chars() {
        if is_delimiter(c) {
            capitalize_next = !first_word_char;
        } else if first_word_char {
            result.push(c.to_ascii_lowercase());
            first_word_char = false;
            capitalize_next = false;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Converts a kebab-case or snake_case string to PascalCase (aka UpperCamelCase).
pub fn to_pascal_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut capitalize_next = true;

    for c in input.chars() {
        if is_delimiter(c) {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Converts a file stem into a component identifier. Stems that do not start
/// with a letter (`404`, `_app`) are prefixed so the result is a valid name.
pub fn component_name(stem: &str) -> String {
    let pascal = to_pascal_case(stem);
    match pascal.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => pascal,
        Some(_) => format!("Page{}", pascal),
        None => "Component".to_string(),
    }
}
