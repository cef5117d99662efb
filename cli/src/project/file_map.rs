//! # TreeForge File Map
//!
//! File: cli/src/project/file_map.rs
//!
//! The flattened project: relative, `/`-separated paths mapped to file
//! content, in depth-first source order, plus the folders that have no
//! entries. The root name travels with the map; writers use it as the
//! top-level folder of the output.
//!
use serde::Serialize;
use std::collections::HashMap;

/// Ordered `path → content` map of a generated project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileMap {
    root_name: String,
    entries: Vec<(String, String)>,
    empty_dirs: Vec<String>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl FileMap {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            root_name: root_name.into(),
            ..Default::default()
        }
    }

    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// Inserts or replaces the content at `path`. A replaced entry keeps its
    /// original position; the previous content is returned.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) -> Option<String> {
        let path = path.into();
        let content = content.into();
        match self.index.get(&path) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, content)),
            None => {
                self.index.insert(path.clone(), self.entries.len());
                self.entries.push((path, content));
                None
            }
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    /// Records a folder without entries so writers can still create it.
    pub fn add_empty_dir(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !self.empty_dirs.contains(&path) {
            self.empty_dirs.push(path);
        }
    }

    pub fn empty_dirs(&self) -> &[String] {
        &self.empty_dirs
    }

    /// `(path, content)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(path, content)| (path.as_str(), content.as_str()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(path, _)| path.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all content lengths in bytes.
    pub fn total_bytes(&self) -> usize {
        self.entries.iter().map(|(_, content)| content.len()).sum()
    }
}

#[cfg(test)]
impl FileMap {
    pub fn get(&self, path: &str) -> Option<&str> {
        self.index
            .get(path)
            .map(|&position| self.entries[position].1.as_str())
    }
}
