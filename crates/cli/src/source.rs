// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Source files loaded as documents.

use std::path::{Component, Path};
use std::sync::Arc;

use tds_core::document::line_at;
use tds_core::{scan, Document, MemoryDocument, ScanFilter, ToDoItem};

use crate::error::{Error, Result};

/// A file opened for scanning or editing.
pub struct SourceFile {
    pub document: Arc<MemoryDocument>,
    /// Path relative to the project root, with `/` separators.
    pub relative_path: String,
}

impl SourceFile {
    /// Opens `path` and names it relative to `root` when it lives under it.
    pub fn open(root: &Path, path: &Path) -> Result<Self> {
        let document = MemoryDocument::open(path)?;
        Ok(SourceFile {
            document: Arc::new(document),
            relative_path: relative_path(root, path),
        })
    }

    pub fn items(&self, filter: ScanFilter) -> Vec<ToDoItem> {
        let document: Arc<dyn Document> = self.document.clone();
        scan(&document, Some(&self.relative_path), filter)
    }

    /// The item whose marker is on `line`, or whose continuation covers it.
    pub fn item_at(&self, line: usize) -> Result<ToDoItem> {
        let text = self.document.text();
        self.items(ScanFilter::All)
            .into_iter()
            .find(|item| {
                let range = item.range();
                (line_at(&text, range.start)..=line_at(&text, range.end)).contains(&line)
            })
            .ok_or_else(|| Error::NoTodoAtLine {
                path: self.relative_path.clone(),
                line,
            })
    }

    pub fn save(&self) -> Result<()> {
        self.document.save()?;
        Ok(())
    }
}

/// `path` relative to `root` with `/` separators, or `path` itself outside it.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let relative = path.strip_prefix(&root).unwrap_or(&path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::RootDir => Some(String::new()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
