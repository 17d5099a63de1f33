// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text document abstraction.
//!
//! TODO items never own their text: they point into a [`Document`] through a
//! [`RangeMarker`] the document hands out and keeps in place across edits.
//! Every write goes through [`Document::replace`], which swaps a range for new
//! text in one step and records it as a single named, undoable command.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

use crate::error::{Error, Result};

/// A half-open byte range `start..end` into a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        TextRange { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks that the range lies inside `text` on UTF-8 character boundaries.
    pub fn validate(&self, text: &str) -> Result<()> {
        let valid = self.start <= self.end
            && self.end <= text.len()
            && text.is_char_boundary(self.start)
            && text.is_char_boundary(self.end);
        if valid {
            Ok(())
        } else {
            Err(Error::InvalidRange {
                start: self.start,
                end: self.end,
                len: text.len(),
            })
        }
    }

    /// Maps an offset through an edit that replaced `self` with `inserted_len` bytes.
    ///
    /// Offsets before the edit stay put, offsets after it move by the length
    /// difference, and offsets inside it are clamped into the inserted text.
    fn map_offset(&self, offset: usize, inserted_len: usize) -> usize {
        if offset <= self.start {
            offset
        } else if offset >= self.end {
            offset - self.end + self.start + inserted_len
        } else {
            self.start + inserted_len.min(offset - self.start)
        }
    }

    fn map_range(&self, range: TextRange, inserted_len: usize) -> TextRange {
        TextRange::new(
            self.map_offset(range.start, inserted_len),
            self.map_offset(range.end, inserted_len),
        )
    }
}

/// A range registered with its [`Document`].
///
/// The document moves every live marker as edits land, so a marker keeps
/// covering the same text after other parts of the document change. Clones
/// share the same position.
#[derive(Debug, Clone)]
pub struct RangeMarker(Arc<RwLock<TextRange>>);

impl RangeMarker {
    /// A marker no document tracks. Its range never moves.
    pub fn detached(range: TextRange) -> Self {
        RangeMarker(Arc::new(RwLock::new(range)))
    }

    pub fn range(&self) -> TextRange {
        match self.0.read() {
            Ok(range) => *range,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    fn set(&self, range: TextRange) {
        match self.0.write() {
            Ok(mut guard) => *guard = range,
            Err(poisoned) => *poisoned.into_inner() = range,
        }
    }

    fn downgrade(&self) -> Weak<RwLock<TextRange>> {
        Arc::downgrade(&self.0)
    }
}

/// Host-owned text buffer.
///
/// Implementations must make [`replace`](Document::replace) atomic: a reader
/// either sees the text before the edit or after it, never a mix.
pub trait Document: Send + Sync {
    /// Returns the full document text.
    fn text(&self) -> String;

    /// Returns the text covered by `range`.
    fn read(&self, range: TextRange) -> Result<String>;

    /// Replaces `range` with `text` as one undoable command named `command`.
    ///
    /// Returns the range now occupied by `text`.
    fn replace(&self, range: TextRange, text: &str, command: &str) -> Result<TextRange>;

    /// Registers `range` and returns a marker the document keeps in place
    /// across later edits.
    fn mark(&self, range: TextRange) -> RangeMarker;
}

/// One applied edit, kept for undo.
#[derive(Debug, Clone)]
struct Edit {
    command: String,
    inserted: TextRange,
    previous: String,
}

#[derive(Debug, Default)]
struct DocumentState {
    text: String,
    history: Vec<Edit>,
    markers: Vec<Weak<RwLock<TextRange>>>,
    modified: bool,
}

impl DocumentState {
    /// Moves every live marker through an edit of `edited` and drops dead ones.
    fn shift_markers(&mut self, edited: TextRange, inserted_len: usize) {
        self.markers.retain(|weak| {
            let Some(marker) = weak.upgrade() else {
                return false;
            };
            let marker = RangeMarker(marker);
            marker.set(edited.map_range(marker.range(), inserted_len));
            true
        });
    }
}

/// In-memory [`Document`] with an undo history and an optional backing file.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    path: Option<PathBuf>,
    state: RwLock<DocumentState>,
}

impl MemoryDocument {
    /// Creates a document with no backing file.
    pub fn new(text: impl Into<String>) -> Self {
        MemoryDocument {
            path: None,
            state: RwLock::new(DocumentState {
                text: text.into(),
                ..DocumentState::default()
            }),
        }
    }

    /// Loads a document from `path`. [`save`](MemoryDocument::save) writes it back.
    pub fn open(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(MemoryDocument {
            path: Some(path.to_path_buf()),
            state: RwLock::new(DocumentState {
                text,
                ..DocumentState::default()
            }),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns true if an edit was applied since loading or the last save.
    pub fn is_modified(&self) -> bool {
        self.state_read().map(|s| s.modified).unwrap_or(false)
    }

    /// Writes the text back to the backing file, if any.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let mut state = self.state_write()?;
        fs::write(path, state.text.as_bytes())?;
        state.modified = false;
        Ok(())
    }

    /// Reverts the most recent edit.
    ///
    /// Returns the name of the undone command, or `None` if there was nothing to undo.
    pub fn undo(&self) -> Result<Option<String>> {
        let mut state = self.state_write()?;
        let Some(edit) = state.history.pop() else {
            return Ok(None);
        };
        state
            .text
            .replace_range(edit.inserted.start..edit.inserted.end, &edit.previous);
        state.shift_markers(edit.inserted, edit.previous.len());
        state.modified = true;
        Ok(Some(edit.command))
    }

    /// Names of the recorded commands, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.state_read()
            .map(|s| s.history.iter().map(|e| e.command.clone()).collect())
            .unwrap_or_default()
    }

    fn state_read(&self) -> Result<RwLockReadGuard<'_, DocumentState>> {
        self.state
            .read()
            .map_err(|_| Error::Document("document lock poisoned".to_string()))
    }

    fn state_write(&self) -> Result<RwLockWriteGuard<'_, DocumentState>> {
        self.state
            .write()
            .map_err(|_| Error::Document("document lock poisoned".to_string()))
    }
}

impl Document for MemoryDocument {
    fn text(&self) -> String {
        self.state_read().map(|s| s.text.clone()).unwrap_or_default()
    }

    fn read(&self, range: TextRange) -> Result<String> {
        let state = self.state_read()?;
        range.validate(&state.text)?;
        Ok(state.text[range.start..range.end].to_string())
    }

    fn replace(&self, range: TextRange, text: &str, command: &str) -> Result<TextRange> {
        let mut state = self.state_write()?;
        range.validate(&state.text)?;

        let previous = state.text[range.start..range.end].to_string();
        state.text.replace_range(range.start..range.end, text);

        let inserted = TextRange::new(range.start, range.start + text.len());
        state.shift_markers(range, text.len());
        state.history.push(Edit {
            command: command.to_string(),
            inserted,
            previous,
        });
        state.modified = true;
        Ok(inserted)
    }

    fn mark(&self, range: TextRange) -> RangeMarker {
        let marker = RangeMarker::detached(range);
        match self.state.write() {
            Ok(mut state) => state.markers.push(marker.downgrade()),
            Err(poisoned) => poisoned.into_inner().markers.push(marker.downgrade()),
        }
        marker
    }
}

/// Returns the 1-based line number containing byte `offset`.
pub fn line_at(text: &str, offset: usize) -> usize {
    let offset = offset.min(text.len());
    text.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
