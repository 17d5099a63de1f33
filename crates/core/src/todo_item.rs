// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TODO item parsing and the new → reported transition.
//!
//! A *new* item contains the standalone word `TODO` (any case), optionally
//! followed by `:`, and not followed by a bracketed reference. A *reported*
//! item carries the canonical form `TODO[#<n>]:` written by
//! [`ToDoItem::mark_as_reported`].

use std::fmt;
use std::ops::Range;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::document::{Document, RangeMarker, TextRange};
use crate::error::Result;

/// Placeholder in issue descriptions, substituted by trackers with a link to the code.
pub const CODE_URL_PLACEHOLDER: &str = "${CODE_URL}";

/// Name of the undoable command that rewrites a marker.
pub const UPDATE_COMMAND: &str = "Update TODO Item";

const ISSUE_DESCRIPTION_TEMPLATE: &str = "See the code near this line: ${CODE_URL}\n\
\n\
Also, look for the number of this issue in the project code base.";

static KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"(?i)\bTODO\b") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static ISSUE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(?i)\bTODO\[#(\d+)\]") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Builds the reported marker for `issue_number`, e.g. `TODO[#42]:`.
pub fn reported_marker(issue_number: u64) -> String {
    format!("TODO[#{issue_number}]:")
}

/// True if `text` starts with `[...]` closed on the same line.
fn starts_with_reference(text: &str) -> bool {
    text.strip_prefix('[')
        .and_then(|rest| rest.split(['\n', '\r']).next())
        .is_some_and(|line| line.contains(']'))
}

/// Resolves the optional colon after a keyword match, preferring to consume it.
fn new_marker_at(text: &str, keyword: Range<usize>) -> Option<Range<usize>> {
    let rest = &text[keyword.end..];
    if let Some(after_colon) = rest.strip_prefix(':') {
        if !starts_with_reference(after_colon) {
            return Some(keyword.start..keyword.end + 1);
        }
    }
    if starts_with_reference(rest) {
        None
    } else {
        Some(keyword)
    }
}

/// Byte ranges of every new-form marker in `text`, in order.
pub fn new_markers(text: &str) -> Vec<Range<usize>> {
    KEYWORD_RE
        .find_iter(text)
        .filter_map(|m| new_marker_at(text, m.range()))
        .collect()
}

/// True if `text` contains at least one new-form marker.
pub fn contains_new_marker(text: &str) -> bool {
    KEYWORD_RE
        .find_iter(text)
        .any(|m| new_marker_at(text, m.range()).is_some())
}

/// Extracts the issue number from a reported marker.
pub fn parse_issue_number(text: &str) -> Option<u64> {
    ISSUE_NUMBER_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Title of an item: first line with the markers removed, trimmed.
pub fn title_of(text: &str) -> String {
    let first_line = text.split('\n').next().unwrap_or_default();
    let mut title = String::with_capacity(first_line.len());
    let mut last = 0;
    for marker in new_markers(first_line) {
        title.push_str(&first_line[last..marker.start]);
        last = marker.end;
    }
    title.push_str(&first_line[last..]);
    title.trim().to_string()
}

/// Description of an item: lines after the first, then the back-link template.
pub fn description_of(text: &str) -> String {
    match text.split_once('\n') {
        Some((_, rest)) => format!("{rest}\n\n{ISSUE_DESCRIPTION_TEMPLATE}"),
        None => ISSUE_DESCRIPTION_TEMPLATE.to_string(),
    }
}

/// Where an item lives in the source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Path relative to the repository root, with `/` separators.
    pub path: String,
    /// 1-based line of the marker.
    pub line: usize,
}

/// Title and description to send to a tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub title: String,
    pub description: String,
    pub location: Option<SourceLocation>,
}

/// A TODO marker and its trailing text, tracked as a range in a [`Document`].
///
/// The document owns the range and moves it as edits land anywhere in the
/// text. Clones share the same range.
#[derive(Clone)]
pub struct ToDoItem {
    document: Arc<dyn Document>,
    range: RangeMarker,
    location: Option<SourceLocation>,
}

impl ToDoItem {
    pub fn new(document: Arc<dyn Document>, range: TextRange) -> Self {
        let range = document.mark(range);
        ToDoItem {
            document,
            range,
            location: None,
        }
    }

    /// Sets the source location (builder pattern).
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    /// The range the item currently covers.
    pub fn range(&self) -> TextRange {
        self.range.range()
    }

    pub fn text(&self) -> Result<String> {
        self.document.read(self.range())
    }

    pub fn title(&self) -> Result<String> {
        Ok(title_of(&self.text()?))
    }

    pub fn description(&self) -> Result<String> {
        Ok(description_of(&self.text()?))
    }

    pub fn is_new(&self) -> Result<bool> {
        Ok(contains_new_marker(&self.text()?))
    }

    /// Issue number embedded in a reported item.
    pub fn issue_number(&self) -> Result<Option<u64>> {
        Ok(parse_issue_number(&self.text()?))
    }

    /// Snapshot of the title and description for issue creation.
    pub fn to_new_issue(&self) -> Result<NewIssue> {
        let text = self.text()?;
        Ok(NewIssue {
            title: title_of(&text),
            description: description_of(&text),
            location: self.location.clone(),
        })
    }

    /// Rewrites the first new-form marker to `TODO[#<issue_number>]:`.
    ///
    /// Must run on the document executor. Returns `false` without touching
    /// the document if the item is not new.
    pub fn mark_as_reported(&self, issue_number: u64) -> Result<bool> {
        let range = self.range();
        let text = self.document.read(range)?;
        let Some(marker) = new_markers(&text).into_iter().next() else {
            return Ok(false);
        };

        let replacement = reported_marker(issue_number);
        let mut new_text = String::with_capacity(text.len() + replacement.len());
        new_text.push_str(&text[..marker.start]);
        new_text.push_str(&replacement);
        new_text.push_str(&text[marker.end..]);

        self.document.replace(range, &new_text, UPDATE_COMMAND)?;
        Ok(true)
    }
}

impl fmt::Debug for ToDoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToDoItem")
            .field("range", &self.range())
            .field("location", &self.location)
            .finish()
    }
}

#[cfg(test)]
#[path = "todo_item_tests.rs"]
mod tests;
