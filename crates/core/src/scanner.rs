// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Finds TODO items in a document.
//!
//! An item starts at the marker word and runs to the end of its line. Following
//! lines that repeat the text before the marker (the comment leader) with deeper
//! indentation are continuation lines and become part of the same item:
//!
//! ```text
//! // TODO: fix the retry loop
//! //   it spins when the server is down   <- continuation
//! // unrelated comment                    <- not a continuation
//! ```

use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::document::{Document, TextRange};
use crate::error::Error;
use crate::todo_item::{contains_new_marker, SourceLocation, ToDoItem};

static MARKER_WORD_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"(?i)\bTODO\b") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// Which items a scan reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanFilter {
    #[default]
    All,
    New,
    Reported,
}

impl ScanFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanFilter::All => "all",
            ScanFilter::New => "new",
            ScanFilter::Reported => "reported",
        }
    }

    fn accepts(&self, text: &str) -> bool {
        match self {
            ScanFilter::All => true,
            ScanFilter::New => contains_new_marker(text),
            ScanFilter::Reported => !contains_new_marker(text),
        }
    }
}

impl FromStr for ScanFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "all" => Ok(ScanFilter::All),
            "new" => Ok(ScanFilter::New),
            "reported" => Ok(ScanFilter::Reported),
            _ => Err(Error::Document(format!("unknown scan filter '{s}'"))),
        }
    }
}

/// A line of text without its terminator, with its byte offset.
struct Line<'a> {
    offset: usize,
    text: &'a str,
}

fn lines(text: &str) -> Vec<Line<'_>> {
    let mut out = Vec::new();
    let mut offset = 0;
    for raw in text.split_inclusive('\n') {
        let body = raw.strip_suffix('\n').unwrap_or(raw);
        let body = body.strip_suffix('\r').unwrap_or(body);
        out.push(Line { offset, text: body });
        offset += raw.len();
    }
    out
}

/// True if `line` continues an item whose marker line began with `leader`.
fn is_continuation(leader: &str, line: &str) -> bool {
    let head = leader.trim_end();
    let gap = leader.len() - head.len();
    let Some(rest) = line.strip_prefix(head) else {
        return false;
    };
    let indent = rest.len() - rest.trim_start().len();
    indent > gap && !rest.trim().is_empty() && !MARKER_WORD_RE.is_match(rest)
}

/// Scans `document` for TODO items.
///
/// `source_path` becomes the item's [`SourceLocation`] path when given.
pub fn scan(
    document: &Arc<dyn Document>,
    source_path: Option<&str>,
    filter: ScanFilter,
) -> Vec<ToDoItem> {
    let text = document.text();
    let lines = lines(&text);
    let mut items = Vec::new();

    let mut index = 0;
    while index < lines.len() {
        let line = &lines[index];
        let Some(marker) = MARKER_WORD_RE.find(line.text) else {
            index += 1;
            continue;
        };

        let leader = &line.text[..marker.start()];
        let start = line.offset + marker.start();
        let mut end = line.offset + line.text.len();

        let mut next = index + 1;
        while next < lines.len() && is_continuation(leader, lines[next].text) {
            end = lines[next].offset + lines[next].text.len();
            next += 1;
        }

        if filter.accepts(&text[start..end]) {
            let mut item = ToDoItem::new(document.clone(), TextRange::new(start, end));
            if let Some(path) = source_path {
                item = item.with_location(SourceLocation {
                    path: path.to_string(),
                    line: index + 1,
                });
            }
            items.push(item);
        }
        index = next;
    }

    tracing::debug!(
        count = items.len(),
        filter = filter.as_str(),
        "scanned document for TODO items"
    );
    items
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
