// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tds_core::ScanFilter;
use walkdir::{DirEntry, WalkDir};

use crate::cli::OutputFormat;
use crate::colors;
use crate::config::{find_work_dir, project_root};
use crate::error::Result;
use crate::source::SourceFile;

/// Length of the `TODO` keyword.
const KEYWORD_LEN: usize = 4;

/// Directories never scanned.
const SKIPPED_DIRS: &[&str] = &[".git", "target", ".todosaurus"];

/// A TODO item as listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedItem {
    pub path: String,
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<u64>,
    pub title: String,
}

#[derive(Serialize)]
struct ListOutputJson<'a> {
    items: &'a [ListedItem],
}

pub fn run(paths: &[String], new: bool, reported: bool, output: OutputFormat) -> Result<()> {
    let filter = match (new, reported) {
        (true, _) => ScanFilter::New,
        (_, true) => ScanFilter::Reported,
        _ => ScanFilter::All,
    };
    let root = match find_work_dir() {
        Ok(work_dir) => project_root(&work_dir),
        Err(_) => std::env::current_dir()?,
    };
    let paths: Vec<PathBuf> = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths.iter().map(PathBuf::from).collect()
    };

    let items = collect_items(&root, &paths, filter)?;
    match output {
        OutputFormat::Text => {
            for item in &items {
                println!("{}", format_item(item));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&ListOutputJson { items: &items })?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

/// Scans every file under `paths`, in file name order.
pub fn collect_items(root: &Path, paths: &[PathBuf], filter: ScanFilter) -> Result<Vec<ListedItem>> {
    let mut items = Vec::new();
    for path in paths {
        let walker = WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_skipped(e));
        for entry in walker {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let source = match SourceFile::open(root, entry.path()) {
                Ok(source) => source,
                Err(crate::Error::Core(tds_core::Error::Io(e)))
                    if e.kind() == ErrorKind::InvalidData =>
                {
                    tracing::debug!(path = %entry.path().display(), "skipping non-UTF-8 file");
                    continue;
                }
                Err(e) => return Err(e),
            };
            for item in source.items(filter) {
                let Some(location) = item.location() else {
                    continue;
                };
                let issue = item.issue_number()?;
                let title = item.title()?;
                items.push(ListedItem {
                    path: location.path.clone(),
                    line: location.line,
                    issue,
                    title: match issue {
                        Some(number) => strip_reference(&title, number),
                        None => title,
                    },
                });
            }
        }
    }
    Ok(items)
}

/// Removes the `TODO[#n]:` marker from a reported item's title.
fn strip_reference(title: &str, number: u64) -> String {
    let reference = format!("[#{number}]");
    let Some(at) = title.find(&reference) else {
        return title.to_string();
    };
    let before = title.get(..at.saturating_sub(KEYWORD_LEN)).unwrap_or_default();
    let after = &title[at + reference.len()..];
    let after = after.strip_prefix(':').unwrap_or(after);
    format!("{}{}", before, after).trim().to_string()
}

/// `path:line: [#n] title`, with the issue reference only for reported items.
pub fn format_item(item: &ListedItem) -> String {
    let location = colors::context(&format!("{}:{}:", item.path, item.line));
    match item.issue {
        Some(number) => format!(
            "{} {} {}",
            location,
            colors::issue(&format!("[#{number}]")),
            item.title
        ),
        None => format!("{} {}", location, item.title),
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
