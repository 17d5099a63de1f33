// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tds_core::IssueTracker;

use crate::colors;
use crate::error::Result;
use crate::session::Project;

pub fn run() -> Result<()> {
    let project = Project::open()?;
    let saved = project
        .store
        .get_choice_or_null()
        .and_then(|choice| choice.issue_tracker_id);

    let trackers = project.provider.provide_all();
    if trackers.is_empty() {
        println!("No issue trackers available");
        return Ok(());
    }
    for tracker in &trackers {
        println!("{}", format_tracker(tracker.as_ref(), saved.as_deref()));
    }

    let unsupported: Vec<&str> = project
        .config
        .repository_types
        .iter()
        .filter(|name| !trackers.iter().any(|t| t.id() == name.as_str()))
        .map(String::as_str)
        .collect();
    if !unsupported.is_empty() {
        eprintln!(
            "warning: no tracker plug-in for: {}",
            unsupported.join(", ")
        );
    }
    Ok(())
}

/// `icon  id  title`, marked when it is the saved choice.
pub fn format_tracker(tracker: &dyn IssueTracker, saved: Option<&str>) -> String {
    let mut line = format!(
        "{:<3} {}",
        tracker.icon(),
        colors::header(tracker.id())
    );
    if tracker.title() != tracker.id() {
        line.push_str(&format!("  {}", tracker.title()));
    }
    if saved == Some(tracker.id()) {
        line.push_str(&format!("  {}", colors::context("(saved)")));
    }
    line
}

#[cfg(test)]
#[path = "trackers_tests.rs"]
mod tests;
