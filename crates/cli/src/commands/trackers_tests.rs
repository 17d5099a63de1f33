// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::config::Config;
use crate::session::build_provider;

fn tracker(id: &str) -> std::sync::Arc<dyn IssueTracker> {
    build_provider(&Config::default())
        .provide_by_repository_name(id)
        .unwrap()
}

#[test]
fn lists_icon_and_id() {
    assert_eq!(format_tracker(tracker("GitHub").as_ref(), None), "gh  GitHub");
}

#[test]
fn marks_saved_tracker() {
    let line = format_tracker(tracker("GitLab").as_ref(), Some("GitLab"));
    assert!(line.ends_with("(saved)"));
    let line = format_tracker(tracker("GitLab").as_ref(), Some("GitHub"));
    assert!(!line.contains("(saved)"));
}
