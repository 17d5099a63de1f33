// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tds-trackers: GitHub and GitLab issue tracker plug-ins.
//!
//! Each tracker comes with an [`IssueTrackerFactory`] registered under the
//! tracker's identifier; [`factories`] returns them all for the provider.

pub mod credentials;
pub mod error;
pub mod github;
pub mod gitlab;
mod http;
mod link;

use std::path::PathBuf;

use tds_core::IssueTrackerFactory;

pub use credentials::{default_credentials_path, CredentialsFile, TokenCredentialsProvider};
pub use error::{Error, Result};
pub use github::{GitHubFactory, GitHubTracker, GITHUB_ID};
pub use gitlab::{GitLabFactory, GitLabTracker, GITLAB_ID};

/// Host settings shared by every tracker.
#[derive(Debug, Clone, Default)]
pub struct TrackerSettings {
    /// Credentials file; `None` means environment variables only.
    pub credentials_file: Option<PathBuf>,
    /// Base URL for code back-links, replacing the tracker's blob URL.
    pub source_url_base: Option<String>,
}

/// Every built-in tracker factory.
pub fn factories(settings: &TrackerSettings) -> Vec<Box<dyn IssueTrackerFactory>> {
    vec![
        Box::new(GitHubFactory::new(settings.clone())),
        Box::new(GitLabFactory::new(settings.clone())),
    ]
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
