// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue tracker capabilities.
//!
//! Concrete trackers (GitHub, GitLab, ...) live outside this crate and plug in
//! through these traits. Async methods return boxed futures so the traits stay
//! object-safe.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::todo_item::NewIssue;

/// Boxed, sendable future returned by capability methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Where a new issue is created inside a tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementDetails {
    /// Repository or project path, e.g. `owner/repo` or `group/sub/project`.
    pub path: String,
    /// Server base URL for self-hosted instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
}

impl PlacementDetails {
    pub fn new(path: impl Into<String>) -> Self {
        PlacementDetails {
            path: path.into(),
            server_url: None,
        }
    }

    /// Sets the server URL (builder pattern).
    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = Some(server_url.into());
        self
    }
}

impl fmt::Display for PlacementDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.server_url {
            Some(server) => write!(f, "{} ({})", self.path, server),
            None => write!(f, "{}", self.path),
        }
    }
}

/// Resolved secret for talking to a tracker.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Identifier the credentials are stored under.
    pub id: String,
    pub token: String,
    /// Server the credentials belong to, for self-hosted instances.
    pub server_url: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("id", &self.id)
            .field("token", &"<redacted>")
            .field("server_url", &self.server_url)
            .finish()
    }
}

/// An issue as known by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub url: String,
    pub title: String,
}

/// Client bound to one tracker, set of credentials, and placement.
pub trait IssueTrackerClient: Send + Sync {
    /// Creates a remote issue.
    fn create_issue<'a>(&'a self, issue: &'a NewIssue) -> BoxFuture<'a, Result<Issue>>;

    /// Fetches an issue by number. Returns `None` if the tracker has no such issue.
    fn get_issue(&self, number: u64) -> BoxFuture<'_, Result<Option<Issue>>>;
}

/// Looks up stored credentials by identifier.
pub trait CredentialsProvider: Send + Sync {
    fn provide<'a>(&'a self, credentials_id: &'a str) -> BoxFuture<'a, Result<Option<Credentials>>>;
}

/// A kind of issue tracker.
pub trait IssueTracker: Send + Sync {
    /// Stable identifier, matching a repository type name.
    fn id(&self) -> &str;

    /// Display name.
    fn title(&self) -> &str;

    /// Short glyph shown next to the title in pickers.
    fn icon(&self) -> &str;

    fn create_client(
        &self,
        credentials: &Credentials,
        placement: &PlacementDetails,
    ) -> Result<Box<dyn IssueTrackerClient>>;

    fn create_credentials_provider(&self) -> Box<dyn CredentialsProvider>;
}

impl fmt::Debug for dyn IssueTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssueTracker")
            .field("id", &self.id())
            .finish()
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
