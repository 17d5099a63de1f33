// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing outcomes and the browser seam.

use std::fmt;

use crate::error::Result;
use crate::tracker::Issue;

/// Outcome shown to the user at the end of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    IssueCreated { number: u64, url: String, title: String },
    IssueCreationFailed { message: String },
    OpenInBrowserFailed { message: String },
}

impl Notification {
    pub fn issue_created(issue: &Issue) -> Self {
        Notification::IssueCreated {
            number: issue.number,
            url: issue.url.clone(),
            title: issue.title.clone(),
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, Notification::IssueCreated { .. })
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::IssueCreated { number, url, .. } => {
                write!(f, "created issue #{}: {}", number, url)
            }
            Notification::IssueCreationFailed { message } => {
                write!(f, "failed to create issue: {}", message)
            }
            Notification::OpenInBrowserFailed { message } => {
                write!(f, "failed to open issue in browser: {}", message)
            }
        }
    }
}

/// Receives [`Notification`]s.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Opens URLs in the system browser.
pub trait Browser: Send + Sync {
    fn browse(&self, url: &str) -> Result<()>;
}
