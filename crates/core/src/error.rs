// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tds-core operations.

use thiserror::Error;

/// Broad classification of an [`Error`], used when deciding how a failure
/// is reported and logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A flow invariant was violated (wizard finished without a tracker, etc.).
    Invariant,
    /// A saved choice references a tracker or credentials that no longer exist.
    Resolution,
    /// The tracker API failed.
    Remote,
    /// The tracker has no issue with the requested number.
    NotFound,
    /// The owning session was disposed while the operation was in flight.
    Cancelled,
    /// Local failures: document access, storage, executor.
    Local,
}

/// All possible errors that can occur in tds-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("issue tracker must be specified")]
    MissingIssueTracker,

    #[error("credentials must be specified")]
    MissingCredentials,

    #[error("placement details must be specified")]
    MissingPlacementDetails,

    #[error("issue number must be specified\n  hint: only reported TODO items (TODO[#<n>]) have an issue number")]
    MissingIssueNumber,

    #[error("credentials identifier must be specified\n  hint: clear the saved choice and pick credentials again")]
    MissingCredentialsId,

    #[error("unable to find issue tracker '{0}'\n  hint: the saved choice refers to a tracker that is not registered")]
    IssueTrackerNotFound(String),

    #[error("unable to find credentials with \"{0}\" identifier")]
    CredentialsNotFound(String),

    #[error("issue with number \"{number}\" not found on {tracker}")]
    IssueNotFound { tracker: String, number: u64 },

    #[error("invalid placement details: {0}")]
    InvalidPlacementDetails(String),

    #[error("remote error: {0}")]
    Remote(String),

    #[error("invalid text range {start}..{end} for a document of {len} bytes")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("document error: {0}")]
    Document(String),

    #[error("wizard error: {0}")]
    Wizard(String),

    #[error("unable to open browser: {0}")]
    Browser(String),

    #[error("choice store error: {0}")]
    Store(String),

    #[error("document executor is not running")]
    ExecutorClosed,

    #[error("operation cancelled")]
    Cancelled,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the category this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::MissingIssueTracker
            | Error::MissingCredentials
            | Error::MissingPlacementDetails
            | Error::MissingIssueNumber => ErrorCategory::Invariant,
            Error::MissingCredentialsId
            | Error::IssueTrackerNotFound(_)
            | Error::CredentialsNotFound(_) => ErrorCategory::Resolution,
            Error::InvalidPlacementDetails(_) | Error::Remote(_) => ErrorCategory::Remote,
            Error::IssueNotFound { .. } => ErrorCategory::NotFound,
            Error::Cancelled => ErrorCategory::Cancelled,
            Error::InvalidRange { .. }
            | Error::Document(_)
            | Error::Wizard(_)
            | Error::Browser(_)
            | Error::Store(_)
            | Error::ExecutorClosed
            | Error::Io(_) => ErrorCategory::Local,
        }
    }
}

/// A specialized Result type for tds-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
