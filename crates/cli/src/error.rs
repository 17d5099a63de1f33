// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors surfaced by the `tds` commands.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'tds init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid location '{0}'\n  hint: use FILE:LINE, e.g. src/main.rs:42")]
    InvalidLocation(String),

    #[error("no TODO item at {path}:{line}\n  hint: run 'tds list {path}' to see the items in that file")]
    NoTodoAtLine { path: String, line: usize },

    #[error("TODO item at {path}:{line} is already reported as #{number}\n  hint: use 'tds open {path}:{line}' to see the issue")]
    AlreadyReported {
        path: String,
        line: usize,
        number: u64,
    },

    #[error("TODO item at {path}:{line} has no new TODO marker\n  hint: only items with a plain 'TODO' or 'TODO:' can be reported")]
    NotNew { path: String, line: usize },

    #[error("cancelled")]
    Cancelled,

    /// The failure was already shown through a notification.
    #[error("operation failed")]
    OperationFailed,

    #[error("{0}")]
    Core(#[from] tds_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether `main` should print this error. Notified failures were shown already.
    pub fn is_reported(&self) -> bool {
        matches!(self, Error::OperationFailed)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
