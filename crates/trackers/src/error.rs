// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tracker plug-ins.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {tracker} failed: {source}")]
    Http {
        tracker: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{tracker} rejected the token: {message}\n  hint: check the token of the selected credentials")]
    Unauthorized {
        tracker: &'static str,
        message: String,
    },

    #[error("{tracker} API returned {status}: {message}")]
    Api {
        tracker: &'static str,
        status: u16,
        message: String,
    },

    #[error("invalid placement '{path}'\n  hint: expected {expected}")]
    InvalidPlacement { path: String, expected: &'static str },

    #[error("failed to read credentials file {}: {message}", path.display())]
    CredentialsFile { path: PathBuf, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for tds_core::Error {
    fn from(error: Error) -> Self {
        match error {
            Error::InvalidPlacement { .. } => {
                tds_core::Error::InvalidPlacementDetails(error.to_string())
            }
            Error::CredentialsFile { .. } => tds_core::Error::Store(error.to_string()),
            Error::Io(e) => tds_core::Error::Io(e),
            Error::Http { .. } | Error::Unauthorized { .. } | Error::Api { .. } => {
                tds_core::Error::Remote(error.to_string())
            }
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
