// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Token credentials from the environment or the user credentials file.
//!
//! ```toml
//! [credentials.work]
//! token = "ghp_..."
//! server = "https://github.example.com"   # optional
//! ```
//!
//! `TODOSAURUS_TOKEN_<ID>` overrides the file token of credentials `<id>`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tds_core::{BoxFuture, Credentials, CredentialsProvider};

use crate::error::{Error, Result};

pub const TOKEN_ENV_PREFIX: &str = "TODOSAURUS_TOKEN_";

/// `credentials.toml` in the user config directory.
pub fn default_credentials_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("todosaurus").join("credentials.toml"))
}

/// Environment variable holding the token for credentials `id`.
pub fn env_var_name(id: &str) -> String {
    let suffix: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{TOKEN_ENV_PREFIX}{suffix}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsEntry {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
}

/// Parsed credentials file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsFile {
    #[serde(default)]
    pub credentials: BTreeMap<String, CredentialsEntry>,
}

impl CredentialsFile {
    /// Loads `path`; a missing file is an empty one.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(CredentialsFile::default());
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::CredentialsFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn ids(&self) -> Vec<&str> {
        self.credentials.keys().map(String::as_str).collect()
    }
}

type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Resolves credentials by identifier.
#[derive(Clone)]
pub struct TokenCredentialsProvider {
    path: Option<PathBuf>,
    env: EnvLookup,
}

impl TokenCredentialsProvider {
    pub fn new(path: Option<PathBuf>) -> Self {
        TokenCredentialsProvider {
            path,
            env: Arc::new(|name| std::env::var(name).ok()),
        }
    }

    /// Replaces the environment lookup (builder pattern).
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.env = Arc::new(lookup);
        self
    }

    /// Credentials `id`, or `None` when neither source knows it.
    pub fn lookup(&self, id: &str) -> Result<Option<Credentials>> {
        let entry = match &self.path {
            Some(path) => CredentialsFile::load(path)?.credentials.remove(id),
            None => None,
        };

        let env_token = (self.env)(&env_var_name(id)).filter(|token| !token.is_empty());
        let credentials = match (env_token, entry) {
            (Some(token), entry) => Some(Credentials {
                id: id.to_string(),
                token,
                server_url: entry.and_then(|e| e.server),
            }),
            (None, Some(entry)) => Some(Credentials {
                id: id.to_string(),
                token: entry.token,
                server_url: entry.server,
            }),
            (None, None) => None,
        };
        tracing::debug!(id, found = credentials.is_some(), "looked up credentials");
        Ok(credentials)
    }
}

impl std::fmt::Debug for TokenCredentialsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCredentialsProvider")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl CredentialsProvider for TokenCredentialsProvider {
    /// Runs [`lookup`](TokenCredentialsProvider::lookup) on the blocking pool,
    /// since it reads the credentials file.
    fn provide<'a>(&'a self, credentials_id: &'a str) -> BoxFuture<'a, tds_core::Result<Option<Credentials>>> {
        let provider = self.clone();
        let id = credentials_id.to_string();
        Box::pin(async move {
            tokio::task::spawn_blocking(move || provider.lookup(&id))
                .await
                .map_err(|e| tds_core::Error::Store(format!("credentials lookup failed: {e}")))?
                .map_err(Into::into)
        })
    }
}

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod tests;
