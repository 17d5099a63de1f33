// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.todosaurus/config.toml` and includes:
//! - `repository_types`: repository types the project knows, in picker order
//! - `source_url_base`: optional base URL for code back-links in issue descriptions
//!
//! The saved tracker choice lives next to it in `.todosaurus/choice.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".todosaurus";
const CONFIG_FILE_NAME: &str = "config.toml";
const CHOICE_FILE_NAME: &str = "choice.toml";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Overrides the user credentials file location.
pub const CREDENTIALS_ENV: &str = "TODOSAURUS_CREDENTIALS";

fn default_repository_types() -> Vec<String> {
    vec!["GitHub".to_string(), "GitLab".to_string()]
}

/// Project configuration stored in `.todosaurus/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_repository_types")]
    pub repository_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url_base: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            repository_types: default_repository_types(),
            source_url_base: None,
        }
    }
}

impl Config {
    /// Loads configuration from the given `.todosaurus/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.todosaurus/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Find the .todosaurus directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    let mut current = std::env::current_dir()?;
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// The project root: the directory holding `.todosaurus/`.
pub fn project_root(work_dir: &Path) -> PathBuf {
    work_dir.parent().unwrap_or(work_dir).to_path_buf()
}

pub fn choice_path(work_dir: &Path) -> PathBuf {
    work_dir.join(CHOICE_FILE_NAME)
}

/// User credentials file: `$TODOSAURUS_CREDENTIALS`, else the platform config dir.
pub fn credentials_path() -> Option<PathBuf> {
    match std::env::var_os(CREDENTIALS_ENV) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => tds_trackers::default_credentials_path(),
    }
}

/// Initialize a new .todosaurus directory at the given path
pub fn init_work_dir(path: &Path) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;
    Config::default().save(&work_dir)?;
    write_gitignore(&work_dir)?;

    Ok(work_dir)
}

/// Write a .gitignore file to the work directory.
///
/// The saved choice names the user's own credentials, so it is never committed.
pub fn write_gitignore(work_dir: &Path) -> Result<()> {
    let gitignore_path = work_dir.join(GITIGNORE_FILE_NAME);
    fs::write(
        &gitignore_path,
        format!("# Per-user tracker choice\n{CHOICE_FILE_NAME}\n"),
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
