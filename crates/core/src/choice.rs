// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Memoized user choices.
//!
//! After a wizard finishes successfully the user may keep its selections.
//! Later operations read them back and skip the tracker selection step.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::provider::IssueTrackerProvider;
use crate::todo_item::ToDoItem;
use crate::tracker::PlacementDetails;
use crate::wizard::{IssueTrackerConnectionDetails, TodosaurusWizardContext};

/// Selections saved from a completed wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserChoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_tracker_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement_details: Option<PlacementDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

/// Project-scoped store for the last [`UserChoice`].
///
/// Backed by a TOML file when opened with [`UserChoiceStore::open`]; otherwise
/// the choice lives only as long as the store.
#[derive(Debug, Default)]
pub struct UserChoiceStore {
    path: Option<PathBuf>,
    choice: RwLock<Option<UserChoice>>,
}

impl UserChoiceStore {
    pub fn in_memory() -> Self {
        UserChoiceStore::default()
    }

    /// Opens the store at `path`, loading the choice if the file exists.
    pub fn open(path: &Path) -> Result<Self> {
        let choice = if path.is_file() {
            let content = fs::read_to_string(path)?;
            let choice: UserChoice = toml::from_str(&content)
                .map_err(|e| Error::Store(format!("failed to parse {}: {}", path.display(), e)))?;
            Some(choice)
        } else {
            None
        };

        Ok(UserChoiceStore {
            path: Some(path.to_path_buf()),
            choice: RwLock::new(choice),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The saved choice, or `None` if nothing was saved or it was cleared.
    pub fn get_choice_or_null(&self) -> Option<UserChoice> {
        match self.choice.read() {
            Ok(choice) => choice.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Saves `choice`, replacing any previous one.
    pub fn save_choice(&self, choice: UserChoice) -> Result<()> {
        if let Some(path) = &self.path {
            let content = toml::to_string_pretty(&choice)
                .map_err(|e| Error::Store(format!("failed to serialize choice: {}", e)))?;
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
        }
        tracing::debug!(tracker = ?choice.issue_tracker_id, "saved user choice");
        self.set(Some(choice));
        Ok(())
    }

    /// Forgets the saved choice.
    pub fn clear(&self) -> Result<()> {
        if let Some(path) = &self.path {
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        self.set(None);
        Ok(())
    }

    fn set(&self, choice: Option<UserChoice>) {
        match self.choice.write() {
            Ok(mut guard) => *guard = choice,
            Err(poisoned) => *poisoned.into_inner() = choice,
        }
    }
}

/// Builds a wizard context from a saved choice without asking the user.
///
/// Fails with a distinct error when the choice has no credentials identifier,
/// names a tracker that is not registered, or names credentials that cannot
/// be found.
pub async fn retrieve_wizard_context_based_on_user_choice(
    provider: &IssueTrackerProvider,
    todo_item: ToDoItem,
    user_choice: &UserChoice,
) -> Result<TodosaurusWizardContext> {
    let credentials_id = user_choice
        .credentials_id
        .as_deref()
        .ok_or(Error::MissingCredentialsId)?;

    let tracker_id = user_choice
        .issue_tracker_id
        .as_deref()
        .unwrap_or_default();
    let issue_tracker = provider
        .provide_by_repository_name(tracker_id)
        .ok_or_else(|| Error::IssueTrackerNotFound(tracker_id.to_string()))?;

    let credentials = issue_tracker
        .create_credentials_provider()
        .provide(credentials_id)
        .await?
        .ok_or_else(|| Error::CredentialsNotFound(credentials_id.to_string()))?;

    tracing::debug!(
        tracker = issue_tracker.id(),
        credentials = credentials_id,
        "resolved wizard context from saved choice"
    );

    Ok(TodosaurusWizardContext::with_connection(
        todo_item,
        IssueTrackerConnectionDetails::new(issue_tracker, credentials),
        user_choice.placement_details.clone(),
    ))
}

#[cfg(test)]
#[path = "choice_tests.rs"]
mod tests;
