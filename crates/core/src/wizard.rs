// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wizard context and the interactive wizard seam.
//!
//! A [`TodosaurusWizardContext`] travels through one operation. It starts with
//! only the TODO item, gets connection and placement details either from the
//! saved choice or from the [`Wizard`], and is then finalized by the service.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;

use crate::choice::UserChoice;
use crate::error::Result;
use crate::todo_item::{NewIssue, ToDoItem};
use crate::tracker::{BoxFuture, Credentials, IssueTracker, PlacementDetails};

/// Tracker and credentials resolved for one operation.
#[derive(Clone, Default)]
pub struct IssueTrackerConnectionDetails {
    pub issue_tracker: Option<Arc<dyn IssueTracker>>,
    pub credentials: Option<Credentials>,
}

impl IssueTrackerConnectionDetails {
    pub fn new(issue_tracker: Arc<dyn IssueTracker>, credentials: Credentials) -> Self {
        IssueTrackerConnectionDetails {
            issue_tracker: Some(issue_tracker),
            credentials: Some(credentials),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.issue_tracker.is_some() && self.credentials.is_some()
    }
}

impl fmt::Debug for IssueTrackerConnectionDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssueTrackerConnectionDetails")
            .field("issue_tracker", &self.issue_tracker.as_ref().map(|t| t.id()))
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Everything one operation knows about its TODO item and target tracker.
#[derive(Debug, Clone)]
pub struct TodosaurusWizardContext {
    pub todo_item: ToDoItem,
    pub connection_details: IssueTrackerConnectionDetails,
    pub placement_details: Option<PlacementDetails>,
    /// Title and description edited in the wizard. Read from the item when unset.
    pub issue_draft: Option<NewIssue>,
    /// Save the selections as the user choice once the flow succeeds.
    pub remember_choice: bool,
}

impl TodosaurusWizardContext {
    pub fn new(todo_item: ToDoItem) -> Self {
        TodosaurusWizardContext {
            todo_item,
            connection_details: IssueTrackerConnectionDetails::default(),
            placement_details: None,
            issue_draft: None,
            remember_choice: false,
        }
    }

    pub fn with_connection(
        todo_item: ToDoItem,
        connection_details: IssueTrackerConnectionDetails,
        placement_details: Option<PlacementDetails>,
    ) -> Self {
        TodosaurusWizardContext {
            connection_details,
            placement_details,
            ..TodosaurusWizardContext::new(todo_item)
        }
    }

    /// The selections of this context as a storable choice.
    pub fn to_user_choice(&self) -> UserChoice {
        UserChoice {
            issue_tracker_id: self
                .connection_details
                .issue_tracker
                .as_ref()
                .map(|tracker| tracker.id().to_string()),
            credentials_id: self
                .connection_details
                .credentials
                .as_ref()
                .map(|credentials| credentials.id.clone()),
            placement_details: self.placement_details.clone(),
            saved_at: Some(Utc::now()),
        }
    }
}

/// Terminal outcome of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardResult {
    Success,
    Failed,
    /// The user closed the wizard before finishing.
    Cancelled,
}

/// A page of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Pick the tracker, credentials, and placement.
    ChooseIssueTracker,
    /// Review and edit the issue title and description.
    CreateNewIssue,
}

/// What the wizard should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardPlan {
    pub title: String,
    pub final_button: Option<String>,
    pub steps: Vec<WizardStep>,
}

impl WizardPlan {
    pub fn new(title: impl Into<String>) -> Self {
        WizardPlan {
            title: title.into(),
            final_button: None,
            steps: Vec::new(),
        }
    }

    /// Appends a step (builder pattern).
    pub fn step(mut self, step: WizardStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Sets the label of the finishing button (builder pattern).
    pub fn final_button(mut self, name: impl Into<String>) -> Self {
        self.final_button = Some(name.into());
        self
    }

    pub fn has_step(&self, step: WizardStep) -> bool {
        self.steps.contains(&step)
    }
}

/// Interactive collaborator that walks the user through a [`WizardPlan`].
pub trait Wizard: Send + Sync {
    /// Fills `context` step by step.
    ///
    /// Returns `Ok(true)` when the user finished the wizard and `Ok(false)`
    /// when they cancelled it.
    fn run<'a>(
        &'a self,
        plan: &'a WizardPlan,
        context: &'a mut TodosaurusWizardContext,
    ) -> BoxFuture<'a, Result<bool>>;
}

#[cfg(test)]
#[path = "wizard_tests.rs"]
mod tests;
