// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tds-core: TODO item lifecycle and issue tracker orchestration.
//!
//! This crate recognizes new and reported TODO markers in text, resolves which
//! issue tracker to use (from a saved choice or an interactive wizard), creates
//! or looks up the remote issue, and rewrites the marker to reference it.
//!
//! # Main Components
//!
//! - [`ToDoItem`] - a TODO marker tracked as a range in a [`Document`]
//! - [`IssueTrackerProvider`] - registry of tracker factories
//! - [`UserChoiceStore`] - memoized tracker, credentials and placement
//! - [`ToDoService`] - the "create new issue" and "open reported issue" operations
//! - [`DocumentExecutor`] - serialized context for document reads and writes

pub mod choice;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod notify;
pub mod provider;
pub mod scanner;
pub mod service;
pub mod todo_item;
pub mod tracker;
pub mod wizard;

#[cfg(test)]
mod test_helpers;

pub use choice::{retrieve_wizard_context_based_on_user_choice, UserChoice, UserChoiceStore};
pub use dispatch::DocumentExecutor;
pub use document::{Document, MemoryDocument, RangeMarker, TextRange};
pub use error::{Error, ErrorCategory, Result};
pub use notify::{Browser, Notification, Notifier};
pub use provider::{IssueTrackerFactory, IssueTrackerProvider, RepositoryType};
pub use scanner::{scan, ScanFilter};
pub use service::{ServiceParts, ToDoService};
pub use todo_item::{NewIssue, SourceLocation, ToDoItem, CODE_URL_PLACEHOLDER};
pub use tracker::{
    BoxFuture, Credentials, CredentialsProvider, Issue, IssueTracker, IssueTrackerClient,
    PlacementDetails,
};
pub use wizard::{
    IssueTrackerConnectionDetails, TodosaurusWizardContext, Wizard, WizardPlan, WizardResult,
    WizardStep,
};
