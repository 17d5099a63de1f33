// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level TODO operations.
//!
//! Both operations share one shape:
//!
//! ```text
//! saved choice? ──yes──► resolve context ──fail──► Failed (notified)
//!      │                      │
//!      no                     ok
//!      ▼                      ▼
//! full wizard ─────────► finalize ──► Success | Failed
//! ```
//!
//! Remote calls run on the tokio runtime. Reading the item for finalization and
//! rewriting it happen on the [`DocumentExecutor`], and the rewrite only
//! happens after the remote issue exists.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::choice::{retrieve_wizard_context_based_on_user_choice, UserChoiceStore};
use crate::dispatch::DocumentExecutor;
use crate::error::{Error, ErrorCategory, Result};
use crate::notify::{Browser, Notification, Notifier};
use crate::provider::IssueTrackerProvider;
use crate::todo_item::ToDoItem;
use crate::tracker::{Credentials, Issue, IssueTracker, PlacementDetails};
use crate::wizard::{TodosaurusWizardContext, Wizard, WizardPlan, WizardResult, WizardStep};

pub const CREATE_NEW_ISSUE_TITLE: &str = "Create New Issue";
pub const OPEN_REPORTED_ISSUE_TITLE: &str = "Open Reported Issue in Browser";
pub const OPEN_REPORTED_ISSUE_BUTTON: &str = "Open";

/// Collaborators a [`ToDoService`] is built from.
pub struct ServiceParts {
    pub provider: Arc<IssueTrackerProvider>,
    pub store: Arc<UserChoiceStore>,
    pub wizard: Arc<dyn Wizard>,
    pub notifier: Arc<dyn Notifier>,
    pub browser: Arc<dyn Browser>,
    pub executor: DocumentExecutor,
}

/// Per-project TODO service.
///
/// Created at session start; [`dispose`](ToDoService::dispose) ends the session
/// and stops in-flight operations before they touch any document.
#[derive(Clone)]
pub struct ToDoService {
    inner: Arc<ServiceInner>,
}

struct ServiceInner {
    provider: Arc<IssueTrackerProvider>,
    store: Arc<UserChoiceStore>,
    wizard: Arc<dyn Wizard>,
    notifier: Arc<dyn Notifier>,
    browser: Arc<dyn Browser>,
    executor: DocumentExecutor,
    cancellation: CancellationToken,
}

/// Tracker, credentials and placement checked to be present.
struct Connection {
    tracker: Arc<dyn IssueTracker>,
    credentials: Credentials,
    placement: PlacementDetails,
}

impl Connection {
    fn from_context(context: &TodosaurusWizardContext) -> Result<Self> {
        let tracker = context
            .connection_details
            .issue_tracker
            .clone()
            .ok_or(Error::MissingIssueTracker)?;
        let credentials = context
            .connection_details
            .credentials
            .clone()
            .ok_or(Error::MissingCredentials)?;
        let placement = context
            .placement_details
            .clone()
            .ok_or(Error::MissingPlacementDetails)?;
        Ok(Connection {
            tracker,
            credentials,
            placement,
        })
    }
}

impl ToDoService {
    pub fn new(parts: ServiceParts) -> Self {
        ToDoService {
            inner: Arc::new(ServiceInner {
                provider: parts.provider,
                store: parts.store,
                wizard: parts.wizard,
                notifier: parts.notifier,
                browser: parts.browser,
                executor: parts.executor,
                cancellation: CancellationToken::new(),
            }),
        }
    }

    pub fn provider(&self) -> &Arc<IssueTrackerProvider> {
        &self.inner.provider
    }

    pub fn store(&self) -> &Arc<UserChoiceStore> {
        &self.inner.store
    }

    /// Creates a remote issue for `todo_item` and marks the item as reported.
    ///
    /// Runs in the background; the handle resolves to the terminal result.
    pub fn create_new_issue(&self, todo_item: ToDoItem) -> JoinHandle<WizardResult> {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.create_new_issue_flow(todo_item).await })
    }

    /// Opens the issue referenced by a reported `todo_item` in the browser.
    pub fn open_reported_issue_in_browser(&self, todo_item: ToDoItem) -> JoinHandle<WizardResult> {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.open_reported_issue_flow(todo_item).await })
    }

    /// Ends the session. In-flight operations fail without mutating documents.
    pub fn dispose(&self) {
        tracing::debug!("disposing TODO service");
        self.inner.cancellation.cancel();
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.cancellation.is_cancelled()
    }
}

impl ServiceInner {
    async fn create_new_issue_flow(&self, todo_item: ToDoItem) -> WizardResult {
        let (plan, mut context) = match self.store.get_choice_or_null() {
            Some(choice) => {
                match retrieve_wizard_context_based_on_user_choice(&self.provider, todo_item, &choice)
                    .await
                {
                    Ok(context) => (
                        WizardPlan::new(CREATE_NEW_ISSUE_TITLE).step(WizardStep::CreateNewIssue),
                        context,
                    ),
                    Err(e) => return self.fail(e, creation_failed),
                }
            }
            None => (
                WizardPlan::new(CREATE_NEW_ISSUE_TITLE)
                    .step(WizardStep::ChooseIssueTracker)
                    .step(WizardStep::CreateNewIssue),
                TodosaurusWizardContext::new(todo_item),
            ),
        };

        match self.run_wizard(&plan, &mut context).await {
            Ok(true) => {}
            Ok(false) => return WizardResult::Cancelled,
            Err(e) => return self.fail(e, creation_failed),
        }

        let result = match self.create_new_issue(&context).await {
            Ok(issue) => {
                tracing::info!(number = issue.number, url = %issue.url, "created issue");
                self.notifier.notify(Notification::issue_created(&issue));
                WizardResult::Success
            }
            Err(e) => self.fail(e, creation_failed),
        };
        self.remember(&context, result);
        result
    }

    async fn open_reported_issue_flow(&self, todo_item: ToDoItem) -> WizardResult {
        let context = match self.store.get_choice_or_null() {
            Some(choice) => {
                match retrieve_wizard_context_based_on_user_choice(&self.provider, todo_item, &choice)
                    .await
                {
                    Ok(context) => context,
                    Err(e) => return self.fail(e, open_failed),
                }
            }
            None => {
                let plan = WizardPlan::new(OPEN_REPORTED_ISSUE_TITLE)
                    .final_button(OPEN_REPORTED_ISSUE_BUTTON)
                    .step(WizardStep::ChooseIssueTracker);
                let mut context = TodosaurusWizardContext::new(todo_item);
                match self.run_wizard(&plan, &mut context).await {
                    Ok(true) => context,
                    Ok(false) => return WizardResult::Cancelled,
                    Err(e) => return self.fail(e, open_failed),
                }
            }
        };

        let result = match self.open_reported_issue(&context).await {
            Ok(issue) => {
                tracing::info!(number = issue.number, url = %issue.url, "opened issue in browser");
                WizardResult::Success
            }
            Err(e) => self.fail(e, open_failed),
        };
        self.remember(&context, result);
        result
    }

    async fn run_wizard(
        &self,
        plan: &WizardPlan,
        context: &mut TodosaurusWizardContext,
    ) -> Result<bool> {
        tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => Err(Error::Cancelled),
            confirmed = self.wizard.run(plan, context) => confirmed,
        }
    }

    async fn create_new_issue(&self, context: &TodosaurusWizardContext) -> Result<Issue> {
        let connection = Connection::from_context(context)?;

        let draft = match &context.issue_draft {
            Some(draft) => draft.clone(),
            None => {
                let item = context.todo_item.clone();
                self.executor.run(move || item.to_new_issue()).await??
            }
        };

        let client = connection
            .tracker
            .create_client(&connection.credentials, &connection.placement)?;
        let issue = tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => return Err(Error::Cancelled),
            issue = client.create_issue(&draft) => issue?,
        };

        let item = context.todo_item.clone();
        let cancellation = self.cancellation.clone();
        let number = issue.number;
        self.executor
            .run(move || {
                if cancellation.is_cancelled() {
                    return Err(Error::Cancelled);
                }
                item.mark_as_reported(number)
            })
            .await??;

        Ok(issue)
    }

    async fn open_reported_issue(&self, context: &TodosaurusWizardContext) -> Result<Issue> {
        let connection = Connection::from_context(context)?;

        let item = context.todo_item.clone();
        let number = self
            .executor
            .run(move || item.issue_number())
            .await??
            .ok_or(Error::MissingIssueNumber)?;

        let client = connection
            .tracker
            .create_client(&connection.credentials, &connection.placement)?;
        let issue = tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => return Err(Error::Cancelled),
            issue = client.get_issue(number) => issue?,
        };
        let issue = issue.ok_or_else(|| Error::IssueNotFound {
            tracker: connection.tracker.title().to_string(),
            number,
        })?;

        let browser = Arc::clone(&self.browser);
        let url = issue.url.clone();
        tokio::task::spawn_blocking(move || browser.browse(&url))
            .await
            .map_err(|e| Error::Browser(e.to_string()))??;

        Ok(issue)
    }

    /// Reports `error` and returns [`WizardResult::Failed`].
    ///
    /// Cancellation after dispose is logged only; the session is gone.
    fn fail(&self, error: Error, notification: fn(String) -> Notification) -> WizardResult {
        let category = error.category();
        tracing::warn!(?category, "operation failed: {}", error);
        if category != ErrorCategory::Cancelled {
            self.notifier.notify(notification(error.to_string()));
        }
        WizardResult::Failed
    }

    fn remember(&self, context: &TodosaurusWizardContext, result: WizardResult) {
        if result != WizardResult::Success || !context.remember_choice {
            return;
        }
        if let Err(e) = self.store.save_choice(context.to_user_choice()) {
            tracing::warn!("failed to save user choice: {}", e);
        }
    }
}

fn creation_failed(message: String) -> Notification {
    Notification::IssueCreationFailed { message }
}

fn open_failed(message: String) -> Notification {
    Notification::OpenInBrowserFailed { message }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
