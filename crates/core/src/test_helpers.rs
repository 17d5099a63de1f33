// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test doubles for tracker, wizard, notifier and browser.

#![allow(clippy::unwrap_used)]
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::choice::UserChoiceStore;
use crate::dispatch::DocumentExecutor;
use crate::document::{MemoryDocument, TextRange};
use crate::error::{Error, Result};
use crate::notify::{Browser, Notification, Notifier};
use crate::provider::{IssueTrackerFactory, IssueTrackerProvider, RepositoryType};
use crate::service::{ServiceParts, ToDoService};
use crate::todo_item::{NewIssue, ToDoItem};
use crate::tracker::{
    BoxFuture, Credentials, CredentialsProvider, Issue, IssueTracker, IssueTrackerClient,
    PlacementDetails,
};
use crate::wizard::{TodosaurusWizardContext, Wizard, WizardPlan, WizardStep};

pub fn credentials(id: &str) -> Credentials {
    Credentials {
        id: id.to_string(),
        token: format!("token-{id}"),
        server_url: None,
    }
}

pub fn new_item(text: &str) -> (Arc<MemoryDocument>, ToDoItem) {
    let doc = Arc::new(MemoryDocument::new(text));
    let item = ToDoItem::new(doc.clone(), TextRange::new(0, text.len()));
    (doc, item)
}

#[derive(Default)]
struct RemoteState {
    next_number: u64,
    issues: BTreeMap<u64, Issue>,
    fail_with: Option<String>,
    hang: bool,
    created: Vec<NewIssue>,
    fetched: Vec<u64>,
    clients: Vec<(String, PlacementDetails)>,
}

/// In-memory stand-in for a remote tracker, shared by every client it hands out.
#[derive(Clone)]
pub struct MockRemote {
    state: Arc<Mutex<RemoteState>>,
}

impl MockRemote {
    pub fn new() -> Self {
        MockRemote {
            state: Arc::new(Mutex::new(RemoteState {
                next_number: 1,
                ..RemoteState::default()
            })),
        }
    }

    pub fn add_issue(&self, number: u64) {
        let mut state = self.state.lock().unwrap();
        state.issues.insert(
            number,
            Issue {
                number,
                url: format!("https://tracker.test/issues/{number}"),
                title: format!("issue {number}"),
            },
        );
        state.next_number = state.next_number.max(number + 1);
    }

    pub fn fail_with(&self, message: &str) {
        self.state.lock().unwrap().fail_with = Some(message.to_string());
    }

    /// Remote calls never complete.
    pub fn hang(&self) {
        self.state.lock().unwrap().hang = true;
    }

    pub fn created(&self) -> Vec<NewIssue> {
        self.state.lock().unwrap().created.clone()
    }

    pub fn fetched(&self) -> Vec<u64> {
        self.state.lock().unwrap().fetched.clone()
    }

    /// Credentials id and placement of every client created.
    pub fn clients(&self) -> Vec<(String, PlacementDetails)> {
        self.state.lock().unwrap().clients.clone()
    }

    /// Number of remote calls made through any client.
    pub fn calls(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.created.len() + state.fetched.len()
    }

    fn is_hanging(&self) -> bool {
        self.state.lock().unwrap().hang
    }
}

struct MockClient {
    remote: MockRemote,
}

impl IssueTrackerClient for MockClient {
    fn create_issue<'a>(&'a self, issue: &'a NewIssue) -> BoxFuture<'a, Result<Issue>> {
        Box::pin(async move {
            if self.remote.is_hanging() {
                std::future::pending::<()>().await;
            }
            let mut state = self.remote.state.lock().unwrap();
            state.created.push(issue.clone());
            if let Some(message) = &state.fail_with {
                return Err(Error::Remote(message.clone()));
            }
            let number = state.next_number;
            state.next_number += 1;
            let created = Issue {
                number,
                url: format!("https://tracker.test/issues/{number}"),
                title: issue.title.clone(),
            };
            state.issues.insert(number, created.clone());
            Ok(created)
        })
    }

    fn get_issue(&self, number: u64) -> BoxFuture<'_, Result<Option<Issue>>> {
        Box::pin(async move {
            if self.remote.is_hanging() {
                std::future::pending::<()>().await;
            }
            let mut state = self.remote.state.lock().unwrap();
            state.fetched.push(number);
            if let Some(message) = &state.fail_with {
                return Err(Error::Remote(message.clone()));
            }
            Ok(state.issues.get(&number).cloned())
        })
    }
}

struct MockCredentialsProvider {
    known: Vec<Credentials>,
}

impl CredentialsProvider for MockCredentialsProvider {
    fn provide<'a>(&'a self, credentials_id: &'a str) -> BoxFuture<'a, Result<Option<Credentials>>> {
        Box::pin(async move { Ok(self.known.iter().find(|c| c.id == credentials_id).cloned()) })
    }
}

pub struct MockTracker {
    id: String,
    remote: MockRemote,
    known_credentials: Vec<Credentials>,
}

impl IssueTracker for MockTracker {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.id
    }

    fn icon(&self) -> &str {
        "*"
    }

    fn create_client(
        &self,
        credentials: &Credentials,
        placement: &PlacementDetails,
    ) -> Result<Box<dyn IssueTrackerClient>> {
        self.remote
            .state
            .lock()
            .unwrap()
            .clients
            .push((credentials.id.clone(), placement.clone()));
        Ok(Box::new(MockClient {
            remote: self.remote.clone(),
        }))
    }

    fn create_credentials_provider(&self) -> Box<dyn CredentialsProvider> {
        Box::new(MockCredentialsProvider {
            known: self.known_credentials.clone(),
        })
    }
}

pub struct MockFactory {
    pub id: String,
    pub remote: MockRemote,
    pub known_credentials: Vec<Credentials>,
}

impl MockFactory {
    pub fn new(id: &str, remote: &MockRemote) -> Self {
        MockFactory {
            id: id.to_string(),
            remote: remote.clone(),
            known_credentials: vec![credentials("work")],
        }
    }
}

impl IssueTrackerFactory for MockFactory {
    fn tracker_id(&self) -> &str {
        &self.id
    }

    fn create_tracker(&self, repository_type: &RepositoryType) -> Arc<dyn IssueTracker> {
        Arc::new(MockTracker {
            id: repository_type.name.clone(),
            remote: self.remote.clone(),
            known_credentials: self.known_credentials.clone(),
        })
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

#[derive(Default)]
pub struct RecordingBrowser {
    urls: Mutex<Vec<String>>,
}

impl RecordingBrowser {
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl Browser for RecordingBrowser {
    fn browse(&self, url: &str) -> Result<()> {
        self.urls.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// What a [`ScriptedWizard`] does when run.
#[derive(Clone)]
pub enum WizardScript {
    /// Fill the tracker step with these answers and confirm.
    Confirm {
        tracker: Option<Arc<dyn IssueTracker>>,
        credentials: Option<Credentials>,
        placement: Option<PlacementDetails>,
        remember: bool,
        title: Option<String>,
    },
    Cancel,
    Fail(String),
    /// Never finish.
    Hang,
}

pub struct ScriptedWizard {
    script: WizardScript,
    plans: Mutex<Vec<WizardPlan>>,
}

impl ScriptedWizard {
    pub fn new(script: WizardScript) -> Self {
        ScriptedWizard {
            script,
            plans: Mutex::new(Vec::new()),
        }
    }

    pub fn plans(&self) -> Vec<WizardPlan> {
        self.plans.lock().unwrap().clone()
    }
}

impl Wizard for ScriptedWizard {
    fn run<'a>(
        &'a self,
        plan: &'a WizardPlan,
        context: &'a mut TodosaurusWizardContext,
    ) -> BoxFuture<'a, Result<bool>> {
        self.plans.lock().unwrap().push(plan.clone());
        Box::pin(async move {
            match &self.script {
                WizardScript::Confirm {
                    tracker,
                    credentials,
                    placement,
                    remember,
                    title,
                } => {
                    if plan.has_step(WizardStep::ChooseIssueTracker) {
                        context.connection_details.issue_tracker = tracker.clone();
                        context.connection_details.credentials = credentials.clone();
                        context.placement_details = placement.clone();
                        context.remember_choice = *remember;
                    }
                    if let (true, Some(title)) =
                        (plan.has_step(WizardStep::CreateNewIssue), title)
                    {
                        let mut draft = context.todo_item.to_new_issue()?;
                        draft.title = title.clone();
                        context.issue_draft = Some(draft);
                    }
                    Ok(true)
                }
                WizardScript::Cancel => Ok(false),
                WizardScript::Fail(message) => Err(Error::Wizard(message.clone())),
                WizardScript::Hang => std::future::pending().await,
            }
        })
    }
}

/// Provider, store and recorders wired like a real session.
pub struct Fixture {
    pub remote: MockRemote,
    pub provider: Arc<IssueTrackerProvider>,
    pub store: Arc<UserChoiceStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub browser: Arc<RecordingBrowser>,
}

impl Fixture {
    pub fn new() -> Self {
        let remote = MockRemote::new();
        let provider = IssueTrackerProvider::new(vec!["GitHub".into(), "GitLab".into()])
            .with_factory(Box::new(MockFactory::new("GitHub", &remote)));
        Fixture {
            remote,
            provider: Arc::new(provider),
            store: Arc::new(UserChoiceStore::in_memory()),
            notifier: Arc::new(RecordingNotifier::default()),
            browser: Arc::new(RecordingBrowser::default()),
        }
    }

    pub fn tracker(&self) -> Arc<dyn IssueTracker> {
        self.provider.provide_by_repository_name("GitHub").unwrap()
    }

    /// A wizard that picks the GitHub tracker with `work` credentials.
    pub fn confirming_wizard(&self, remember: bool) -> WizardScript {
        WizardScript::Confirm {
            tracker: Some(self.tracker()),
            credentials: Some(credentials("work")),
            placement: Some(PlacementDetails::new("owner/repo")),
            remember,
            title: None,
        }
    }

    pub fn service(&self, script: WizardScript) -> (ToDoService, Arc<ScriptedWizard>) {
        let wizard = Arc::new(ScriptedWizard::new(script));
        let service = ToDoService::new(ServiceParts {
            provider: self.provider.clone(),
            store: self.store.clone(),
            wizard: wizard.clone(),
            notifier: self.notifier.clone(),
            browser: self.browser.clone(),
            executor: DocumentExecutor::spawn().unwrap(),
        });
        (service, wizard)
    }
}
