// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project session: the provider, choice store and service for one run.

use std::path::PathBuf;
use std::sync::Arc;

use tds_core::{
    Browser, DocumentExecutor, IssueTrackerProvider, RepositoryType, ServiceParts, ToDoService,
    UserChoiceStore,
};
use tds_trackers::TrackerSettings;

use crate::config::{choice_path, credentials_path, find_work_dir, project_root, Config};
use crate::error::Result;
use crate::notify::{PrintBrowser, SystemBrowser, TerminalNotifier};
use crate::prompt::TerminalPrompt;
use crate::wizard::{TerminalWizard, WizardAnswers};

/// Everything loaded from `.todosaurus/` that commands need.
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
    pub provider: Arc<IssueTrackerProvider>,
    pub store: Arc<UserChoiceStore>,
}

impl Project {
    /// Finds and loads the project containing the current directory.
    pub fn open() -> Result<Self> {
        let work_dir = find_work_dir()?;
        let config = Config::load(&work_dir)?;
        let store = UserChoiceStore::open(&choice_path(&work_dir))?;
        let provider = build_provider(&config);
        tracing::debug!(
            work_dir = %work_dir.display(),
            repository_types = ?config.repository_types,
            "project opened"
        );
        Ok(Project {
            root: project_root(&work_dir),
            config,
            provider: Arc::new(provider),
            store: Arc::new(store),
        })
    }

    /// Starts a TODO service session driven by the terminal.
    pub fn start_session(&self, answers: WizardAnswers, print_urls: bool) -> Result<Session> {
        let wizard = TerminalWizard::new(
            Arc::clone(&self.provider),
            Arc::new(TerminalPrompt),
            answers,
        );
        let browser: Arc<dyn Browser> = if print_urls {
            Arc::new(PrintBrowser)
        } else {
            Arc::new(SystemBrowser)
        };
        let service = ToDoService::new(ServiceParts {
            provider: Arc::clone(&self.provider),
            store: Arc::clone(&self.store),
            wizard: Arc::new(wizard),
            notifier: Arc::new(TerminalNotifier),
            browser,
            executor: DocumentExecutor::spawn()?,
        });
        Ok(Session { service })
    }
}

/// Registers the built-in trackers for the configured repository types.
pub fn build_provider(config: &Config) -> IssueTrackerProvider {
    let settings = TrackerSettings {
        credentials_file: credentials_path(),
        source_url_base: config.source_url_base.clone(),
    };
    let repository_types = config
        .repository_types
        .iter()
        .map(|name| RepositoryType::new(name.as_str()))
        .collect();
    let mut provider = IssueTrackerProvider::new(repository_types);
    for factory in tds_trackers::factories(&settings) {
        provider.register(factory);
    }
    provider
}

/// A live [`ToDoService`]; dropping the session disposes it.
pub struct Session {
    service: ToDoService,
}

impl Session {
    pub fn service(&self) -> &ToDoService {
        &self.service
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.service.dispose();
    }
}
