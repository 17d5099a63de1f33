// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal wizard.
//!
//! Answers given as command-line flags are used as-is; anything missing is
//! asked for on the terminal. Without a terminal every answer must come from
//! flags.

use std::io;
use std::sync::Arc;

use tds_core::{
    BoxFuture, Error, IssueTracker, IssueTrackerProvider, PlacementDetails, Result,
    TodosaurusWizardContext, Wizard, WizardPlan, WizardStep,
};

use crate::cli::ConnectionArgs;
use crate::prompt::Prompt;

/// Answers supplied up front.
#[derive(Debug, Clone, Default)]
pub struct WizardAnswers {
    pub connection: ConnectionArgs,
    pub title: Option<String>,
    /// Skip the final confirmation.
    pub yes: bool,
}

pub struct TerminalWizard {
    provider: Arc<IssueTrackerProvider>,
    prompt: Arc<dyn Prompt>,
    answers: WizardAnswers,
}

impl TerminalWizard {
    pub fn new(
        provider: Arc<IssueTrackerProvider>,
        prompt: Arc<dyn Prompt>,
        answers: WizardAnswers,
    ) -> Self {
        TerminalWizard {
            provider,
            prompt,
            answers,
        }
    }

    /// Runs a blocking prompt off the async runtime.
    async fn ask<R, F>(&self, question: F) -> Result<R>
    where
        F: FnOnce(&dyn Prompt) -> io::Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let prompt = Arc::clone(&self.prompt);
        tokio::task::spawn_blocking(move || question(prompt.as_ref()))
            .await
            .map_err(|e| Error::Wizard(e.to_string()))?
            .map_err(|e| Error::Wizard(e.to_string()))
    }

    fn require_terminal(&self, what: &str) -> Result<()> {
        if self.prompt.is_interactive() {
            Ok(())
        } else {
            Err(Error::Wizard(format!(
                "no terminal to ask for the {what}\n  hint: pass --tracker, --credentials and --placement"
            )))
        }
    }

    /// Fills tracker, credentials and placement. `false` when the user cancels.
    async fn choose_issue_tracker(&self, context: &mut TodosaurusWizardContext) -> Result<bool> {
        let connection = &self.answers.connection;
        let mut asked = false;

        let tracker: Arc<dyn IssueTracker> = match &connection.tracker {
            Some(id) => self
                .provider
                .provide_by_repository_name(id)
                .ok_or_else(|| Error::IssueTrackerNotFound(id.clone()))?,
            None => {
                self.require_terminal("issue tracker")?;
                asked = true;
                let trackers = self.provider.provide_all();
                let titles: Vec<String> = trackers.iter().map(|t| t.title().to_string()).collect();
                let picked = self
                    .ask(move |p| p.pick("Select issue tracker:", &titles))
                    .await?;
                match picked.and_then(|i| trackers.get(i).cloned()) {
                    Some(tracker) => tracker,
                    None => return Ok(false),
                }
            }
        };

        let credentials_id = match &connection.credentials {
            Some(id) => id.clone(),
            None => {
                self.require_terminal("credentials")?;
                asked = true;
                match self.ask(|p| p.ask("Credentials identifier", None)).await? {
                    Some(id) if !id.is_empty() => id,
                    Some(_) => return Err(Error::MissingCredentials),
                    None => return Ok(false),
                }
            }
        };
        let credentials = tracker
            .create_credentials_provider()
            .provide(&credentials_id)
            .await?
            .ok_or_else(|| Error::CredentialsNotFound(credentials_id.clone()))?;

        let path = match &connection.placement {
            Some(path) => path.clone(),
            None => {
                self.require_terminal("placement")?;
                asked = true;
                match self.ask(|p| p.ask("Repository path (owner/repo)", None)).await? {
                    Some(path) if !path.is_empty() => path,
                    Some(_) => return Err(Error::MissingPlacementDetails),
                    None => return Ok(false),
                }
            }
        };
        let mut placement = PlacementDetails::new(path);
        if let Some(server) = &connection.server {
            placement = placement.with_server_url(server.clone());
        }

        let remember = if connection.remember {
            true
        } else if asked {
            self.ask(|p| p.confirm("Remember this choice for the project?", false))
                .await?
        } else {
            false
        };

        tracing::debug!(tracker = tracker.id(), credentials = %credentials.id, %placement, remember, "tracker chosen");
        context.connection_details.issue_tracker = Some(tracker);
        context.connection_details.credentials = Some(credentials);
        context.placement_details = Some(placement);
        context.remember_choice = remember;
        Ok(true)
    }

    /// Fills the issue draft. `false` when the user cancels.
    async fn create_new_issue(&self, context: &mut TodosaurusWizardContext) -> Result<bool> {
        let mut draft = context.todo_item.to_new_issue()?;
        match &self.answers.title {
            Some(title) => draft.title = title.clone(),
            None if self.prompt.is_interactive() && !self.answers.yes => {
                let current = draft.title.clone();
                match self.ask(move |p| p.ask("Title", Some(&current))).await? {
                    Some(title) => draft.title = title,
                    None => return Ok(false),
                }
            }
            None => {}
        }
        context.issue_draft = Some(draft);
        Ok(true)
    }

    async fn confirm(&self, plan: &WizardPlan) -> Result<bool> {
        if self.answers.yes || !self.prompt.is_interactive() {
            return Ok(true);
        }
        let question = format!(
            "{}: {}?",
            plan.title,
            plan.final_button.as_deref().unwrap_or("Continue")
        );
        self.ask(move |p| p.confirm(&question, true)).await
    }
}

impl Wizard for TerminalWizard {
    fn run<'a>(
        &'a self,
        plan: &'a WizardPlan,
        context: &'a mut TodosaurusWizardContext,
    ) -> BoxFuture<'a, Result<bool>> {
        Box::pin(async move {
            if plan.has_step(WizardStep::ChooseIssueTracker)
                && !self.choose_issue_tracker(context).await?
            {
                return Ok(false);
            }
            if plan.has_step(WizardStep::CreateNewIssue) && !self.create_new_issue(context).await? {
                return Ok(false);
            }
            self.confirm(plan).await
        })
    }
}

#[cfg(test)]
#[path = "wizard_tests.rs"]
mod tests;
