// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! GitLab (gitlab.com and self-managed) issues.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tds_core::{
    BoxFuture, Credentials, CredentialsProvider, Issue, IssueTracker, IssueTrackerClient,
    IssueTrackerFactory, NewIssue, PlacementDetails, RepositoryType,
};

use crate::credentials::TokenCredentialsProvider;
use crate::error::{Error, Result};
use crate::http::ApiClient;
use crate::link::SourceLinks;
use crate::TrackerSettings;

pub const GITLAB_ID: &str = "GitLab";
pub const GITLAB_SERVER: &str = "https://gitlab.com";

/// Normalizes a `group[/subgroup...]/project` path.
pub fn parse_project_path(path: &str) -> Result<String> {
    let trimmed = path.trim().trim_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);
    let segments: Vec<&str> = trimmed.split('/').collect();
    if segments.len() < 2 || segments.iter().any(|s| s.is_empty()) {
        return Err(Error::InvalidPlacement {
            path: path.to_string(),
            expected: "group/project or group/subgroup/project",
        });
    }
    Ok(segments.join("/"))
}

#[derive(Debug)]
pub struct GitLabTracker {
    settings: TrackerSettings,
}

impl GitLabTracker {
    pub fn new(settings: TrackerSettings) -> Self {
        GitLabTracker { settings }
    }
}

impl IssueTracker for GitLabTracker {
    fn id(&self) -> &str {
        GITLAB_ID
    }

    fn title(&self) -> &str {
        "GitLab"
    }

    fn icon(&self) -> &str {
        "gl"
    }

    fn create_client(
        &self,
        credentials: &Credentials,
        placement: &PlacementDetails,
    ) -> tds_core::Result<Box<dyn IssueTrackerClient>> {
        let project = parse_project_path(&placement.path)?;
        let server = placement
            .server_url
            .as_deref()
            .or(credentials.server_url.as_deref())
            .unwrap_or(GITLAB_SERVER)
            .trim_end_matches('/');
        let api = ApiClient::new(
            GITLAB_ID,
            &format!("{server}/api/v4"),
            "PRIVATE-TOKEN",
            &credentials.token,
        )?;
        tracing::debug!(api = api.base_url(), %project, "created GitLab client");

        Ok(Box::new(GitLabClient {
            api,
            repository_url: format!("{server}/{project}"),
            issues_path: format!("/projects/{}/issues", urlencoding::encode(&project)),
            source_url_base: self.settings.source_url_base.clone(),
        }))
    }

    fn create_credentials_provider(&self) -> Box<dyn CredentialsProvider> {
        Box::new(TokenCredentialsProvider::new(
            self.settings.credentials_file.clone(),
        ))
    }
}

#[derive(Serialize)]
struct CreateIssueRequest<'a> {
    title: &'a str,
    description: &'a str,
}

/// GitLab numbers issues per project with `iid`; `id` is instance-global.
#[derive(Deserialize)]
struct IssueResponse {
    iid: u64,
    web_url: String,
    title: String,
}

impl From<IssueResponse> for Issue {
    fn from(response: IssueResponse) -> Self {
        Issue {
            number: response.iid,
            url: response.web_url,
            title: response.title,
        }
    }
}

struct GitLabClient {
    api: ApiClient,
    repository_url: String,
    issues_path: String,
    source_url_base: Option<String>,
}

impl GitLabClient {
    async fn create(&self, issue: &NewIssue) -> Result<Issue> {
        let links = SourceLinks {
            repository_url: &self.repository_url,
            blob_segment: "-/blob/HEAD",
            source_url_base: self.source_url_base.as_deref(),
        };
        let description = links.render_description(issue);
        let request = CreateIssueRequest {
            title: &issue.title,
            description: &description,
        };
        let response: IssueResponse = self.api.post_json(&self.issues_path, &request).await?;
        Ok(response.into())
    }

    async fn get(&self, iid: u64) -> Result<Option<Issue>> {
        let response: Option<IssueResponse> = self
            .api
            .get_optional(&format!("{}/{}", self.issues_path, iid))
            .await?;
        Ok(response.map(Issue::from))
    }
}

impl IssueTrackerClient for GitLabClient {
    fn create_issue<'a>(&'a self, issue: &'a NewIssue) -> BoxFuture<'a, tds_core::Result<Issue>> {
        Box::pin(async move { self.create(issue).await.map_err(Into::into) })
    }

    fn get_issue(&self, number: u64) -> BoxFuture<'_, tds_core::Result<Option<Issue>>> {
        Box::pin(async move { self.get(number).await.map_err(Into::into) })
    }
}

#[derive(Debug, Default)]
pub struct GitLabFactory {
    settings: TrackerSettings,
}

impl GitLabFactory {
    pub fn new(settings: TrackerSettings) -> Self {
        GitLabFactory { settings }
    }
}

impl IssueTrackerFactory for GitLabFactory {
    fn tracker_id(&self) -> &str {
        GITLAB_ID
    }

    fn create_tracker(&self, _repository_type: &RepositoryType) -> Arc<dyn IssueTracker> {
        Arc::new(GitLabTracker::new(self.settings.clone()))
    }
}

#[cfg(test)]
#[path = "gitlab_tests.rs"]
mod tests;
