// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! GitHub and GitHub Enterprise issues.

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

pub const GITHUB_ID: &str = "GitHub";
pub const GITHUB_SERVER: &str = "https://github.com";
const GITHUB_API: &str = "https://api.github.com";

/// API base for `server`: the public API for github.com, `/api/v3` otherwise.
pub fn api_url(server: &str) -> String {
    let server = server.trim_end_matches('/');
    if server == GITHUB_SERVER {
        GITHUB_API.to_string()
    } else {
        format!("{server}/api/v3")
    }
}

/// Splits `owner/repo` (a trailing `.git` is ignored).
pub fn parse_repository(path: &str) -> Result<(String, String)> {
    let trimmed = path.trim().trim_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);
    match trimmed.split('/').collect::<Vec<_>>()[..] {
        [owner, repo] if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(Error::InvalidPlacement {
            path: path.to_string(),
            expected: "owner/repository",
        }),
    }
}

#[derive(Debug)]
pub struct GitHubTracker {
    settings: TrackerSettings,
}

impl GitHubTracker {
    pub fn new(settings: TrackerSettings) -> Self {
        GitHubTracker { settings }
    }
}

impl IssueTracker for GitHubTracker {
    fn id(&self) -> &str {
        GITHUB_ID
    }

    fn title(&self) -> &str {
        "GitHub"
    }

    fn icon(&self) -> &str {
        "gh"
    }

    fn create_client(
        &self,
        credentials: &Credentials,
        placement: &PlacementDetails,
    ) -> tds_core::Result<Box<dyn IssueTrackerClient>> {
        let (owner, repo) = parse_repository(&placement.path)?;
        let server = placement
            .server_url
            .as_deref()
            .or(credentials.server_url.as_deref())
            .unwrap_or(GITHUB_SERVER)
            .trim_end_matches('/');
        let api = ApiClient::new(
            GITHUB_ID,
            &api_url(server),
            "Authorization",
            &format!("token {}", credentials.token),
        )?;
        tracing::debug!(api = api.base_url(), %owner, %repo, "created GitHub client");

        Ok(Box::new(GitHubClient {
            api,
            repository_url: format!("{server}/{owner}/{repo}"),
            issues_path: format!("/repos/{owner}/{repo}/issues"),
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
    body: &'a str,
}

#[derive(Deserialize)]
struct IssueResponse {
    number: u64,
    html_url: String,
    title: String,
}

impl From<IssueResponse> for Issue {
    fn from(response: IssueResponse) -> Self {
        Issue {
            number: response.number,
            url: response.html_url,
            title: response.title,
        }
    }
}

struct GitHubClient {
    api: ApiClient,
    repository_url: String,
    issues_path: String,
    source_url_base: Option<String>,
}

impl GitHubClient {
    async fn create(&self, issue: &NewIssue) -> Result<Issue> {
        let links = SourceLinks {
            repository_url: &self.repository_url,
            blob_segment: "blob/HEAD",
            source_url_base: self.source_url_base.as_deref(),
        };
        let body = links.render_description(issue);
        let request = CreateIssueRequest {
            title: &issue.title,
            body: &body,
        };
        let response: IssueResponse = self.api.post_json(&self.issues_path, &request).await?;
        Ok(response.into())
    }

    async fn get(&self, number: u64) -> Result<Option<Issue>> {
        let response: Option<IssueResponse> = self
            .api
            .get_optional(&format!("{}/{}", self.issues_path, number))
            .await?;
        Ok(response.map(Issue::from))
    }
}

impl IssueTrackerClient for GitHubClient {
    fn create_issue<'a>(&'a self, issue: &'a NewIssue) -> BoxFuture<'a, tds_core::Result<Issue>> {
        Box::pin(async move { self.create(issue).await.map_err(Into::into) })
    }

    fn get_issue(&self, number: u64) -> BoxFuture<'_, tds_core::Result<Option<Issue>>> {
        Box::pin(async move { self.get(number).await.map_err(Into::into) })
    }
}

/// Registers [`GitHubTracker`] under [`GITHUB_ID`].
#[derive(Debug, Default)]
pub struct GitHubFactory {
    settings: TrackerSettings,
}

impl GitHubFactory {
    pub fn new(settings: TrackerSettings) -> Self {
        GitHubFactory { settings }
    }
}

impl IssueTrackerFactory for GitHubFactory {
    fn tracker_id(&self) -> &str {
        GITHUB_ID
    }

    fn create_tracker(&self, _repository_type: &RepositoryType) -> Arc<dyn IssueTracker> {
        Arc::new(GitHubTracker::new(self.settings.clone()))
    }
}

#[cfg(test)]
#[path = "github_tests.rs"]
mod tests;
