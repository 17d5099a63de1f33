// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON-over-HTTPS plumbing shared by the tracker clients.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("todosaurus/", env!("CARGO_PKG_VERSION"));

/// Authenticated client bound to one API base URL.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    tracker: &'static str,
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Builds a client sending `token` in `auth_header` on every request.
    pub(crate) fn new(
        tracker: &'static str,
        base_url: &str,
        auth_header: &'static str,
        token: &str,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(token).map_err(|_| Error::Unauthorized {
            tracker,
            message: "token contains characters not allowed in a header".to_string(),
        })?;
        auth.set_sensitive(true);
        headers.insert(auth_header, auth);

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|source| Error::Http { tracker, source })?;

        Ok(ApiClient {
            tracker,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(tracker = self.tracker, %url, "POST");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| self.http_error(source))?;
        let response = self.check_response(response).await?;
        response.json().await.map_err(|source| self.http_error(source))
    }

    /// GET that maps `404 Not Found` to `None`.
    pub(crate) async fn get_optional<R>(&self, path: &str) -> Result<Option<R>>
    where
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(tracker = self.tracker, %url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| self.http_error(source))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = self.check_response(response).await?;
        let value = response.json().await.map_err(|source| self.http_error(source))?;
        Ok(Some(value))
    }

    async fn check_response(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Error::Unauthorized {
                tracker: self.tracker,
                message,
            }),
            _ => Err(Error::Api {
                tracker: self.tracker,
                status: status.as_u16(),
                message,
            }),
        }
    }

    fn http_error(&self, source: reqwest::Error) -> Error {
        Error::Http {
            tracker: self.tracker,
            source,
        }
    }
}

/// Human-readable message from a JSON error body.
///
/// GitHub reports `message`; GitLab reports `message` (string or object) or `error`.
pub(crate) fn error_message(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.trim().to_string();
    };
    for key in ["message", "error_description", "error"] {
        match json.get(key) {
            Some(serde_json::Value::String(s)) => return s.clone(),
            Some(other) if !other.is_null() => return other.to_string(),
            _ => {}
        }
    }
    body.trim().to_string()
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
