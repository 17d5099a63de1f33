// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Back-links from an issue description to the code.

use tds_core::{NewIssue, CODE_URL_PLACEHOLDER};

/// Where a tracker serves repository files.
pub(crate) struct SourceLinks<'a> {
    /// Web URL of the repository, e.g. `https://github.com/owner/repo`.
    pub repository_url: &'a str,
    /// Path segment between the repository URL and the file path.
    pub blob_segment: &'a str,
    /// Overrides `repository_url` + `blob_segment` when set.
    pub source_url_base: Option<&'a str>,
}

impl SourceLinks<'_> {
    /// URL of the line `issue` was reported from, or of the repository when the
    /// location is unknown.
    pub(crate) fn code_url(&self, issue: &NewIssue) -> String {
        let Some(location) = &issue.location else {
            return self.repository_url.to_string();
        };
        let base = match self.source_url_base {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("{}/{}", self.repository_url, self.blob_segment),
        };
        format!(
            "{}/{}#L{}",
            base,
            location.path.trim_start_matches('/'),
            location.line
        )
    }

    /// Description with every placeholder replaced by [`Self::code_url`].
    pub(crate) fn render_description(&self, issue: &NewIssue) -> String {
        issue
            .description
            .replace(CODE_URL_PLACEHOLDER, &self.code_url(issue))
    }
}

#[cfg(test)]
#[path = "link_tests.rs"]
mod tests;
