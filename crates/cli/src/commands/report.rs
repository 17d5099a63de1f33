// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::cli::ConnectionArgs;
use crate::error::{Error, Result};
use crate::location::Location;
use crate::session::Project;
use crate::source::SourceFile;
use crate::wizard::WizardAnswers;

use super::finish;

/// Creates an issue for the TODO at `location` and rewrites the file.
pub async fn run(
    location: Location,
    connection: ConnectionArgs,
    title: Option<String>,
    yes: bool,
) -> Result<()> {
    let project = Project::open()?;
    let source = SourceFile::open(&project.root, Path::new(&location.path))?;
    let item = source.item_at(location.line)?;
    if !item.is_new()? {
        let path = source.relative_path.clone();
        let line = location.line;
        return Err(match item.issue_number()? {
            Some(number) => Error::AlreadyReported { path, line, number },
            None => Error::NotNew { path, line },
        });
    }

    let session = project.start_session(
        WizardAnswers {
            connection,
            title,
            yes,
        },
        false,
    )?;
    finish(session.service().create_new_issue(item)).await?;

    if source.document.is_modified() {
        source.save()?;
        tracing::debug!(path = %source.relative_path, "saved rewritten TODO item");
    }
    Ok(())
}
