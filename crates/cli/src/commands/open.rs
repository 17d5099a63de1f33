// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::cli::ConnectionArgs;
use crate::error::Result;
use crate::location::Location;
use crate::session::Project;
use crate::source::SourceFile;
use crate::wizard::WizardAnswers;

use super::finish;

/// Opens the issue referenced by the TODO at `location`.
///
/// With `print`, the URL goes to stdout instead of a browser.
pub async fn run(location: Location, connection: ConnectionArgs, print: bool) -> Result<()> {
    let project = Project::open()?;
    let source = SourceFile::open(&project.root, Path::new(&location.path))?;
    let item = source.item_at(location.line)?;

    let session = project.start_session(
        WizardAnswers {
            connection,
            ..WizardAnswers::default()
        },
        print,
    )?;
    finish(session.service().open_reported_issue_in_browser(item)).await
}
