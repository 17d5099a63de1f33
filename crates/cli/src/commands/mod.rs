// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod choice;
pub mod init;
pub mod list;
pub mod open;
pub mod report;
pub mod trackers;

use tds_core::WizardResult;
use tokio::task::JoinHandle;

use crate::error::{Error, Result};

/// Waits for a service operation and maps its outcome to a command result.
///
/// Failures were already notified, so they surface as [`Error::OperationFailed`].
pub async fn finish(handle: JoinHandle<WizardResult>) -> Result<()> {
    let result = handle.await.map_err(std::io::Error::other)?;
    outcome(result)
}

fn outcome(result: WizardResult) -> Result<()> {
    match result {
        WizardResult::Success => Ok(()),
        WizardResult::Failed => Err(Error::OperationFailed),
        WizardResult::Cancelled => Err(Error::Cancelled),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
