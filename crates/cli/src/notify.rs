// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal notifications and browser launchers.

use tds_core::{Browser, Notification, Notifier};

use crate::colors;

/// Prints successes to stdout and failures to stderr.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        match &notification {
            Notification::IssueCreated { number, url, title } => {
                println!(
                    "Created issue {} {}",
                    colors::issue(&format!("#{number}")),
                    title
                );
                println!("  {}", colors::context(url));
            }
            _ => eprintln!("error: {}", notification),
        }
    }
}

/// Opens URLs with the platform's default browser.
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn browse(&self, url: &str) -> tds_core::Result<()> {
        tracing::debug!(url, "launching browser");
        open::that(url).map_err(|e| tds_core::Error::Browser(e.to_string()))
    }
}

/// Prints URLs instead of opening them.
#[derive(Debug, Default)]
pub struct PrintBrowser;

impl Browser for PrintBrowser {
    fn browse(&self, url: &str) -> tds_core::Result<()> {
        println!("{url}");
        Ok(())
    }
}
