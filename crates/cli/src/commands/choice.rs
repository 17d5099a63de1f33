// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tds_core::UserChoice;

use crate::cli::ChoiceCommand;
use crate::colors;
use crate::error::Result;
use crate::session::Project;

pub fn run(command: ChoiceCommand) -> Result<()> {
    let project = Project::open()?;
    match command {
        ChoiceCommand::Show => match project.store.get_choice_or_null() {
            Some(choice) => print!("{}", format_choice(&choice)),
            None => println!("No saved choice"),
        },
        ChoiceCommand::Clear => {
            project.store.clear()?;
            println!("Cleared saved choice");
        }
    }
    Ok(())
}

fn field(label: &str, value: Option<String>) -> String {
    format!(
        "{} {}\n",
        colors::header(&format!("{label}:")),
        value.unwrap_or_else(|| colors::context("(none)"))
    )
}

pub fn format_choice(choice: &UserChoice) -> String {
    let mut out = String::new();
    out.push_str(&field("Tracker", choice.issue_tracker_id.clone()));
    out.push_str(&field("Credentials", choice.credentials_id.clone()));
    out.push_str(&field(
        "Placement",
        choice.placement_details.as_ref().map(ToString::to_string),
    ));
    out.push_str(&field(
        "Saved",
        choice.saved_at.map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string()),
    ));
    out
}

#[cfg(test)]
#[path = "choice_tests.rs"]
mod tests;
