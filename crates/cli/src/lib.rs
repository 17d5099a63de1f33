// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tdsrs - the `tds` command: turn TODO comments into tracked issues.
//!
//! This crate hosts the tds-core TODO service on the terminal: it loads the
//! project configuration, registers the GitHub and GitLab trackers, runs the
//! wizard as terminal prompts, and saves rewritten source files.
//!
//! # Main Components
//!
//! - [`Config`] - Project configuration in `.todosaurus/config.toml`
//! - [`Project`] - Provider and saved choice loaded for one run
//! - [`TerminalWizard`] - Wizard answered by flags or terminal prompts
//! - [`Error`] - Error types for all commands
//!
//! # Initialization
//!
//! ```rust,ignore
//! use tdsrs::{init_work_dir, Project};
//!
//! let work_dir = init_work_dir(Path::new("."))?;
//! let project = Project::open()?;
//! for tracker in project.provider.provide_all() {
//!     println!("{}", tracker.id());
//! }
//! ```

mod cli;
pub mod colors;
mod commands;
mod location;
mod notify;
mod source;

pub mod config;
pub mod error;
pub mod prompt;
pub mod session;
pub mod wizard;

pub use cli::{ChoiceCommand, Cli, Command, ConnectionArgs, OutputFormat};
pub use config::{find_work_dir, init_work_dir, Config};
pub use error::{Error, Result};
pub use location::Location;
pub use session::{Project, Session};
pub use wizard::{TerminalWizard, WizardAnswers};

/// Runs one `tds` subcommand.
pub async fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { path } => commands::init::run(path),
        Command::List {
            paths,
            new,
            reported,
            output,
        } => commands::list::run(&paths, new, reported, output),
        Command::Report {
            location,
            connection,
            title,
            yes,
        } => commands::report::run(location, connection, title, yes).await,
        Command::Open {
            location,
            connection,
            print,
        } => commands::open::run(location, connection, print).await,
        Command::Choice { command } => commands::choice::run(command),
        Command::Trackers => commands::trackers::run(),
    }
}
