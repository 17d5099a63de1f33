// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::location::Location;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "tds")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Turn TODO comments into tracked issues")]
#[command(
    long_about = "Turn TODO comments into tracked issues.\n\n\
    Finds TODO markers in source files, creates an issue on GitHub or GitLab for one,\n\
    and rewrites the marker to TODO[#<number>] so the code points at its issue."
)]
pub struct Cli {
    /// Run as if tds was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Log debug details to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize todosaurus in the current directory (or specified path)
    Init {
        /// Path to initialize (defaults to current directory)
        path: Option<String>,
    },

    /// List TODO items in files or directories
    #[command(after_help = "\
Examples:
  tds list                 All TODO items under the current directory
  tds list src --new       Items not yet reported
  tds list -o json         Machine-readable output")]
    List {
        /// Files or directories to scan (defaults to .)
        paths: Vec<String>,

        /// Only items without an issue
        #[arg(long, conflicts_with = "reported")]
        new: bool,

        /// Only items that reference an issue
        #[arg(long)]
        reported: bool,

        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Create an issue for the TODO at FILE:LINE and mark it as reported
    #[command(after_help = "\
Examples:
  tds report src/lib.rs:42
  tds report src/lib.rs:42 --tracker GitHub --credentials work --placement owner/repo --remember")]
    Report {
        /// Location of the TODO marker
        location: Location,

        #[command(flatten)]
        connection: ConnectionArgs,

        /// Issue title (defaults to the TODO text)
        #[arg(long)]
        title: Option<String>,

        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },

    /// Open the issue referenced by the TODO at FILE:LINE in the browser
    Open {
        /// Location of the TODO marker
        location: Location,

        #[command(flatten)]
        connection: ConnectionArgs,

        /// Print the issue URL instead of launching a browser
        #[arg(long)]
        print: bool,
    },

    /// Show or clear the remembered tracker choice
    Choice {
        #[command(subcommand)]
        command: ChoiceCommand,
    },

    /// List available issue trackers
    Trackers,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceCommand {
    /// Print the remembered choice
    Show,
    /// Forget the remembered choice
    Clear,
}

/// Answers for the tracker selection step, skipping its prompts.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionArgs {
    /// Issue tracker identifier (see 'tds trackers')
    #[arg(long)]
    pub tracker: Option<String>,

    /// Credentials identifier
    #[arg(long)]
    pub credentials: Option<String>,

    /// Repository or project path, e.g. owner/repo
    #[arg(long)]
    pub placement: Option<String>,

    /// Server URL for self-hosted trackers
    #[arg(long)]
    pub server: Option<String>,

    /// Remember these answers for later runs
    #[arg(long)]
    pub remember: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
