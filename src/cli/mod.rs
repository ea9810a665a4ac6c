// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for standup-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! standup [global options] <command>
//! report [--folder DIR] [--author-name N] [--author-email E] [--no-fetch]
//! repos  [--folder DIR]
//! options
//! version
//! ```

pub mod global;
pub mod report;


use crate::cli::global::GlobalOptions;
use crate::cli::report::{ReportArgs, ReposArgs};
use clap::{Parser, Subcommand};

/// Daily Standup Draft Tool
///
/// Extracts recent git activity per author into a structured report draft.
#[derive(Debug, Parser)]
#[command(
    name = "standup",
    author,
    version,
    about = "Daily Standup Draft Tool",
    long_about = "standup-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Scans a folder of git working copies for branches you touched\n\
                  in the last 16 hours and emits the per-branch commit activity\n\
                  as structured JSON for downstream standup tooling.",
    after_help = "CONFIG FILES:\n\n\
                  By default, standup looks for a `standup.toml` in the current\n\
                  directory. Additional files can be specified with --config and\n\
                  are layered on top; STANDUP_* environment variables and\n\
                  command-line flags override file values."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Extracts recent git activity and prints the report draft JSON.
    Report(ReportArgs),

    /// Lists the git repositories a folder scan would cover.
    Repos(ReposArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
