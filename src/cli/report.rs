// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the report and repos commands.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the report command.
#[derive(Debug, Clone, Default, Args)]
pub struct ReportArgs {
    /// Folder whose immediate subdirectories are scanned for git working
    /// copies. Without it, the current directory is treated as the single
    /// repository.
    #[arg(short = 'f', long = "folder", value_name = "DIR")]
    pub folder: Option<PathBuf>,

    /// Git author name to filter by.
    #[arg(long = "author-name", value_name = "NAME")]
    pub author_name: Option<String>,

    /// Git author email to filter by (takes precedence over the name).
    #[arg(long = "author-email", value_name = "EMAIL")]
    pub author_email: Option<String>,

    /// Skip the `git fetch origin` before querying branches.
    #[arg(long = "no-fetch")]
    pub no_fetch: bool,

    /// Print compact JSON instead of pretty-printed output.
    #[arg(long = "compact")]
    pub compact: bool,
}

/// Arguments for the repos command.
#[derive(Debug, Clone, Default, Args)]
pub struct ReposArgs {
    /// Folder whose immediate subdirectories are scanned for git working
    /// copies.
    #[arg(short = 'f', long = "folder", value_name = "DIR")]
    pub folder: Option<PathBuf>,
}
