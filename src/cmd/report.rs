// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Report command implementation for standup-rs.
//!
//! ```text
//! folder (flag or config)
//!   set   --> discover repositories (missing folder is fatal)
//!   unset --> current directory is the single candidate
//!
//! identity: config < CLI flags < git-config fallback
//!   still empty --> fatal, nothing to filter by
//!
//! discover_git_activity --> JSON on stdout
//! ```

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::cli::report::ReportArgs;
use crate::config::Config;
use crate::error::{Result, bail_out};
use crate::git::cmd::config_value;
use crate::git::discovery::discover_repositories;
use crate::git::extractor::discover_git_activity;
use crate::model::UserIdentifier;

/// Main handler for the report command.
///
/// # Errors
///
/// Returns an error when the repositories folder does not exist or when no
/// user identity can be derived from any source. A run that finds zero
/// activity succeeds and prints an empty `repositories` list.
pub async fn run_report_command(args: &ReportArgs, config: &Config) -> Result<()> {
    let mut git = config.git.clone();
    if args.no_fetch {
        git.fetch = false;
    }

    let folder = args
        .folder
        .as_deref()
        .or(config.paths.repositories.as_deref());
    let repositories = candidate_repositories(folder)?;
    info!(count = repositories.len(), "repositories to analyze");

    let mut user = UserIdentifier::from_config(&config.user);
    if let Some(name) = &args.author_name {
        user.git_author_name = Some(name.clone());
    }
    if let Some(email) = &args.author_email {
        user.git_author_email = Some(email.clone());
    }

    // Last resort: the identity of whoever committed here most recently
    if user.is_empty()
        && let Some(first_repo) = repositories.first()
    {
        user.git_author_name = config_value(first_repo, "user.name", git.command_timeout()).await;
        user.git_author_email = config_value(first_repo, "user.email", git.command_timeout()).await;
        if !user.is_empty() {
            info!(repo = %first_repo.display(), "detected author from git config");
        }
    }

    if user.is_empty() {
        return Err(bail_out(
            "no user identity: set [user] in standup.toml, STANDUP_USER__* variables, \
             or pass --author-email/--author-name",
        )
        .into());
    }

    let result = discover_git_activity(&repositories, &user, &git).await;

    if !result.has_activity() {
        info!("no git activity found in the lookback window");
    }

    let json = if args.compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{json}");

    Ok(())
}

/// Resolves the set of repositories a run covers.
fn candidate_repositories(folder: Option<&Path>) -> Result<Vec<PathBuf>> {
    match folder {
        Some(folder) => Ok(discover_repositories(folder)?),
        None => {
            let cwd = std::env::current_dir()?;
            debug!(cwd = %cwd.display(), "no folder configured, using current directory");
            Ok(vec![cwd])
        }
    }
}
