// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repos command implementation for standup-rs.

use crate::cli::report::ReposArgs;
use crate::config::Config;
use crate::error::{Result, bail_out};
use crate::git::discovery::discover_repositories;

/// Lists the git repositories a folder scan would cover.
///
/// # Errors
///
/// Returns an error when no folder is configured or the folder does not
/// exist.
pub fn run_repos_command(args: &ReposArgs, config: &Config) -> Result<()> {
    let folder = args
        .folder
        .as_deref()
        .or(config.paths.repositories.as_deref());

    let Some(folder) = folder else {
        return Err(bail_out(
            "no repositories folder: set [paths] repositories in standup.toml or pass --folder",
        )
        .into());
    };

    let repos = discover_repositories(folder)?;
    if repos.is_empty() {
        println!("(no git repositories under {})", folder.display());
        return Ok(());
    }

    for repo in repos {
        println!("{}", repo.display());
    }
    Ok(())
}
