// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Discovery of branches an author touched within the lookback window.
//!
//! ```text
//! git fetch origin                 (best-effort, first)
//! git log --all --author=<filter>
//!         --since="16 hours ago" --format=%D
//!      |
//!      v
//! decoration lines
//!   cut at ','  strip "HEAD -> "
//!   drop trunk names and empties
//!   drop anything containing "master"
//!   dedup origin/<x> against local <x>
//!      |
//!      v
//! sorted branch names
//! ```

use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

use crate::config::GitConfig;
use crate::error::Result;
use crate::model::UserIdentifier;

use super::cmd::{LOOKBACK, run_git};

/// Trunk ref names that never represent individual work.
const TRUNK_NAMES: [&str; 3] = ["master", "dev", "sprint"];

/// Branches an author touched recently, plus any stderr noise from the query.
#[derive(Debug, Clone, Default)]
pub struct WorkedBranches {
    /// Sorted, deduplicated branch names. May be empty.
    pub branches: Vec<String>,
    /// Raw stderr of the log command, when it produced any.
    pub error: Option<String>,
}

/// Lists branch names the given author touched within the lookback window.
///
/// Fetches from origin first so freshly pushed remote branches are visible;
/// a failed fetch is logged and ignored. The author filter uses the email
/// when one is set, the name otherwise, and is passed as a single argv
/// element so names with spaces or metacharacters never reach a shell.
///
/// # Errors
///
/// Returns an error only when git itself cannot be spawned. An empty result
/// is a valid outcome (no recent activity).
pub async fn worked_branches(
    repo: &Path,
    user: &UserIdentifier,
    git: &GitConfig,
) -> Result<WorkedBranches> {
    if git.fetch {
        match run_git(["fetch", "origin"], repo, git.command_timeout()).await {
            Ok(capture) if !capture.success() => {
                debug!(repo = %repo.display(), stderr = %capture.stderr.trim(), "fetch failed, continuing");
            }
            Err(e) => debug!(repo = %repo.display(), error = %e, "fetch failed, continuing"),
            Ok(_) => {}
        }
    }

    let mut args = vec!["log".to_string(), "--all".to_string()];
    if let Some(author) = user.author_filter() {
        args.push(format!("--author={author}"));
    }
    args.push(format!("--since={LOOKBACK}"));
    args.push("--format=%D".to_string());

    let capture = run_git(&args, repo, git.command_timeout()).await?;

    Ok(WorkedBranches {
        branches: collect_branch_names(&capture.stdout),
        error: capture.error_text(),
    })
}

/// Turns raw `--format=%D` decoration output into the final branch name set.
pub(crate) fn collect_branch_names(log_output: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    for line in log_output.lines() {
        // Multiple refs decorate one commit; only the first matters
        let name = line.split(',').next().unwrap_or_default();
        let name = name.strip_prefix("HEAD -> ").unwrap_or(name);

        if name.is_empty() || TRUNK_NAMES.contains(&name) {
            continue;
        }
        // origin/master, master-backup and friends are trunk noise too
        if name.contains("master") {
            continue;
        }
        seen.insert(name);
    }

    dedup_local_remote(&seen)
}

/// Collapses `origin/<x>` into `<x>` when the local branch exists, so a
/// branch worked on both locally and remotely appears once under its local
/// name.
fn dedup_local_remote(names: &BTreeSet<&str>) -> Vec<String> {
    let locals: BTreeSet<&str> = names
        .iter()
        .copied()
        .filter(|n| !n.starts_with("origin/"))
        .collect();

    let mut branches: Vec<String> = Vec::new();
    for name in names {
        match name.strip_prefix("origin/") {
            Some(local_name) if locals.contains(local_name) => {}
            _ => branches.push((*name).to_string()),
        }
    }

    branches.sort();
    branches
}
