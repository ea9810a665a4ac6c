// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-branch commit detail retrieval.
//!
//! ```text
//! one `git log <branch>` per branch, all concurrent
//!
//! ---            <- block delimiter
//! [branch-name]  <- marker line
//! subject
//! body...
//! ```
//!
//! Results come back as paired records (branch name + capture), never as a
//! bare array that has to be zipped against the input by index.

use futures_util::future::join_all;
use std::path::Path;

use crate::config::GitConfig;

use super::cmd::{LOOKBACK, run_git};

/// Raw commit log text for one branch.
#[derive(Debug, Clone)]
pub struct BranchDetail {
    /// The branch this detail belongs to.
    pub branch: String,
    /// Delimiter-separated log text; empty means no commits in the window.
    pub output: String,
    /// Failure note when the log command errored; independent per branch.
    pub error: Option<String>,
}

/// Fetches the commit log text for every branch, concurrently.
///
/// Each branch spawns an independent git process; a failure for one branch
/// never affects the others, so this returns plain records instead of a
/// `Result`. Order follows the input order.
pub async fn branch_details(
    repo: &Path,
    branches: &[String],
    git: &GitConfig,
) -> Vec<BranchDetail> {
    let operations = branches.iter().map(|branch| async move {
        let args = [
            "log".to_string(),
            branch.clone(),
            format!("--since={LOOKBACK}"),
            format!("--pretty=format:---%n[{branch}]%n%s%n%b%n"),
        ];

        match run_git(&args, repo, git.command_timeout()).await {
            Ok(capture) => BranchDetail {
                branch: branch.clone(),
                error: capture.error_text(),
                output: capture.stdout,
            },
            Err(e) => BranchDetail {
                branch: branch.clone(),
                output: String::new(),
                error: Some(format!("{e:#}")),
            },
        }
    });

    join_all(operations).await
}
