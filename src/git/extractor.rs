// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Orchestration of the per-repository extraction pipeline.
//!
//! ```text
//! for each repository (sequential):
//!   resolve project name     placeholder on failure, keep going
//!   discover worked branches skip repo on error or none
//!   fetch branch details     concurrent, per-branch failures skipped
//!   process branch data      skip repo when nothing survives
//!      |
//!      v
//! AggregatedGitResult (repos with activity only)
//! ```
//!
//! Repositories are processed one at a time: each already fans out several
//! child processes internally, and sequential repos keep the total process
//! count predictable on large folders.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::GitConfig;
use crate::error::Result;
use crate::model::{AggregatedGitResult, RepositoryActivity, UserIdentifier};

use super::branches::worked_branches;
use super::details::branch_details;
use super::parse::process_branch_data;
use super::remote::project_name;

/// Extracts recent git activity for one author across a set of repositories.
///
/// Failures inside a repository are logged and skip only that repository;
/// the returned aggregate may legitimately be empty.
pub async fn discover_git_activity(
    repositories: &[PathBuf],
    user: &UserIdentifier,
    git: &GitConfig,
) -> AggregatedGitResult {
    let mut results = Vec::new();

    for repository in repositories {
        match scan_repository(repository, user, git).await {
            Ok(Some(activity)) => results.push(activity),
            Ok(None) => {}
            Err(e) => {
                warn!(repo = %repository.display(), error = %format!("{e:#}"), "skipping repository");
            }
        }
    }

    AggregatedGitResult {
        repositories: results,
    }
}

/// Runs the full pipeline for one repository.
///
/// `Ok(None)` means the repository contributed no activity and is omitted
/// from the aggregate.
async fn scan_repository(
    repo: &Path,
    user: &UserIdentifier,
    git: &GitConfig,
) -> Result<Option<RepositoryActivity>> {
    info!(repo = %repo.display(), "analyzing repository");

    // A missing remote yields the placeholder name; local-only activity is
    // still worth reporting.
    let project = project_name(repo, git).await?;
    if let Some(error) = &project.error {
        warn!(repo = %repo.display(), error = %error, "no usable origin remote, using placeholder name");
    }

    let worked = worked_branches(repo, user, git).await?;
    if let Some(error) = &worked.error {
        warn!(repo = %repo.display(), error = %error, "branch discovery failed, skipping repository");
        return Ok(None);
    }
    if worked.branches.is_empty() {
        debug!(repo = %repo.display(), "no recent branches for author");
        return Ok(None);
    }

    let details = branch_details(repo, &worked.branches, git).await;

    let mut detail_map = BTreeMap::new();
    for detail in details {
        if let Some(error) = &detail.error {
            warn!(branch = %detail.branch, error = %error, "skipping branch detail");
            continue;
        }
        let trimmed = detail.output.trim();
        if trimmed.is_empty() {
            debug!(branch = %detail.branch, "no commits in window");
            continue;
        }
        detail_map.insert(detail.branch, trimmed.to_string());
    }

    if detail_map.is_empty() {
        debug!(repo = %repo.display(), "no valid branch details");
        return Ok(None);
    }

    let branches = process_branch_data(&worked.branches, &detail_map);
    if branches.is_empty() {
        debug!(repo = %repo.display(), "no relevant branches after processing");
        return Ok(None);
    }

    Ok(Some(RepositoryActivity {
        repository_path: repo.to_path_buf(),
        project_name: project.name,
        branches,
    }))
}
