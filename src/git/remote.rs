// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project name resolution from the origin remote URL.
//!
//! ```text
//! https://github.com/acme/billing-service.git  --> billing-service
//! https://dev.azure.com/org/Proj/_git/Repo     --> Repo
//! git@github.com:acme/billing-service.git      --> billing-service
//! (no remote)                                  --> Unknown Project
//! ```

use std::path::Path;

use crate::config::GitConfig;
use crate::error::Result;

use super::cmd::run_git;

/// Placeholder used when no name can be derived from the remote.
pub const UNKNOWN_PROJECT: &str = "Unknown Project";

/// Resolved project name plus the failure note, if resolution degraded.
#[derive(Debug, Clone)]
pub struct ProjectName {
    /// Human-readable name, or [`UNKNOWN_PROJECT`].
    pub name: String,
    /// Why resolution fell back to the placeholder, when it did.
    pub error: Option<String>,
}

/// Derive a human-readable project name from a repository's origin remote.
///
/// Absence of a usable remote never fails the pipeline; it yields the
/// placeholder name with an error note attached.
///
/// # Errors
///
/// Returns an error only when git itself cannot be spawned.
pub async fn project_name(repo: &Path, git: &GitConfig) -> Result<ProjectName> {
    let capture = run_git(["remote", "get-url", "origin"], repo, git.command_timeout()).await?;

    let url = capture.stdout.trim();
    let error = capture
        .error_text()
        .or_else(|| url.is_empty().then(|| "empty remote url".to_string()));

    Ok(ProjectName {
        name: extract_project_name(url),
        error,
    })
}

/// Extracts the project name from a git remote URL.
///
/// The name is the last non-empty `/` segment of the URL without its `.git`
/// suffix; a trailing slash falls back to the second-to-last segment, and an
/// SSH `host:path` form takes the piece after the final `:`.
pub(crate) fn extract_project_name(url: &str) -> String {
    if url.is_empty() {
        return UNKNOWN_PROJECT.to_string();
    }

    let clean = url.strip_suffix(".git").unwrap_or(url);
    let parts: Vec<&str> = clean.split('/').collect();
    let last = parts.last().copied().unwrap_or_default();

    if last.is_empty() && parts.len() > 1 {
        let prev = parts[parts.len() - 2];
        return if prev.is_empty() {
            UNKNOWN_PROJECT.to_string()
        } else {
            prev.to_string()
        };
    }

    if last.contains(':') {
        let tail = last.rsplit(':').next().unwrap_or_default();
        return if tail.is_empty() {
            UNKNOWN_PROJECT.to_string()
        } else {
            tail.to_string()
        };
    }

    if last.is_empty() {
        UNKNOWN_PROJECT.to_string()
    } else {
        last.to_string()
    }
}
