// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Data model shared between the extraction pipeline and downstream tooling.
//!
//! ```text
//! AggregatedGitResult
//!   repositories: [RepositoryActivity]
//!     repositoryPath, projectName
//!     branches: [BranchActivity]
//!       branchName, cardNumber, commitMessages
//! ```
//!
//! The JSON field names are a wire contract: correlation and formatting
//! tooling references them verbatim. Renaming a field here breaks consumers
//! silently, so every struct pins `rename_all = "camelCase"`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::UserConfig;

/// The person whose activity is being reported.
///
/// Any non-empty combination of a git author identity and/or a work-item
/// tracker identity. At least one field must be set for a run to proceed;
/// the command layer validates this after config and git-config fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserIdentifier {
    /// Git author name to filter by.
    pub git_author_name: Option<String>,
    /// Git author email to filter by (takes precedence over the name).
    pub git_author_email: Option<String>,
    /// Work-item tracker user id.
    pub tracker_id: Option<String>,
    /// Work-item tracker email.
    pub tracker_email: Option<String>,
    /// Work-item tracker display name.
    pub tracker_display_name: Option<String>,
}

impl UserIdentifier {
    /// Builds an identifier from configuration, dropping blank values.
    #[must_use]
    pub fn from_config(user: &UserConfig) -> Self {
        let clean = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Self {
            git_author_name: clean(&user.git_author_name),
            git_author_email: clean(&user.git_author_email),
            tracker_id: clean(&user.tracker_id),
            tracker_email: clean(&user.tracker_email),
            tracker_display_name: clean(&user.tracker_display_name),
        }
    }

    /// True when no identity field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.git_author_name.is_none()
            && self.git_author_email.is_none()
            && self.tracker_id.is_none()
            && self.tracker_email.is_none()
            && self.tracker_display_name.is_none()
    }

    /// The `git log --author` filter value. Email wins over name when both
    /// are configured; `None` when the identity is tracker-only.
    #[must_use]
    pub fn author_filter(&self) -> Option<&str> {
        self.git_author_email
            .as_deref()
            .or(self.git_author_name.as_deref())
    }
}

/// One git branch with evidence of recent work by the target author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchActivity {
    /// Branch name, possibly carrying an `origin/` prefix for remote-only
    /// branches.
    pub branch_name: String,
    /// Work-item card number inferred from the branch name; empty when the
    /// name carries no digits.
    pub card_number: String,
    /// Commit messages in git log order (most recent first).
    pub commit_messages: Vec<String>,
}

/// All recent activity found in a single repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryActivity {
    /// Absolute path of the working copy.
    pub repository_path: PathBuf,
    /// Human-readable project name derived from the origin remote URL.
    pub project_name: String,
    /// Branches with at least one commit in the lookback window.
    pub branches: Vec<BranchActivity>,
}

/// Root output of the extraction pipeline.
///
/// Repositories contributing zero activity are omitted entirely; an empty
/// list is a valid "no activity" outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedGitResult {
    pub repositories: Vec<RepositoryActivity>,
}

impl AggregatedGitResult {
    /// True when at least one repository has at least one active branch.
    #[must_use]
    pub fn has_activity(&self) -> bool {
        self.repositories.iter().any(|repo| !repo.branches.is_empty())
    }
}
