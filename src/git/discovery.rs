// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git repository discovery.
//!
//! ```text
//! ~/work/
//!   billing-service/   (included, has .git)
//!   infra-scripts/     (included, has .git)
//!   notes/             (skipped, no .git)
//!   .cache/            (skipped, hidden)
//! ```
//!
//! Returns sorted list of repo paths for deterministic ordering.

use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{DiscoveryError, StandupResult};

/// Check if a path is the root of a git working copy.
#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    path.join(".git").exists()
}

/// Discover git repositories among the immediate subdirectories of a parent
/// folder.
///
/// Hidden directories (starting with '.') are skipped; an entry that cannot
/// be inspected is skipped with a warning. An empty result is valid.
///
/// # Errors
///
/// Returns a `DiscoveryError` if the parent folder does not exist or cannot
/// be enumerated.
pub fn discover_repositories(parent: &Path) -> StandupResult<Vec<PathBuf>> {
    if !parent.is_dir() {
        return Err(DiscoveryError::FolderNotFound {
            path: parent.display().to_string(),
        }
        .into());
    }

    let entries = std::fs::read_dir(parent).map_err(|e| DiscoveryError::ReadDir {
        path: parent.display().to_string(),
        source: e,
    })?;

    let mut repos = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(parent = %parent.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();

        if !path.is_dir() {
            continue;
        }

        // Skip hidden directories (starting with '.')
        if let Some(name) = path.file_name().and_then(|n| n.to_str())
            && name.starts_with('.')
        {
            continue;
        }

        if is_git_repo(&path) {
            repos.push(path);
        }
    }

    // Sort for determinism
    repos.sort();
    Ok(repos)
}
