// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for standup-rs.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, UserConfig, PathsConfig, GitConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file. No file logging when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// The identity whose activity is being reported.
///
/// The git author fields drive the `git log --author` filter; the tracker
/// fields identify the same person in the external work-item tracker and are
/// passed through to downstream correlation tooling untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserConfig {
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

/// Paths configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Parent folder whose immediate subdirectories are scanned for git
    /// working copies. When unset, the current directory is treated as the
    /// single candidate repository.
    pub repositories: Option<PathBuf>,
}

/// Git execution options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Run `git fetch origin` before querying branches, so freshly pushed
    /// remote branches are visible. Failures are non-fatal.
    pub fetch: bool,
    /// Per-command timeout in seconds. A hung git invocation (e.g. waiting on
    /// a credential prompt) is killed and treated as a per-repository failure.
    pub command_timeout_secs: u64,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            fetch: true,
            command_timeout_secs: 30,
        }
    }
}

impl GitConfig {
    /// The per-command timeout as a `Duration`.
    #[must_use]
    pub const fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }
}
