// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for standup-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. local standup.toml (cwd)
//! 3. --config FILE
//! 4. STANDUP_* env vars
//! 5. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! STANDUP_GIT__FETCH=false                  → git.fetch = false
//! STANDUP_USER__GIT_AUTHOR_EMAIL=a@b.com    → user.git_author_email = "a@b.com"
//! STANDUP_PATHS__REPOSITORIES=/srv/work     → paths.repositories = "/srv/work"
//! ```
//!
//! The assembled [`Config`] is passed explicitly into the command handlers;
//! nothing below the orchestrator reads the process environment directly.

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
pub use types::{GitConfig, GlobalConfig, PathsConfig, UserConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Reporting identity.
    pub user: UserConfig,
    /// Paths configuration.
    pub paths: PathsConfig,
    /// Git execution options.
    pub git: GitConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use standup_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("standup.toml")
    ///     .with_env_prefix("STANDUP")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display.
    ///
    /// Returns a vector of formatted strings representing all configuration
    /// options. Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let fmt_opt = |v: &Option<String>| v.clone().unwrap_or_default();

        let mut options = BTreeMap::new();
        options.insert(
            "global.output_log_level".to_string(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".to_string(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert(
            "user.git_author_name".to_string(),
            fmt_opt(&self.user.git_author_name),
        );
        options.insert(
            "user.git_author_email".to_string(),
            fmt_opt(&self.user.git_author_email),
        );
        options.insert("user.tracker_id".to_string(), fmt_opt(&self.user.tracker_id));
        options.insert(
            "user.tracker_email".to_string(),
            fmt_opt(&self.user.tracker_email),
        );
        options.insert(
            "user.tracker_display_name".to_string(),
            fmt_opt(&self.user.tracker_display_name),
        );
        options.insert(
            "paths.repositories".to_string(),
            self.paths
                .repositories
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("git.fetch".to_string(), self.git.fetch.to_string());
        options.insert(
            "git.command_timeout_secs".to_string(),
            self.git.command_timeout_secs.to_string(),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
