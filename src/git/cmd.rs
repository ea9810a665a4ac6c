// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command execution using the process layer.
//!
//! ```text
//! cmd.rs --> ProcessBuilder --> git (argv, no shell)
//! ```
//!
//! ALWAYS sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0` so a
//! credential prompt can never block a run. Command failure is data here,
//! not an error: callers read [`GitCapture::error_text`] and decide what a
//! non-zero exit means for their unit of work.

use std::ffi::OsStr;
use std::path::Path;
use std::time::Duration;

use crate::core::process::builder::{ProcessBuilder, ProcessFlags};
use crate::error::Result;

/// How far back "recent" reaches. A standup only needs to surface work since
/// the previous business day, not full branch history.
pub const LOOKBACK: &str = "16 hours ago";

/// Captured result of one git invocation.
#[derive(Debug, Clone, Default)]
pub struct GitCapture {
    /// Raw stdout text.
    pub stdout: String,
    /// Raw stderr text.
    pub stderr: String,
    /// Process exit code (-1 when killed, e.g. by timeout).
    pub exit_code: i32,
}

impl GitCapture {
    /// Returns true if the command exited with code 0.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Returns the failure note for this invocation, if any: trimmed stderr
    /// when present, otherwise a synthesized note for a silent non-zero exit.
    #[must_use]
    pub fn error_text(&self) -> Option<String> {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return Some(stderr.to_string());
        }
        if !self.success() {
            return Some(format!("git exited with code {}", self.exit_code));
        }
        None
    }
}

/// Runs a git command in the given working directory, capturing both output
/// streams.
///
/// # Errors
///
/// Returns an error only for spawn-level failures (git not installed, fork
/// failure). A non-zero exit is reported through [`GitCapture`], never as an
/// error.
pub async fn run_git<I, S>(args: I, cwd: &Path, timeout: Duration) -> Result<GitCapture>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = ProcessBuilder::which("git")?
        .args(args)
        .cwd(cwd)
        .env("GCM_INTERACTIVE", "never")
        .env("GIT_TERMINAL_PROMPT", "0")
        .capture_output()
        .flag(ProcessFlags::ALLOW_FAILURE)
        .timeout(timeout)
        .name("git")
        .run()
        .await?;

    Ok(GitCapture {
        stdout: output.stdout().to_string(),
        stderr: output.stderr().to_string(),
        exit_code: output.exit_code(),
    })
}

/// Reads a single `git config` value from a repository.
///
/// Returns `None` when the key is unset, the value is blank, or the command
/// fails; configuration lookups are always best-effort.
pub async fn config_value(repo: &Path, key: &str, timeout: Duration) -> Option<String> {
    let capture = run_git(["config", key], repo, timeout).await.ok()?;
    if !capture.success() {
        return None;
    }
    let value = capture.stdout.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
