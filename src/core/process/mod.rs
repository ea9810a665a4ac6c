// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and management.
//!
//! ```text
//! ProcessBuilder::new("git")
//!   .args() .cwd() .env() .capture_output() .timeout()
//!   .run()
//!       --> tokio::process::Command
//!           stream stdout/stderr
//!       --> ProcessOutput { exit_code, stdout, stderr }
//!
//! ProcessBuilder::from_line("grep -c foo | sort")
//!   shell metacharacters --> bash -c
//!   plain command line   --> tokenized argv (no shell)
//! ```

pub mod builder;
mod io;
mod runner;
#[cfg(test)]
mod tests;
