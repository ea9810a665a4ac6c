// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            StandupError (~24 bytes)
//!                    |
//!      +--------+----+----+---------+
//!      |        |         |         |
//!      v        v         v         v
//!    Bail    Config   Discovery  Process   Io
//!            Box      Box        Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Config     InvalidValue
//!   Discovery  FolderNotFound, ReadDir
//!   Process    ExecutableNotFound, SpawnFailed, NonZeroExit
//!
//! All variants boxed => StandupError fits in 24 bytes.
//! ```
//!
//! Git command failures are deliberately NOT errors: the extraction pipeline
//! captures exit code and stderr as data and decides per repository whether
//! to skip. Only spawn-level failures surface as `ProcessError`.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`StandupError`].
pub type StandupResult<T> = std::result::Result<T, StandupError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum StandupError {
    /// Fatal input error that should terminate the run.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Repository discovery error.
    #[error("discovery error: {0}")]
    Discovery(#[from] Box<DiscoveryError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Create a fatal [`StandupError::Bailed`] that terminates the run.
pub fn bail_out(message: impl Into<String>) -> StandupError {
    StandupError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for StandupError {
                fn from(err: $error) -> Self {
                    StandupError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    DiscoveryError => Discovery,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Discovery Errors ---

/// Repository discovery errors.
///
/// These are the only fatal failures of the scan stage: a missing parent
/// folder means the run has nothing to work with (empty folders are fine).
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Declared repositories folder does not exist.
    #[error("repositories folder not found: {path}")]
    FolderNotFound { path: String },

    /// Failed to enumerate the repositories folder.
    #[error("failed to read folder '{path}': {source}")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}
