// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! I/O streaming and output capture for processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks
//!   mpsc channels buffer lines
//!   wait (or timeout --> kill)
//!   --> ProcessOutput { stdout, stderr, exit_code }
//! ```

use crate::error::StandupResult;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, ChildStderr, ChildStdout};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};

/// Configuration for spawning a stream reader task.
struct StreamReaderConfig {
    flags: StreamFlags,
    process_name: String,
}

/// Spawns a reader task for stdout if needed.
fn spawn_stdout_reader(
    stdout: Option<ChildStdout>,
    config: &StreamReaderConfig,
    tx: mpsc::Sender<String>,
) -> Option<JoinHandle<()>> {
    if !config
        .flags
        .intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING)
    {
        return None;
    }
    stdout.map(|stdout| {
        let flags = config.flags;
        let name = config.process_name.clone();
        tokio::spawn(async move {
            read_stream(stdout, flags, &name, "stdout", tx).await;
        })
    })
}

/// Spawns a reader task for stderr if needed.
fn spawn_stderr_reader(
    stderr: Option<ChildStderr>,
    config: &StreamReaderConfig,
    tx: mpsc::Sender<String>,
) -> Option<JoinHandle<()>> {
    if !config
        .flags
        .intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING)
    {
        return None;
    }
    stderr.map(|stderr| {
        let flags = config.flags;
        let name = config.process_name.clone();
        tokio::spawn(async move {
            read_stream(stderr, flags, &name, "stderr", tx).await;
        })
    })
}

/// Collects output from a channel into a string.
fn collect_output(rx: &mut mpsc::Receiver<String>, flags: StreamFlags) -> String {
    if !flags.contains(StreamFlags::KEEP_IN_STRING) {
        return String::new();
    }
    let mut output = String::new();
    while let Ok(line) = rx.try_recv() {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&line);
    }
    output
}

/// Waits for reader tasks to complete.
async fn await_readers(
    stdout_handle: Option<JoinHandle<()>>,
    stderr_handle: Option<JoinHandle<()>>,
) {
    if let Some(handle) = stdout_handle {
        let _ = handle.await;
    }
    if let Some(handle) = stderr_handle {
        let _ = handle.await;
    }
}

impl ProcessBuilder {
    /// Runs the child process, handling I/O streaming and waiting for completion.
    pub(super) async fn run_child(
        &self,
        name: &str,
        child: &mut Child,
    ) -> StandupResult<ProcessOutput> {
        let (stdout_tx, mut stdout_rx) = mpsc::channel::<String>(100);
        let (stderr_tx, mut stderr_rx) = mpsc::channel::<String>(100);

        let stdout_config = StreamReaderConfig {
            flags: self.stdout_flags_value(),
            process_name: name.to_string(),
        };
        let stderr_config = StreamReaderConfig {
            flags: self.stderr_flags_value(),
            process_name: name.to_string(),
        };

        let stdout_handle = spawn_stdout_reader(child.stdout.take(), &stdout_config, stdout_tx);
        let stderr_handle = spawn_stderr_reader(child.stderr.take(), &stderr_config, stderr_tx);

        let exit_status = if let Some(timeout_duration) = self.timeout_duration() {
            tokio::select! {
                status = child.wait() => status?,
                () = tokio::time::sleep(timeout_duration) => {
                    warn!(process = %name, timeout = ?timeout_duration, "Process timed out");
                    child.kill().await?;
                    child.wait().await?
                }
            }
        } else {
            child.wait().await?
        };

        await_readers(stdout_handle, stderr_handle).await;

        Ok(ProcessOutput::new(
            exit_status.code().unwrap_or(-1),
            collect_output(&mut stdout_rx, self.stdout_flags_value()),
            collect_output(&mut stderr_rx, self.stderr_flags_value()),
        ))
    }
}

/// Reads UTF-8 lines from a stream and forwards/buffers them per flags.
async fn read_stream<R>(
    reader: R,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &str,
    tx: mpsc::Sender<String>,
) where
    R: tokio::io::AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if flags.contains(StreamFlags::FORWARD_TO_LOG) {
            trace!(process = %process_name, stream = %stream_name, line = %line, "output");
        }
        if flags.contains(StreamFlags::KEEP_IN_STRING) {
            let _ = tx.send(line).await;
        }
    }
}
