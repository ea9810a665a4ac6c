// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use super::builder::{ProcessBuilder, ProcessFlags, split_command_line};

#[test]
fn test_split_command_line_plain() {
    let tokens = split_command_line("git log --all --format=%D");
    assert_eq!(tokens, ["git", "log", "--all", "--format=%D"]);
}

#[test]
fn test_split_command_line_quoted() {
    let tokens = split_command_line(r#"git log --author="Alice Doe" --format=%D"#);
    assert_eq!(tokens, ["git", "log", "--author=Alice Doe", "--format=%D"]);
}

#[test]
fn test_split_command_line_collapses_spaces() {
    let tokens = split_command_line("git   status ");
    assert_eq!(tokens, ["git", "status"]);
}

#[test]
fn test_from_line_tokenizes_plain_commands() {
    let builder = ProcessBuilder::from_line("git remote get-url origin");
    assert_eq!(builder.program().to_string_lossy(), "git");
}

#[cfg(not(windows))]
#[test]
fn test_from_line_routes_pipelines_through_shell() {
    let builder = ProcessBuilder::from_line("git log --format=%D | sort -u");
    assert_eq!(builder.program().to_string_lossy(), "bash");
}

#[tokio::test]
async fn test_process_echo() {
    // Use Write-Output in PowerShell, echo in Unix shell
    #[cfg(windows)]
    let output = ProcessBuilder::raw("Write-Output 'hello'")
        .capture_output()
        .run()
        .await
        .expect("echo should succeed");

    #[cfg(not(windows))]
    let output = ProcessBuilder::new("echo")
        .arg("hello")
        .capture_output()
        .run()
        .await
        .expect("echo should succeed");

    assert!(output.success());
    insta::assert_snapshot!(output.stdout().trim(), @"hello");
}

#[tokio::test]
async fn test_process_exit_code_allowed() {
    let output = ProcessBuilder::raw("exit 42")
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await
        .expect("process should complete");

    assert_eq!(output.exit_code(), 42);
    assert!(!output.success());
}

#[tokio::test]
async fn test_process_exit_code_rejected() {
    let result = ProcessBuilder::raw("exit 3").run().await;
    let err = result.expect_err("non-zero exit should error without ALLOW_FAILURE");
    assert!(err.to_string().contains("exited with code 3"), "{err}");
}

#[tokio::test]
async fn test_process_env() {
    // PowerShell uses $env:VAR syntax, Unix uses $VAR
    #[cfg(windows)]
    let output = ProcessBuilder::raw("Write-Output $env:TEST_VAR")
        .env("TEST_VAR", "test_value")
        .capture_stdout()
        .run()
        .await
        .expect("process should succeed");

    #[cfg(not(windows))]
    let output = ProcessBuilder::raw("echo $TEST_VAR")
        .env("TEST_VAR", "test_value")
        .capture_stdout()
        .run()
        .await
        .expect("process should succeed");

    insta::assert_snapshot!(output.stdout().trim(), @"test_value");
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_timeout_kills_child() {
    let output = ProcessBuilder::new("sleep")
        .arg("30")
        .flag(ProcessFlags::ALLOW_FAILURE)
        .timeout(Duration::from_millis(200))
        .run()
        .await
        .expect("timed-out process should still yield output");

    assert!(!output.success(), "killed process must not report success");
}

#[test]
fn test_executable_lookup_found() {
    // cargo should always be available since we're running tests with cargo
    let which_result = ProcessBuilder::which("cargo");
    assert!(which_result.is_ok(), "which: cargo should be found in PATH");
    let builder = which_result.expect("checked above");
    assert!(
        builder.program().exists(),
        "which: returned program path should exist"
    );

    let find_result = ProcessBuilder::find("cargo");
    assert!(find_result.is_some(), "find: cargo should be found");
}

#[test]
fn test_executable_lookup_not_found() {
    let program = "nonexistent_program_12345";

    let which_result = ProcessBuilder::which(program);
    assert!(
        which_result.is_err(),
        "which: nonexistent program should not be found"
    );
    let err_msg = format!("{}", which_result.expect_err("checked above"));
    assert!(
        err_msg.contains("not found") || err_msg.contains(program),
        "which: error should mention the program: {err_msg}"
    );

    assert!(
        ProcessBuilder::find(program).is_none(),
        "find: nonexistent program should return None"
    );
}
