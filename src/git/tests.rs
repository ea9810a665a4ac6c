// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::GitConfig;
use crate::error::StandupError;

use super::branches::collect_branch_names;
use super::discovery::{discover_repositories, is_git_repo};
use super::parse::{
    extract_card_number, is_relevant_branch, parse_commit_details, process_branch_data,
};
use super::remote::{UNKNOWN_PROJECT, extract_project_name, project_name};

fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Initialize a git repository without commits.
fn init_test_repo(path: &Path) {
    let output = std::process::Command::new("git")
        .args(["init", "--quiet", "-b", "main"])
        .current_dir(path)
        .output()
        .expect("failed to run git init");
    assert!(
        output.status.success(),
        "git init failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

// =============================================================================
// Project name extraction
// =============================================================================

#[test]
fn test_extract_project_name_https() {
    insta::assert_snapshot!(
        extract_project_name("https://github.com/acme/billing-service.git"),
        @"billing-service"
    );
}

#[test]
fn test_extract_project_name_azure_devops() {
    insta::assert_snapshot!(
        extract_project_name("https://dev.azure.com/org/Project/_git/Repository"),
        @"Repository"
    );
}

#[test]
fn test_extract_project_name_ssh() {
    insta::assert_snapshot!(
        extract_project_name("git@github.com:acme/billing-service.git"),
        @"billing-service"
    );
}

#[test]
fn test_extract_project_name_ssh_without_path_separator() {
    insta::assert_snapshot!(extract_project_name("git@host:repo"), @"repo");
}

#[test]
fn test_extract_project_name_trailing_slash() {
    insta::assert_snapshot!(
        extract_project_name("https://github.com/acme/billing-service/"),
        @"billing-service"
    );
}

#[test]
fn test_extract_project_name_empty() {
    assert_eq!(extract_project_name(""), UNKNOWN_PROJECT);
}

// =============================================================================
// Branch name collection and dedup
// =============================================================================

#[test]
fn test_collect_branch_names_strips_decorations() {
    let output = "HEAD -> feature/1234-login, origin/feature/1234-login\n\
                  tag: v1.2.0\n\
                  fix/77-null-check\n";
    let branches = collect_branch_names(output);
    assert_eq!(
        branches,
        ["feature/1234-login", "fix/77-null-check", "tag: v1.2.0"]
    );
}

#[test]
fn test_collect_branch_names_drops_trunks_and_empties() {
    let output = "master\ndev\nsprint\n\nfeature/9-x\norigin/master\nmaster-backup\n";
    let branches = collect_branch_names(output);
    assert_eq!(branches, ["feature/9-x"]);
}

#[test]
fn test_collect_branch_names_dedups_local_over_remote() {
    let output = "foo\norigin/foo\norigin/bar\n";
    let branches = collect_branch_names(output);
    assert_eq!(branches, ["foo", "origin/bar"]);
}

#[test]
fn test_collect_branch_names_is_idempotent() {
    let output = "foo\norigin/foo\nfoo\norigin/foo\n";
    let branches = collect_branch_names(output);
    assert_eq!(branches, ["foo"]);
}

#[test]
fn test_collect_branch_names_empty_input() {
    assert!(collect_branch_names("").is_empty());
}

// =============================================================================
// Card number extraction
// =============================================================================

#[test]
fn test_extract_card_number_cases() {
    assert_eq!(extract_card_number("feature/1234-login"), "1234");
    assert_eq!(extract_card_number("hotfix/x"), "");
    assert_eq!(extract_card_number("release/2-v3"), "2");
    assert_eq!(extract_card_number("42"), "42");
    assert_eq!(extract_card_number(""), "");
}

// =============================================================================
// Commit block parsing
// =============================================================================

#[test]
fn test_parse_commit_details_two_blocks() {
    let raw = "---\n[branch-a]\nfix bug\nmore detail\n---\n[branch-a]\nadd feature\n";
    let messages = parse_commit_details(raw);
    assert_eq!(messages, ["fix bug\nmore detail", "add feature"]);
}

#[test]
fn test_parse_commit_details_drops_blank_body_lines() {
    let raw = "---\n[b]\nsubject line\n\nbody after blank\n\n";
    let messages = parse_commit_details(raw);
    assert_eq!(messages, ["subject line\nbody after blank"]);
}

#[test]
fn test_parse_commit_details_no_blocks() {
    assert!(parse_commit_details("").is_empty());
    assert!(parse_commit_details("stray text\nwithout markers\n").is_empty());
}

#[test]
fn test_parse_commit_details_skips_marker_line_only_once() {
    // Only the first line after each delimiter is the marker
    let raw = "---\n[branch]\n[not-a-marker]\nreal body\n";
    let messages = parse_commit_details(raw);
    assert_eq!(messages, ["[not-a-marker]\nreal body"]);
}

// =============================================================================
// Branch relevance filtering
// =============================================================================

#[test]
fn test_is_relevant_branch_excludes_integration_branches() {
    for name in ["main", "Main", "MASTER", "dev", "DEV"] {
        assert!(!is_relevant_branch(name), "{name} should be excluded");
    }
    for name in [
        "sprint/x",
        "Sprint/x",
        "release/1.2",
        "RELEASE/1.2",
        "hotfix/77",
    ] {
        assert!(!is_relevant_branch(name), "{name} should be excluded");
    }
    for name in ["feature/1234-login", "fix/9", "develop", "mainline"] {
        assert!(is_relevant_branch(name), "{name} should be kept");
    }
}

// =============================================================================
// Branch data processing
// =============================================================================

#[test]
fn test_process_branch_data_builds_activity_records() {
    let branches = vec![
        "feature/5501-refund-flow".to_string(),
        "sprint/42".to_string(),
    ];
    let mut details = BTreeMap::new();
    details.insert(
        "feature/5501-refund-flow".to_string(),
        "---\n[feature/5501-refund-flow]\nHandle partial refunds\n---\n[feature/5501-refund-flow]\nAdd refund endpoint\n"
            .to_string(),
    );
    details.insert(
        "sprint/42".to_string(),
        "---\n[sprint/42]\nsprint housekeeping\n".to_string(),
    );

    let processed = process_branch_data(&branches, &details);

    assert_eq!(processed.len(), 1);
    assert_eq!(processed[0].branch_name, "feature/5501-refund-flow");
    assert_eq!(processed[0].card_number, "5501");
    assert_eq!(
        processed[0].commit_messages,
        ["Handle partial refunds", "Add refund endpoint"]
    );
}

#[test]
fn test_process_branch_data_drops_branches_without_messages() {
    let branches = vec![
        "feature/1-no-details".to_string(),
        "feature/2-empty-details".to_string(),
    ];
    let mut details = BTreeMap::new();
    details.insert("feature/2-empty-details".to_string(), "noise\n".to_string());

    let processed = process_branch_data(&branches, &details);
    assert!(processed.is_empty());
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn test_discover_repositories_finds_git_dirs() {
    let temp = temp_dir();
    let parent = temp.path();

    let repo_a = parent.join("billing-service");
    let repo_b = parent.join("infra-scripts");
    let plain = parent.join("notes");
    let hidden = parent.join(".cache");
    for dir in [&repo_a, &repo_b, &plain, &hidden] {
        std::fs::create_dir_all(dir).expect("failed to create dir");
    }
    init_test_repo(&repo_a);
    init_test_repo(&repo_b);
    init_test_repo(&hidden);

    let repos = discover_repositories(parent).expect("discovery should succeed");
    let names: Vec<_> = repos
        .iter()
        .filter_map(|p| p.file_name())
        .filter_map(|n| n.to_str())
        .collect();
    assert_eq!(names, ["billing-service", "infra-scripts"]);

    assert!(is_git_repo(&repo_a));
    assert!(!is_git_repo(&plain));
}

#[test]
fn test_discover_repositories_missing_folder_is_fatal() {
    let temp = temp_dir();
    let missing = temp.path().join("does_not_exist");

    let result = discover_repositories(&missing);
    let err = result.expect_err("missing folder should be an error");
    assert!(matches!(err, StandupError::Discovery(_)), "{err:?}");
}

#[test]
fn test_discover_repositories_empty_folder_is_valid() {
    let temp = temp_dir();
    let repos = discover_repositories(temp.path()).expect("empty folder should succeed");
    assert!(repos.is_empty());
}

// =============================================================================
// Remote resolution against a real repository
// =============================================================================

#[tokio::test]
async fn test_project_name_without_remote_uses_placeholder() {
    let temp = temp_dir();
    init_test_repo(temp.path());

    let git = GitConfig::default();
    let project = project_name(temp.path(), &git)
        .await
        .expect("project name resolution should not fail the pipeline");

    assert_eq!(project.name, UNKNOWN_PROJECT);
    assert!(project.error.is_some(), "missing remote should carry a note");
}
