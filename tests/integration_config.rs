// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations and layered
//! file sources.

use standup_rs::config::{Config, loader::ConfigLoader};
use std::path::PathBuf;

#[test]
fn config_parse_full_document() {
    let toml = r#"
[global]
output_log_level = 4
log_file = "standup.log"

[user]
git_author_name = "Alice Doe"
git_author_email = "alice@acme.com"
tracker_email = "alice@corp.example"

[paths]
repositories = "/srv/work"

[git]
fetch = false
command_timeout_secs = 10
"#;

    let config = Config::parse(toml).expect("valid config");
    assert_eq!(config.global.output_log_level.as_u8(), 4);
    assert_eq!(config.global.log_file, Some(PathBuf::from("standup.log")));
    assert_eq!(config.user.git_author_name.as_deref(), Some("Alice Doe"));
    assert_eq!(config.user.tracker_email.as_deref(), Some("alice@corp.example"));
    assert_eq!(config.paths.repositories, Some(PathBuf::from("/srv/work")));
    assert!(!config.git.fetch);
    assert_eq!(config.git.command_timeout_secs, 10);
}

#[test]
fn config_later_files_override_earlier_ones() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let base = temp.path().join("base.toml");
    let local = temp.path().join("local.toml");

    std::fs::write(
        &base,
        "[user]\ngit_author_email = \"team@acme.com\"\n\n[git]\nfetch = false\n",
    )
    .expect("failed to write base");
    std::fs::write(&local, "[user]\ngit_author_email = \"alice@acme.com\"\n")
        .expect("failed to write local");

    let config = ConfigLoader::new()
        .add_toml_file(&base)
        .add_toml_file(&local)
        .build()
        .expect("layered load should succeed");

    assert_eq!(
        config.user.git_author_email.as_deref(),
        Some("alice@acme.com"),
        "later file wins"
    );
    assert!(!config.git.fetch, "untouched keys fall through");
}

#[test]
fn config_missing_required_file_fails() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let missing = temp.path().join("nope.toml");

    let result = ConfigLoader::new().add_toml_file(&missing).build();
    assert!(result.is_err());
}

#[test]
fn config_missing_optional_file_yields_defaults() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let missing = temp.path().join("nope.toml");

    let config = ConfigLoader::new()
        .add_toml_file_optional(&missing)
        .build()
        .expect("optional file may be absent");

    assert!(config.user.git_author_email.is_none());
    assert!(config.git.fetch);
}

#[test]
fn config_loader_reports_loaded_files() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let base = temp.path().join("base.toml");
    std::fs::write(&base, "[git]\nfetch = false\n").expect("failed to write base");

    let loader = ConfigLoader::new()
        .add_toml_file(&base)
        .add_toml_file_optional(temp.path().join("absent.toml"));

    let files = loader.loaded_files();
    assert_eq!(files.len(), 1, "absent optional files are not listed");
    assert_eq!(files[0].0, "file");

    let formatted = loader.format_loaded_files();
    assert!(formatted[0].starts_with("1. [file] "));
}
