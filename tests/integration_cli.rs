// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use standup_rs::cli::{Cli, Command};
use std::path::PathBuf;

#[test]
fn cli_report_with_globals_and_flags() {
    let cli = Cli::try_parse_from([
        "standup",
        "--config",
        "team.toml",
        "--log-level",
        "4",
        "report",
        "--folder",
        "/srv/work",
        "--author-email",
        "alice@acme.com",
        "--no-fetch",
    ])
    .expect("valid args");

    assert_eq!(cli.global.configs, [PathBuf::from("team.toml")]);
    assert_eq!(cli.global.log_level, Some(4));

    let Some(Command::Report(args)) = cli.command else {
        panic!("expected report command");
    };
    assert_eq!(args.folder, Some(PathBuf::from("/srv/work")));
    assert_eq!(args.author_email.as_deref(), Some("alice@acme.com"));
    assert!(args.no_fetch);
}

#[test]
fn cli_repos_without_folder() {
    let cli = Cli::try_parse_from(["standup", "repos"]).expect("valid args");
    let Some(Command::Repos(args)) = cli.command else {
        panic!("expected repos command");
    };
    assert!(args.folder.is_none());
}

#[test]
fn cli_repeated_config_files_accumulate() {
    let cli = Cli::try_parse_from(["standup", "-c", "a.toml", "-c", "b.toml", "options"])
        .expect("valid args");
    assert_eq!(
        cli.global.configs,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert!(matches!(cli.command, Some(Command::Options)));
}

#[test]
fn cli_no_command_is_allowed_by_parser() {
    // Dispatch rejects it at runtime; the parser itself accepts bare globals
    let cli = Cli::try_parse_from(["standup", "--log-level", "2"]).expect("valid args");
    assert!(cli.command.is_none());
}

#[test]
fn cli_unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["standup", "publish"]).is_err());
}
