// standup-rs: Daily Standup Draft Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(5).is_ok());
    assert!(LogLevel::new(6).is_err());
    assert!(LogLevel::from_u8(7).is_none());
    assert_eq!(LogLevel::from_u8(2), Some(LogLevel::WARN));
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=5)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    assert_eq!(filters, ["off", "error", "warn", "info", "debug", "trace"]);
}

#[test]
fn test_log_level_serde_round_trip() {
    let json = serde_json::to_string(&LogLevel::DEBUG).expect("serialize");
    assert_eq!(json, "4");
    let level: LogLevel = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(level, LogLevel::DEBUG);

    let out_of_range: Result<LogLevel, _> = serde_json::from_str("9");
    assert!(out_of_range.is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}
