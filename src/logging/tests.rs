// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};
use tracing::Level;

#[test]
fn test_log_level_names_round_trip() {
    for name in LogLevel::NAMES {
        let level: LogLevel = name.parse().unwrap();
        assert_eq!(level.to_string(), name);
    }
}

#[test]
fn test_log_level_parse_is_case_insensitive() {
    assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
    assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warning);
}

#[test]
fn test_log_level_parse_invalid() {
    let err = "loud".parse::<LogLevel>().unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'level': expected one of emergency|alert|critical|error|warning|notice|info|debug|trace, got 'loud'"
    );
}

#[test]
fn test_severe_levels_collapse_to_error() {
    let levels: Vec<_> = [LogLevel::Emergency, LogLevel::Alert, LogLevel::Critical]
        .into_iter()
        .map(LogLevel::to_tracing_level)
        .collect();
    assert_eq!(levels, vec![Level::ERROR; 3]);
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = [
        LogLevel::Critical,
        LogLevel::Warning,
        LogLevel::Notice,
        LogLevel::Debug,
        LogLevel::Trace,
    ]
    .into_iter()
    .map(LogLevel::to_filter_string)
    .collect();
    assert_eq!(filters, ["error", "warn", "info", "debug", "trace"]);
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::Info);
    assert_eq!(config.file_level(), LogLevel::Debug);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}
