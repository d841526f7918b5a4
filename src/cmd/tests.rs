// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;
use std::io::Write;
use tokio_util::sync::CancellationToken;

use super::failstats::failstats_report;
use super::topfail::topfail_report;
use super::{count_table, load_settings, resolve_project};
use crate::cli::global::GlobalOptions;
use crate::cli::report::{FailstatsArgs, TopfailArgs};
use crate::config::ClientSettings;
use crate::report::fake::two_version_source;

fn topfail_args(limit: i64, show_summary: bool) -> TopfailArgs {
    TopfailArgs {
        project: None,
        versions: 6,
        limit,
        show_summary,
    }
}

#[tokio::test]
async fn test_topfail_report() {
    let source = two_version_source();
    let args = topfail_args(20, false);
    let report = topfail_report(&source, "proj", &args, &CancellationToken::new())
        .await
        .unwrap();

    assert!(report.starts_with('\n'));
    insta::assert_snapshot!(report.trim(), @r"
    Count  Test Name
    2      a
    2      c
    1      a/x
    1      d
    ");
}

#[tokio::test]
async fn test_topfail_report_with_summary() {
    let source = two_version_source();
    let report = topfail_report(&source, "proj", &topfail_args(1, true), &CancellationToken::new())
        .await
        .unwrap();

    insta::assert_snapshot!(report.trim(), @r"
    Count  Test Name
    2      a

    a
    Revision  Created           Count  Tasks
    rev1      2026-03-01 00:00  1      jsCore
    rev2      2026-03-01 00:00  1      jsCore
    ");
}

#[tokio::test]
async fn test_topfail_report_limit_smaller_than_ties() {
    let source = two_version_source();
    let report = topfail_report(&source, "proj", &topfail_args(3, false), &CancellationToken::new())
        .await
        .unwrap();
    // header + 3 rows after the leading blank line
    assert_eq!(report.trim().lines().count(), 4);
}

#[tokio::test]
async fn test_failstats_report() {
    let source = two_version_source();
    let args = FailstatsArgs {
        test: "a".to_string(),
        project: None,
        versions: 6,
    };
    let report = failstats_report(&source, "proj", &args, &CancellationToken::new())
        .await
        .unwrap();

    insta::assert_snapshot!(report, @r"
    Count  Version
    3      v1
    1      v2

    Count  Variant
    4      Linux

    Count  Task
    3      jsCore
    1      sharding
    ");
}

#[tokio::test]
async fn test_failstats_report_no_match_prints_headers() {
    let source = two_version_source();
    let args = FailstatsArgs {
        test: "nothing-matches".to_string(),
        project: None,
        versions: 6,
    };
    let report = failstats_report(&source, "proj", &args, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(report, "Count  Version\n\nCount  Variant\n\nCount  Task\n");
}

#[tokio::test]
async fn test_report_error_context() {
    let source = crate::report::fake::FakeSource {
        fail_samples: true,
        ..two_version_source()
    };
    let err = topfail_report(&source, "proj", &topfail_args(20, false), &CancellationToken::new())
        .await
        .unwrap_err();

    let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
    assert_eq!(chain[0], "error getting revision info");
    assert_eq!(chain[1], "error querying taskTestSample for v1");
}

#[test]
fn test_count_table_ranks() {
    let counts = BTreeMap::from([
        ("b".to_string(), 1),
        ("a".to_string(), 1),
        ("z".to_string(), 9),
    ]);
    insta::assert_snapshot!(count_table("Task", &counts).render(), @r"
    Count  Task
    9      z
    1      a
    1      b
    ");
}

#[test]
fn test_resolve_project_explicit_skips_lookup() {
    let settings = ClientSettings::default();
    assert_eq!(resolve_project(&settings, Some("p")).unwrap(), "p");
}

#[test]
fn test_load_settings_from_conf() {
    let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
    writeln!(
        file,
        "user: jdoe\napi_key: secret\nprojects:\n  - name: mongo\n    default: true"
    )
    .unwrap();

    let global = GlobalOptions {
        conf: Some(file.path().to_path_buf()),
        ..GlobalOptions::default()
    };
    let settings = load_settings(&global).unwrap();

    assert_eq!(settings.user, "jdoe");
    assert_eq!(settings.find_default_project(std::path::Path::new("/nowhere")), Some("mongo"));
}

#[test]
fn test_load_settings_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let global = GlobalOptions {
        conf: Some(dir.path().join("absent.yml")),
        ..GlobalOptions::default()
    };
    let err = load_settings(&global).unwrap_err();
    assert_eq!(err.to_string(), "error loading configuration");
}
