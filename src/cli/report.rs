// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the report commands.
//!
//! ```text
//! $ evergreen-test topfail -p mongodb-mongo-master --versions 10 --limit 50
//! $ evergreen-test topfail --show-summary
//! $ evergreen-test failstats -n jstests/core/txns/foo.js -l 20
//! ```

use clap::Args;

/// Arguments for the `topfail` command.
#[derive(Debug, Clone, Args)]
pub struct TopfailArgs {
    /// Project identifier; defaults to the project configured for the cwd.
    #[arg(short = 'p', long, value_name = "PROJECT")]
    pub project: Option<String>,

    /// Number of mainline versions to look at.
    #[arg(long, value_name = "N", default_value_t = 6)]
    pub versions: u32,

    /// Maximum number of tests to list; 0 or less lists all.
    #[arg(long, value_name = "K", default_value_t = 20, allow_negative_numbers = true)]
    pub limit: i64,

    /// Also print per-revision failure counts and tasks for each test.
    #[arg(long)]
    pub show_summary: bool,
}

/// Arguments for the `failstats` command.
#[derive(Debug, Clone, Args)]
pub struct FailstatsArgs {
    /// Test name, matched as a substring.
    #[arg(short = 'n', long = "test", value_name = "NAME")]
    pub test: String,

    /// Project identifier; defaults to the project configured for the cwd.
    #[arg(short = 'p', long, value_name = "PROJECT")]
    pub project: Option<String>,

    /// Number of mainline versions to look at.
    #[arg(short = 'l', long, value_name = "N", default_value_t = 6)]
    pub versions: u32,
}
