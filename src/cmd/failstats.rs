// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `failstats`: where one test fails.

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::{count_table, resolve_project};
use crate::cli::report::FailstatsArgs;
use crate::config::ClientSettings;
use crate::error::Result;
use crate::evergreen::EvergreenClient;
use crate::report::source::CiSource;
use crate::report::{FailureStats, failure_stats, fetch_revisions};

/// Main handler for the failstats command.
///
/// # Errors
///
/// Returns an error if no project can be resolved or any request fails.
pub async fn run_failstats_command(
    args: &FailstatsArgs,
    settings: &ClientSettings,
    cancel: &CancellationToken,
) -> Result<()> {
    let project = resolve_project(settings, args.project.as_deref())?;
    let client = EvergreenClient::from_settings(settings);
    debug!(endpoint = client.endpoint(), "querying Evergreen");

    let report = failstats_report(&client, &project, args, cancel).await?;
    print!("{report}");
    Ok(())
}

/// Fetch, count and render the failstats report.
///
/// # Errors
///
/// Returns an error if any request fails.
pub async fn failstats_report<S: CiSource + ?Sized>(
    source: &S,
    project: &str,
    args: &FailstatsArgs,
    cancel: &CancellationToken,
) -> Result<String> {
    info!(project, test = %args.test, versions = args.versions, "fetching mainline versions");

    let infos = fetch_revisions(source, project, args.versions, cancel)
        .await
        .context("error getting revision info")?;
    let stats = failure_stats(&infos, &args.test);

    if stats.is_empty() {
        warn!(test = %args.test, versions = infos.len(), "no failures found");
    }

    Ok(render_failstats(&stats))
}

/// `Count | Version`, `Count | Variant` and `Count | Task`, separated by
/// blank lines.
#[must_use]
pub fn render_failstats(stats: &FailureStats) -> String {
    [
        count_table("Version", &stats.versions),
        count_table("Variant", &stats.variants),
        count_table("Task", &stats.tasks),
    ]
    .iter()
    .map(|table| table.render())
    .collect::<Vec<_>>()
    .join("\n")
}
