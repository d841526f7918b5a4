// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `topfail`: the most frequently failing tests.

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::resolve_project;
use crate::cli::report::TopfailArgs;
use crate::config::ClientSettings;
use crate::error::Result;
use crate::evergreen::EvergreenClient;
use crate::report::source::CiSource;
use crate::report::{FailedTest, RevisionInfo, Table, fetch_revisions, top_failures};

/// Main handler for the topfail command.
///
/// # Errors
///
/// Returns an error if no project can be resolved or any request fails.
pub async fn run_topfail_command(
    args: &TopfailArgs,
    settings: &ClientSettings,
    cancel: &CancellationToken,
) -> Result<()> {
    let project = resolve_project(settings, args.project.as_deref())?;
    let client = EvergreenClient::from_settings(settings);
    debug!(endpoint = client.endpoint(), "querying Evergreen");

    let report = topfail_report(&client, &project, args, cancel).await?;
    print!("{report}");
    Ok(())
}

/// Fetch, tally and render the topfail report.
///
/// # Errors
///
/// Returns an error if any request fails.
pub async fn topfail_report<S: CiSource + ?Sized>(
    source: &S,
    project: &str,
    args: &TopfailArgs,
    cancel: &CancellationToken,
) -> Result<String> {
    info!(project, versions = args.versions, "fetching mainline versions");

    let infos = fetch_revisions(source, project, args.versions, cancel)
        .await
        .context("error getting revision info")?;
    let top = top_failures(&infos, args.limit);

    info!(
        versions = infos.len(),
        tests = top.len(),
        "failing tests tallied"
    );

    Ok(render_topfail(&infos, &top, args.show_summary))
}

/// A blank line, then `Count | Test Name`; with `show_summary`, one
/// per-revision table per test after that.
#[must_use]
pub fn render_topfail(infos: &[RevisionInfo], top: &[FailedTest], show_summary: bool) -> String {
    let mut table = Table::new(["Count", "Test Name"]);
    for test in top {
        table.add_row([test.total_failures.to_string(), test.test.clone()]);
    }

    let mut out = String::from("\n");
    out.push_str(&table.render());

    if show_summary {
        for test in top {
            out.push('\n');
            out.push_str(&test.test);
            out.push('\n');
            out.push_str(&revision_summary(infos, test).render());
        }
    }

    out
}

/// Failures of `test` per revision, in fetch order (newest first).
fn revision_summary(infos: &[RevisionInfo], test: &FailedTest) -> Table {
    let mut table = Table::new(["Revision", "Created", "Count", "Tasks"]);
    for info in infos {
        let Some(tasks) = test.failed_tasks_per_revision.get(&info.revision) else {
            continue;
        };
        table.add_row([
            short_revision(&info.revision).to_string(),
            info.created.format("%Y-%m-%d %H:%M").to_string(),
            tasks.len().to_string(),
            tasks.join(", "),
        ]);
    }
    table
}

fn short_revision(revision: &str) -> &str {
    revision
        .char_indices()
        .nth(7)
        .map_or(revision, |(idx, _)| &revision[..idx])
}
