// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Failure reports over recent mainline versions.
//!
//! ```text
//! fetch_revisions(&impl CiSource)
//!   mainlineCommits            1 request
//!   taskTestSample             1 request per (version, build variant)
//!        |
//!        v
//! Vec<RevisionInfo>
//!   RevisionInfo  version, revision, created, message
//!     VariantInfo   build variant display name
//!       TaskInfo      task display name, failing test names
//!        |
//!        +--> tally::top_failures   (prefix-filtered, ranked, limited)
//!        +--> tally::failure_stats  (one test, by version/variant/task)
//!        |
//!        v
//! table::Table --> stdout
//! ```

pub mod filter;
pub mod source;
pub mod table;
pub mod tally;

#[cfg(test)]
pub(crate) mod fake;

use anyhow::Context;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{EvgResult, NetworkError, Result};
use source::CiSource;

pub use filter::filter_tests;
pub use table::Table;
pub use tally::{FailedTest, FailureStats, failure_stats, top_failures};

/// One mainline version and what failed in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionInfo {
    pub version_id: String,
    pub created: DateTime<Utc>,
    pub revision: String,
    pub message: String,
    pub failed_variants: Vec<VariantInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantInfo {
    pub display_name: String,
    pub failed_tasks: Vec<TaskInfo>,
}

/// A failed task and its failing test names, unfiltered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInfo {
    pub task: String,
    pub failed_tests: Vec<String>,
}

fn check_cancelled(cancel: &CancellationToken) -> EvgResult<()> {
    if cancel.is_cancelled() {
        return Err(NetworkError::Interrupted.into());
    }
    Ok(())
}

/// Fetch the last `versions` mainline versions of `project_id` with their
/// failed variants, tasks and test names.
///
/// Rolled-up versions (no `version` payload) are skipped. Requests are sent
/// one at a time; `cancel` is checked before each.
///
/// # Errors
///
/// Returns an error if any request fails or `cancel` fires. No partial
/// result is returned.
pub async fn fetch_revisions<S: CiSource + ?Sized>(
    source: &S,
    project_id: &str,
    versions: u32,
    cancel: &CancellationToken,
) -> Result<Vec<RevisionInfo>> {
    check_cancelled(cancel).context("error querying mainlineCommits")?;
    let commits = source
        .mainline_commits(project_id, versions)
        .await
        .context("error querying mainlineCommits")?;

    debug!(
        project = project_id,
        versions = commits.versions.len(),
        "mainline commits received"
    );

    let mut infos = Vec::with_capacity(commits.versions.len());

    for version in commits.versions.into_iter().filter_map(|entry| entry.version) {
        let mut failed_variants = Vec::with_capacity(version.build_variants.len());

        for variant in &version.build_variants {
            // id -> display name; also dedups and sorts the ids
            let task_names: BTreeMap<&str, &str> = variant
                .tasks
                .iter()
                .map(|t| (t.id.as_str(), t.display_name.as_str()))
                .collect();

            if task_names.is_empty() {
                failed_variants.push(VariantInfo {
                    display_name: variant.display_name.clone(),
                    failed_tasks: Vec::new(),
                });
                continue;
            }

            let task_ids: Vec<String> = task_names.keys().map(|id| (*id).to_string()).collect();

            debug!(
                version_id = %version.id,
                variant = %variant.display_name,
                task_ids = ?task_ids,
                "fetching failing tests"
            );

            check_cancelled(cancel)
                .with_context(|| format!("error querying taskTestSample for {}", version.id))?;
            let samples = source
                .task_test_sample(&version.id, &task_ids)
                .await
                .with_context(|| format!("error querying taskTestSample for {}", version.id))?;

            let failed_tasks = samples
                .into_iter()
                .map(|sample| {
                    let task = task_names.get(sample.task_id.as_str()).map_or_else(
                        || {
                            warn!(
                                version_id = %version.id,
                                task_id = %sample.task_id,
                                "sample for unknown task id"
                            );
                            sample.task_id.clone()
                        },
                        |name| (*name).to_string(),
                    );

                    for test in &sample.matching_failed_test_names {
                        debug!(
                            version_id = %version.id,
                            task = %task,
                            test = %test,
                            "failing test"
                        );
                    }

                    TaskInfo {
                        task,
                        failed_tests: sample.matching_failed_test_names,
                    }
                })
                .collect();

            failed_variants.push(VariantInfo {
                display_name: variant.display_name.clone(),
                failed_tasks,
            });
        }

        infos.push(RevisionInfo {
            version_id: version.id,
            created: version.create_time,
            revision: version.revision,
            message: version.message,
            failed_variants,
        });
    }

    Ok(infos)
}
