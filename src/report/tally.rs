// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Counting failures across revisions.

use std::collections::BTreeMap;

use super::RevisionInfo;
use super::filter::filter_tests;

/// Failures of one test across the fetched revisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedTest {
    pub test: String,
    pub total_failures: usize,
    /// Revision -> tasks the test failed in. The failure count for a revision
    /// is the length of its task list.
    pub failed_tasks_per_revision: BTreeMap<String, Vec<String>>,
}

impl FailedTest {
    fn new(test: &str) -> Self {
        Self {
            test: test.to_string(),
            total_failures: 0,
            failed_tasks_per_revision: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn failures_in(&self, revision: &str) -> usize {
        self.failed_tasks_per_revision
            .get(revision)
            .map_or(0, Vec::len)
    }
}

/// Every failing test, prefix-filtered per task, most failures first.
///
/// Ties are ordered by test name.
#[must_use]
pub fn tally_failed_tests(infos: &[RevisionInfo]) -> Vec<FailedTest> {
    let mut by_name: BTreeMap<String, FailedTest> = BTreeMap::new();

    for info in infos {
        for variant in &info.failed_variants {
            for task in &variant.failed_tasks {
                for test in filter_tests(&task.failed_tests) {
                    let entry = by_name
                        .entry(test)
                        .or_insert_with_key(|name| FailedTest::new(name));
                    entry.total_failures += 1;
                    entry
                        .failed_tasks_per_revision
                        .entry(info.revision.clone())
                        .or_default()
                        .push(task.task.clone());
                }
            }
        }
    }

    let mut tests: Vec<FailedTest> = by_name.into_values().collect();
    // stable: equal counts keep name order from the map
    tests.sort_by(|a, b| b.total_failures.cmp(&a.total_failures));
    tests
}

/// Keep the first `limit` items; `limit <= 0` keeps everything.
#[must_use]
pub fn apply_limit<T>(mut items: Vec<T>, limit: i64) -> Vec<T> {
    if let Ok(limit) = usize::try_from(limit)
        && limit > 0
    {
        items.truncate(limit);
    }
    items
}

/// The `limit` most frequently failing tests.
#[must_use]
pub fn top_failures(infos: &[RevisionInfo], limit: i64) -> Vec<FailedTest> {
    apply_limit(tally_failed_tests(infos), limit)
}

/// Failure counts for one test, keyed three ways.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureStats {
    /// Version id -> failures.
    pub versions: BTreeMap<String, usize>,
    /// Build variant display name -> failures.
    pub variants: BTreeMap<String, usize>,
    /// Task display name -> failures.
    pub tasks: BTreeMap<String, usize>,
}

impl FailureStats {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

/// Count failures of every test whose name contains `test_name`.
///
/// Names are matched as substrings and are not prefix-filtered, so a parent
/// and its children all count.
#[must_use]
pub fn failure_stats(infos: &[RevisionInfo], test_name: &str) -> FailureStats {
    let mut stats = FailureStats::default();

    for info in infos {
        for variant in &info.failed_variants {
            for task in &variant.failed_tasks {
                let matches = task
                    .failed_tests
                    .iter()
                    .filter(|t| t.contains(test_name))
                    .count();
                if matches == 0 {
                    continue;
                }
                *stats.versions.entry(info.version_id.clone()).or_default() += matches;
                *stats
                    .variants
                    .entry(variant.display_name.clone())
                    .or_default() += matches;
                *stats.tasks.entry(task.task.clone()).or_default() += matches;
            }
        }
    }

    stats
}

/// Entries by descending count, ties by key.
#[must_use]
pub fn ranked(counts: &BTreeMap<String, usize>) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}
