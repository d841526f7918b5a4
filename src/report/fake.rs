// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory [`CiSource`] and fixtures for tests.

use futures_util::future::BoxFuture;
use std::collections::HashMap;
use std::sync::Mutex;

use super::source::CiSource;
use crate::error::{EvgResult, NetworkError};
use crate::evergreen::types::{
    BuildVariant, MainlineCommitVersion, MainlineCommits, TaskSummary, TaskTestSample, Version,
};

pub(crate) fn task(id: &str, name: &str) -> TaskSummary {
    TaskSummary {
        id: id.to_string(),
        display_name: name.to_string(),
        execution: 0,
        status: "failed".to_string(),
    }
}

pub(crate) fn version(
    id: &str,
    revision: &str,
    variants: Vec<BuildVariant>,
) -> MainlineCommitVersion {
    MainlineCommitVersion {
        version: Some(Version {
            id: id.to_string(),
            revision: revision.to_string(),
            message: format!("commit {revision}"),
            create_time: "2026-03-01T00:00:00Z".parse().unwrap(),
            build_variants: variants,
        }),
    }
}

pub(crate) fn variant(name: &str, tasks: Vec<TaskSummary>) -> BuildVariant {
    BuildVariant {
        display_name: name.to_string(),
        tasks,
    }
}

pub(crate) fn sample(task_id: &str, tests: &[&str]) -> TaskTestSample {
    TaskTestSample {
        task_id: task_id.to_string(),
        execution: 0,
        matching_failed_test_names: tests.iter().map(|t| (*t).to_string()).collect(),
        total_test_count: 100,
    }
}

/// Canned responses keyed by version id; records every sample request.
#[derive(Default)]
pub(crate) struct FakeSource {
    pub versions: Vec<MainlineCommitVersion>,
    pub samples: HashMap<String, Vec<TaskTestSample>>,
    /// Returned for every request, whatever the task ids.
    pub stray_samples: Vec<TaskTestSample>,
    pub requests: Mutex<Vec<(String, Vec<String>)>>,
    pub fail_samples: bool,
}

impl CiSource for FakeSource {
    fn mainline_commits<'a>(
        &'a self,
        _project_id: &'a str,
        limit: u32,
    ) -> BoxFuture<'a, EvgResult<MainlineCommits>> {
        let versions = self.versions.iter().take(limit as usize).cloned().collect();
        Box::pin(async move { Ok(MainlineCommits { versions }) })
    }

    fn task_test_sample<'a>(
        &'a self,
        version_id: &'a str,
        task_ids: &'a [String],
    ) -> BoxFuture<'a, EvgResult<Vec<TaskTestSample>>> {
        Box::pin(async move {
            self.requests
                .lock()
                .unwrap()
                .push((version_id.to_string(), task_ids.to_vec()));
            if self.fail_samples {
                return Err(NetworkError::HttpError {
                    status: 503,
                    url: "http://fake".to_string(),
                }
                .into());
            }
            let matching = self
                .samples
                .get(version_id)
                .into_iter()
                .flatten()
                .filter(|s| task_ids.contains(&s.task_id));
            Ok(matching.chain(&self.stray_samples).cloned().collect())
        })
    }
}

/// Two versions; `a` and `a/b` both fail in `v1` (parent and child).
pub(crate) fn two_version_source() -> FakeSource {
    FakeSource {
        versions: vec![
            version(
                "v1",
                "rev1",
                vec![
                    variant("Linux", vec![task("t1", "jsCore"), task("t2", "sharding")]),
                    variant("Windows", vec![task("t3", "jsCore")]),
                ],
            ),
            MainlineCommitVersion { version: None },
            version("v2", "rev2", vec![variant("Linux", vec![task("t4", "jsCore")])]),
        ],
        samples: HashMap::from([
            (
                "v1".to_string(),
                vec![
                    sample("t1", &["a", "a/b", "c"]),
                    sample("t2", &["a/x"]),
                    sample("t3", &["c"]),
                ],
            ),
            ("v2".to_string(), vec![sample("t4", &["a", "d"])]),
        ]),
        ..FakeSource::default()
    }
}
