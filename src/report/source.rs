// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Where revision data comes from.

use futures_util::future::BoxFuture;

use crate::error::EvgResult;
use crate::evergreen::types::{MainlineCommits, TaskTestSample};

/// A CI backend that can answer the two queries the reports need.
///
/// [`EvergreenClient`](crate::evergreen::EvergreenClient) talks to the real
/// API; tests substitute canned data.
pub trait CiSource {
    /// The last `limit` mainline versions of `project_id`.
    fn mainline_commits<'a>(
        &'a self,
        project_id: &'a str,
        limit: u32,
    ) -> BoxFuture<'a, EvgResult<MainlineCommits>>;

    /// Failing test names for `task_ids` of `version_id`.
    fn task_test_sample<'a>(
        &'a self,
        version_id: &'a str,
        task_ids: &'a [String],
    ) -> BoxFuture<'a, EvgResult<Vec<TaskTestSample>>>;
}
