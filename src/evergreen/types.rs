// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed slices of the GraphQL responses.
//!
//! Only the fields the reports read are declared; serde ignores the rest of
//! the selection set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// GraphQL lists come back as `null` as often as `[]`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `data` of the `MainlineCommits` query.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainlineCommitsData {
    pub mainline_commits: MainlineCommits,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MainlineCommits {
    #[serde(default, deserialize_with = "null_as_default")]
    pub versions: Vec<MainlineCommitVersion>,
}

/// One waterfall entry. `version` is null for rolled-up (inactive) versions.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MainlineCommitVersion {
    #[serde(default)]
    pub version: Option<Version>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub id: String,
    #[serde(default)]
    pub revision: String,
    #[serde(default)]
    pub message: String,
    pub create_time: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub build_variants: Vec<BuildVariant>,
}

/// A build variant, restricted to its tasks with a failure-like status.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildVariant {
    pub display_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<TaskSummary>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub execution: i64,
    #[serde(default)]
    pub status: String,
}

/// `data` of the `taskTestSample` query.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTestSampleData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub task_test_sample: Vec<TaskTestSample>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTestSample {
    pub task_id: String,
    #[serde(default)]
    pub execution: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub matching_failed_test_names: Vec<String>,
    #[serde(default)]
    pub total_test_count: i64,
}
