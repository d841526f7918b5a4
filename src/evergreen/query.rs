// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! GraphQL documents and their variables.
//!
//! The `MainlineCommits` document is the one the Evergreen waterfall page
//! sends, so the server-side resolvers behave exactly as they do in the UI.

use serde_json::{Value, json};

/// Task statuses the waterfall treats as failures.
pub const FAILURE_STATUSES: [&str; 9] = [
    "failed",
    "task-timed-out",
    "test-timed-out",
    "known-issue",
    "setup-failed",
    "system-failed",
    "system-timed-out",
    "system-unresponsive",
    "aborted",
];

/// Task-name pattern that matches nothing (`^`, backspace, `$`). Used to keep
/// grouped-task stats out of the response.
pub const UNMATCHABLE_TASK_PATTERN: &str = "^\u{8}$";

pub const MAINLINE_COMMITS_QUERY: &str = r"
  query MainlineCommits(
    $mainlineCommitsOptions: MainlineCommitsOptions!
    $buildVariantOptions: BuildVariantOptions!
    $buildVariantOptionsForGraph: BuildVariantOptions!
    $buildVariantOptionsForTaskIcons: BuildVariantOptions!
    $buildVariantOptionsForGroupedTasks: BuildVariantOptions!
  ) {
    mainlineCommits(
      options: $mainlineCommitsOptions
      buildVariantOptions: $buildVariantOptions
    ) {
      nextPageOrderNumber
      prevPageOrderNumber
      versions {
        rolledUpVersions {
          author
          createTime
          id
          ignored
          message
          order
          revision
          __typename
        }
        version {
          author
          buildVariants(options: $buildVariantOptionsForTaskIcons) {
            displayName
            tasks {
              displayName
              execution
              id
              status
              timeTaken
              __typename
            }
            variant
            __typename
          }
          buildVariantStats(options: $buildVariantOptionsForGroupedTasks) {
            displayName
            statusCounts {
              count
              status
              __typename
            }
            variant
            __typename
          }
          createTime
          gitTags {
            pusher
            tag
            __typename
          }
          id
          message
          order
          projectIdentifier
          revision
          taskStatusStats(options: $buildVariantOptionsForGraph) {
            counts {
              count
              status
              __typename
            }
            eta
            __typename
          }
          ...UpstreamProject
          __typename
        }
        __typename
      }
      __typename
    }
  }

  fragment UpstreamProject on Version {
    upstreamProject {
      owner
      project
      repo
      revision
      task {
        execution
        id
        __typename
      }
      triggerID
      triggerType
      version {
        id
        __typename
      }
      __typename
    }
    __typename
  }";

pub const TASK_TEST_SAMPLE_QUERY: &str = r"
  query ($versionId: String!, $taskIds: [String!]!, $filters: [TestFilter!]!) {
    taskTestSample(versionId: $versionId, taskIds: $taskIds, filters: $filters) {
      execution
      matchingFailedTestNames
      taskId
      totalTestCount
    }
  }";

/// Variables for [`MAINLINE_COMMITS_QUERY`]: the last `limit` mainline
/// versions of `project_id`, task icons restricted to [`FAILURE_STATUSES`].
#[must_use]
pub fn mainline_commits_variables(project_id: &str, limit: u32) -> Value {
    json!({
        "mainlineCommitsOptions": {
            "projectIdentifier": project_id,
            "limit": limit,
            "shouldCollapse": false,
            "requesters": [],
        },
        "buildVariantOptions": {
            "tasks": [],
            "variants": [],
            "statuses": [],
            "includeBaseTasks": false,
        },
        "buildVariantOptionsForGraph": {
            "statuses": [],
            "tasks": [],
            "variants": [],
        },
        "buildVariantOptionsForGroupedTasks": {
            "tasks": [UNMATCHABLE_TASK_PATTERN],
            "variants": [],
            "statuses": [],
        },
        "buildVariantOptionsForTaskIcons": {
            "tasks": [],
            "variants": [],
            "statuses": FAILURE_STATUSES,
            "includeBaseTasks": false,
        },
    })
}

/// Variables for [`TASK_TEST_SAMPLE_QUERY`].
#[must_use]
pub fn task_test_sample_variables(version_id: &str, task_ids: &[String]) -> Value {
    json!({
        "versionId": version_id,
        "taskIds": task_ids,
        "filters": [],
    })
}
