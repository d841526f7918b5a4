// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Evergreen GraphQL API.
//!
//! ```text
//! EvergreenClient (reqwest, shared client)
//!   mainline_commits(project, limit) --> MainlineCommits
//!   task_test_sample(version, ids)   --> Vec<TaskTestSample>
//!        |
//!        v
//! query.rs   documents + variables (serde_json::json!)
//! types.rs   typed response slices (serde)
//! ```

pub mod client;
pub mod query;
pub mod types;

pub use client::EvergreenClient;
