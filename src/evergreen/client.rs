// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! GraphQL transport.
//!
//! ```text
//! POST <endpoint>
//!   Api-User: <user>
//!   Api-Key:  <api key>
//!   {"query": "...", "variables": {...}}
//!        |
//!        v
//! {"data": ..., "errors": [...]}
//!   errors non-empty -> GraphqlErrors (whatever the status)
//!   status not 2xx   -> HttpError
//!   data missing     -> MissingData
//!   data             -> T
//! ```

use futures_util::future::BoxFuture;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;
use tracing::debug;

use super::query::{
    MAINLINE_COMMITS_QUERY, TASK_TEST_SAMPLE_QUERY, mainline_commits_variables,
    task_test_sample_variables,
};
use super::types::{MainlineCommits, MainlineCommitsData, TaskTestSample, TaskTestSampleData};
use crate::config::ClientSettings;
use crate::error::{EvgResult, NetworkError};
use crate::report::source::CiSource;

/// Shared HTTP client with the crate user agent.
fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(format!("evergreen-test/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: &'a Value,
}

#[derive(Deserialize)]
struct ErrorsEnvelope {
    #[serde(default)]
    errors: Option<Vec<Value>>,
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: Option<T>,
}

/// Evergreen GraphQL API client.
#[derive(Debug, Clone)]
pub struct EvergreenClient {
    client: Client,
    endpoint: String,
    user: String,
    api_key: String,
}

impl EvergreenClient {
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        user: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client: global_client().clone(),
            endpoint: endpoint.into(),
            user: user.into(),
            api_key: api_key.into(),
        }
    }

    /// Client for the endpoint and credentials in `settings`.
    #[must_use]
    pub fn from_settings(settings: &ClientSettings) -> Self {
        Self::new(
            settings.graphql_endpoint(),
            settings.user.clone(),
            settings.api_key.clone(),
        )
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one GraphQL document and decode its `data`.
    ///
    /// `name` only labels errors and log lines.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` for transport failures, a non-empty `errors`
    /// array, non-2xx statuses, and undecodable or missing `data`.
    pub async fn query<T: DeserializeOwned>(
        &self,
        name: &str,
        query: &str,
        variables: &Value,
    ) -> EvgResult<T> {
        debug!(query = name, endpoint = %self.endpoint, "sending GraphQL request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Api-User", &self.user)
            .header("Api-Key", &self.api_key)
            .json(&GraphqlRequest { query, variables })
            .send()
            .await
            .map_err(NetworkError::from)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(NetworkError::from)?;

        debug!(query = name, status, bytes = body.len(), "GraphQL response received");

        decode_response(name, &self.endpoint, status, &body)
    }

    /// The last `limit` mainline versions of `project_id` with their failed tasks.
    ///
    /// # Errors
    ///
    /// See [`EvergreenClient::query`].
    pub async fn mainline_commits(
        &self,
        project_id: &str,
        limit: u32,
    ) -> EvgResult<MainlineCommits> {
        let variables = mainline_commits_variables(project_id, limit);
        let data: MainlineCommitsData = self
            .query("mainlineCommits", MAINLINE_COMMITS_QUERY, &variables)
            .await?;
        Ok(data.mainline_commits)
    }

    /// Failing test names for `task_ids` of one version.
    ///
    /// # Errors
    ///
    /// See [`EvergreenClient::query`].
    pub async fn task_test_sample(
        &self,
        version_id: &str,
        task_ids: &[String],
    ) -> EvgResult<Vec<TaskTestSample>> {
        let variables = task_test_sample_variables(version_id, task_ids);
        let data: TaskTestSampleData = self
            .query("taskTestSample", TASK_TEST_SAMPLE_QUERY, &variables)
            .await?;
        Ok(data.task_test_sample)
    }
}

impl CiSource for EvergreenClient {
    fn mainline_commits<'a>(
        &'a self,
        project_id: &'a str,
        limit: u32,
    ) -> BoxFuture<'a, EvgResult<MainlineCommits>> {
        Box::pin(self.mainline_commits(project_id, limit))
    }

    fn task_test_sample<'a>(
        &'a self,
        version_id: &'a str,
        task_ids: &'a [String],
    ) -> BoxFuture<'a, EvgResult<Vec<TaskTestSample>>> {
        Box::pin(self.task_test_sample(version_id, task_ids))
    }
}

/// Apply the response checks in order: `errors`, status, `data`.
pub(crate) fn decode_response<T: DeserializeOwned>(
    query: &str,
    url: &str,
    status: u16,
    body: &[u8],
) -> EvgResult<T> {
    if let Ok(ErrorsEnvelope {
        errors: Some(errors),
    }) = serde_json::from_slice::<ErrorsEnvelope>(body)
        && !errors.is_empty()
    {
        return Err(NetworkError::GraphqlErrors {
            query: query.to_string(),
            errors: format_errors(&errors),
        }
        .into());
    }

    if !(200..300).contains(&status) {
        return Err(NetworkError::HttpError {
            status,
            url: url.to_string(),
        }
        .into());
    }

    let envelope: DataEnvelope<T> =
        serde_json::from_slice(body).map_err(|source| NetworkError::Decode {
            query: query.to_string(),
            source,
        })?;

    envelope.data.ok_or_else(|| {
        NetworkError::MissingData {
            query: query.to_string(),
        }
        .into()
    })
}

/// `message` of each error, or the raw JSON when it has none.
fn format_errors(errors: &[Value]) -> String {
    errors
        .iter()
        .map(|e| {
            e.get("message")
                .and_then(Value::as_str)
                .map_or_else(|| e.to_string(), str::to_string)
        })
        .collect::<Vec<_>>()
        .join("; ")
}
