// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Evergreen client settings.
//!
//! The settings file belongs to the Evergreen CLI (`~/.evergreen.yml`); this
//! crate only reads the parts it needs and ignores everything else.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. settings YAML (--conf, default ~/.evergreen.yml)
//! 3. EVG_* env vars
//! 4. explicit overrides (SettingsLoader::set)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! EVG_USER=jdoe                  → user = "jdoe"
//! EVG_API_KEY=abc123             → api_key = "abc123"
//! EVG_GRAPHQL_URL=http://host/q  → graphql_url = "http://host/q"
//! ```
//!
//! # Default Project Resolution
//!
//! ```text
//! --project P given            → P
//! projects_for_directory[cwd]  → mapped project
//! projects[].default == true   → first default project
//! otherwise                    → ConfigError::NoProject
//! ```

pub mod loader;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, EvgResult, Result};

use loader::SettingsLoader;

/// File name of the Evergreen CLI settings in the user's home directory.
pub const DEFAULT_SETTINGS_FILE: &str = ".evergreen.yml";

/// GraphQL endpoint used when the settings don't point elsewhere.
pub const DEFAULT_GRAPHQL_URL: &str = "https://evergreen.mongodb.com/graphql/query";

/// Evergreen client settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Evergreen user name, sent as `Api-User`.
    pub user: String,
    /// Evergreen API key, sent as `Api-Key`.
    pub api_key: String,
    /// REST API host, e.g. `https://evergreen.mongodb.com/api`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_server_host: String,
    /// UI host; the GraphQL endpoint lives under it.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ui_server_host: String,
    /// Full GraphQL endpoint, overrides `ui_server_host`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub graphql_url: String,
    /// Known projects.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<ClientProject>,
    /// Directory → project identifier.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub projects_for_directory: BTreeMap<String, String>,
}

/// One entry of the `projects` list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientProject {
    pub name: String,
    pub default: bool,
}

impl ClientSettings {
    /// Create a new settings loader.
    #[must_use]
    pub fn builder() -> SettingsLoader {
        SettingsLoader::new()
    }

    /// Load settings from a YAML file plus `EVG_*` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if the file is missing or not valid YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> EvgResult<Self> {
        Self::builder()
            .add_yaml_file(path)
            .with_env_prefix("EVG")
            .build()
    }

    /// Load settings from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if the content is not valid YAML.
    pub fn parse(content: &str) -> EvgResult<Self> {
        Self::builder().add_yaml_str(content).build()
    }

    /// Default settings path: `~/.evergreen.yml`.
    ///
    /// Falls back to the bare file name (relative to the cwd) when no home
    /// directory can be determined.
    #[must_use]
    pub fn default_path() -> PathBuf {
        directories::BaseDirs::new().map_or_else(
            || PathBuf::from(DEFAULT_SETTINGS_FILE),
            |dirs| dirs.home_dir().join(DEFAULT_SETTINGS_FILE),
        )
    }

    /// The GraphQL endpoint to query.
    #[must_use]
    pub fn graphql_endpoint(&self) -> String {
        if !self.graphql_url.is_empty() {
            return self.graphql_url.clone();
        }
        if !self.ui_server_host.is_empty() {
            return format!("{}/graphql/query", self.ui_server_host.trim_end_matches('/'));
        }
        DEFAULT_GRAPHQL_URL.to_string()
    }

    /// Find the default project for a directory.
    ///
    /// An explicit `projects_for_directory` mapping wins over the project
    /// flagged `default: true`.
    #[must_use]
    pub fn find_default_project(&self, dir: &Path) -> Option<&str> {
        let key = dir.to_string_lossy();
        if let Some(project) = self.projects_for_directory.get(&*key)
            && !project.is_empty()
        {
            return Some(project);
        }

        self.projects
            .iter()
            .find(|p| p.default && !p.name.is_empty())
            .map(|p| p.name.as_str())
    }

    /// Resolve the project to report on.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoProject` if no project was given and none is
    /// configured for `dir`.
    pub fn resolve_project(&self, explicit: Option<&str>, dir: &Path) -> EvgResult<String> {
        if let Some(project) = explicit.filter(|p| !p.is_empty()) {
            return Ok(project.to_string());
        }

        tracing::debug!(dir = %dir.display(), "no project given, looking up default project");

        self.find_default_project(dir)
            .map(str::to_string)
            .ok_or_else(|| {
                ConfigError::NoProject {
                    dir: dir.display().to_string(),
                }
                .into()
            })
    }

    /// Format settings for debug output, hiding the API key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert("user", self.user.clone());
        if !self.api_key.is_empty() {
            options.insert("api_key", "[hidden]".to_string());
        }
        options.insert("graphql_url", self.graphql_endpoint());
        options.insert(
            "projects",
            self.projects
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        );

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}

/// Resolve the working directory the way the Evergreen CLI keys
/// `projects_for_directory`: absolute with symlinks evaluated.
///
/// # Errors
///
/// Returns an error if the cwd cannot be read or canonicalized.
pub fn canonical_cwd() -> Result<PathBuf> {
    use anyhow::Context;

    let cwd = std::env::current_dir().context("error getting cwd")?;
    std::fs::canonicalize(&cwd)
        .with_context(|| format!("error evaluating symlinks for {}", cwd.display()))
}
