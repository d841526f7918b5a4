// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   load_settings --> resolve_project --> EvergreenClient
//!        |
//!        v
//!   *_report(&impl CiSource) --> String --> stdout
//! ```
//!
//! The `*_report` functions take any [`CiSource`](crate::report::source::CiSource)
//! and return the rendered text, so they run unchanged against test fakes.

pub mod failstats;
pub mod topfail;

#[cfg(test)]
mod tests;

use anyhow::Context;
use tracing::debug;

use crate::cli::global::GlobalOptions;
use crate::config::{ClientSettings, canonical_cwd};
use crate::error::Result;
use crate::report::Table;
use crate::report::tally::ranked;

/// Load the settings file named by `--conf` (or the default) plus `EVG_*`
/// overrides.
///
/// # Errors
///
/// Returns an error if the file is missing or invalid.
pub fn load_settings(global: &GlobalOptions) -> Result<ClientSettings> {
    let settings =
        ClientSettings::from_file(global.settings_path()).context("error loading configuration")?;

    for line in settings.format_options() {
        debug!("{line}");
    }

    Ok(settings)
}

/// `--project` if given, else the default project for the cwd.
///
/// The cwd is only read when no project was given.
///
/// # Errors
///
/// Returns an error if the cwd cannot be resolved or has no default project.
pub fn resolve_project(settings: &ClientSettings, explicit: Option<&str>) -> Result<String> {
    if let Some(project) = explicit.filter(|p| !p.is_empty()) {
        return Ok(project.to_string());
    }
    let cwd = canonical_cwd()?;
    Ok(settings.resolve_project(None, &cwd)?)
}

/// `Count | <key_header>` table, most frequent first.
pub(crate) fn count_table(
    key_header: &str,
    counts: &std::collections::BTreeMap<String, usize>,
) -> Table {
    let mut table = Table::new(["Count", key_header]);
    for (key, count) in ranked(counts) {
        table.add_row([count.to_string(), key.to_string()]);
    }
    table
}
