// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! evergreen-test [global options] <command>
//! topfail    most frequently failing tests
//! failstats  where one test fails
//! ```

pub mod global;
pub mod report;


use crate::cli::global::GlobalOptions;
use crate::cli::report::{FailstatsArgs, TopfailArgs};
use clap::{Parser, Subcommand};

/// Test-failure reports for Evergreen mainline builds.
#[derive(Debug, Parser)]
#[command(
    name = "evergreen-test",
    author,
    version,
    about = "Evergreen CI test-failure reports",
    long_about = "evergreen-test Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Summarizes failing tests across the most recent mainline\n\
                  versions of an Evergreen project.",
    after_help = "SETTINGS:\n\n\
                  Credentials (user, api_key) and the default project are read\n\
                  from the Evergreen CLI settings file, ~/.evergreen.yml unless\n\
                  --conf is given. EVG_USER, EVG_API_KEY and EVG_GRAPHQL_URL\n\
                  override the file."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lists the most frequently failing tests.
    Topfail(TopfailArgs),

    /// Shows failure stats for one test by version, variant and task.
    Failstats(FailstatsArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
