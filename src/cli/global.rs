// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! ```text
//! --level LEVEL          console verbosity (emergency .. trace)
//! --conf/--config/-c P   settings file, default ~/.evergreen.yml
//! --log-file FILE        also log to FILE at debug level
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::ClientSettings;
use crate::logging::LogLevel;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Lowest log level to show (emergency, alert, critical, error, warning,
    /// notice, info, debug, trace).
    #[arg(long, value_name = "LEVEL", default_value_t = LogLevel::Info, global = true)]
    pub level: LogLevel,

    /// Path to the Evergreen settings file.
    #[arg(
        short = 'c',
        long = "conf",
        visible_alias = "config",
        value_name = "PATH",
        global = true
    )]
    pub conf: Option<PathBuf>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// The settings file to load: `--conf`, else `~/.evergreen.yml`.
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.conf
            .clone()
            .unwrap_or_else(ClientSettings::default_path)
    }
}
