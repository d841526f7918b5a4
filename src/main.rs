// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Settings --> Command Dispatch
//!   Topfail | Failstats
//! Ctrl+C --> CancellationToken
//! ```

use std::process::ExitCode;

use evergreen_test::cli::global::GlobalOptions;
use evergreen_test::cli::{self, Command};
use evergreen_test::cmd::failstats::run_failstats_command;
use evergreen_test::cmd::load_settings;
use evergreen_test::cmd::topfail::run_topfail_command;
use evergreen_test::logging::{LogConfig, init_logging};
use tokio_util::sync::CancellationToken;
use tracing::warn;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let cancel = CancellationToken::new();
    spawn_interrupt_handler(cancel.clone());

    dispatch_command(&cli, &cancel).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    LogConfig::builder()
        .with_console_level(global.level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn spawn_interrupt_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupted, stopping after the current request");
            cancel.cancel();
        }
    });
}

async fn dispatch_command(cli: &cli::Cli, cancel: &CancellationToken) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Topfail(args)) => match load_settings(&cli.global) {
            Ok(settings) => run_topfail_command(args, &settings, cancel).await,
            Err(e) => Err(e),
        },
        Some(Command::Failstats(args)) => match load_settings(&cli.global) {
            Ok(settings) => run_failstats_command(args, &settings, cancel).await,
            Err(e) => Err(e),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
