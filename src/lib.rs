// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                                topfail / failstats
//!                                      |
//!              ,-----------------------+---,
//!              |          config           |
//!              |  ~/.evergreen.yml, EVG_*  |
//!              '--+------------------------'
//!                 |
//!                 v
//!              report  ----- CiSource ----->  evergreen
//!         fetch, filter,                    GraphQL client
//!         tally, table                      (reqwest)
//!
//!   +-----------------------------------------+
//!   |  agg   aggregation pipeline builders    |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod agg;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod evergreen;
pub mod logging;
pub mod report;
