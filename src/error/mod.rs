// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        EvgError (16 bytes)
//!               |
//!     +---------+---------+
//!     |         |         |
//!     v         v         v
//!   Config   Network     Io
//!    Box       Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Config  Load, NoProject, InvalidValue
//!   Network Reqwest, HttpError, GraphqlErrors, Decode, MissingData, Interrupted
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EvgError`].
pub type EvgResult<T> = std::result::Result<T, EvgError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at 16 bytes on the stack.
#[derive(Debug, Error)]
pub enum EvgError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Network or GraphQL error.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EvgError {
                fn from(err: $error) -> Self {
                    EvgError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    NetworkError => Network,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Settings and project resolution errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to load the client settings file.
    #[error("failed to load settings '{path}': {message}")]
    Load { path: String, message: String },

    /// No project given and no default project found for the directory.
    #[error("need to specify a project (no default project for '{dir}')")]
    NoProject { dir: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

// --- Network Errors ---

/// GraphQL transport and response errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// The response carried a non-empty `errors` array.
    #[error("GraphQL API returned errors for {query}: {errors}")]
    GraphqlErrors { query: String, errors: String },

    /// The response body could not be decoded.
    #[error("failed to decode {query} response: {source}")]
    Decode {
        query: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response had neither data nor errors.
    #[error("{query} response contained no data")]
    MissingData { query: String },

    /// Request was cancelled before it was sent.
    #[error("request interrupted")]
    Interrupted,
}
