// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for netcapt
//!
//! The interception layer must hand the caller exactly the failure the network
//! produced, so transport errors keep their original description. Everything
//! else (formatting, log writes) degrades instead of surfacing an error.

use thiserror::Error;

/// Result type alias for netcapt operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for netcapt
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed inside reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Host unreachable, connection refused, offline.
    ///
    /// Displayed verbatim so the log shows the same text the caller sees.
    #[error("{0}")]
    Connectivity(String),

    /// Request could not be routed or relayed
    #[error("Network error: {0}")]
    Network(String),

    /// Request was cancelled by the caller before it completed
    #[error("Request cancelled")]
    Cancelled,

    /// Operation timed out
    #[error("Operation timed out after {duration_ms}ms: {url}")]
    Timeout { url: String, duration_ms: u64 },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a connectivity error
    pub fn connectivity<S: Into<String>>(msg: S) -> Self {
        Error::Connectivity(msg.into())
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Error::Network(msg.into())
    }

    /// Map a reqwest failure onto the taxonomy callers match on.
    pub(crate) fn from_transport(err: reqwest::Error, url: &url::Url, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Error::Timeout {
                url: url.to_string(),
                duration_ms: timeout_ms,
            }
        } else if err.is_connect() {
            Error::Connectivity(err.to_string())
        } else {
            Error::Http(err)
        }
    }
}
