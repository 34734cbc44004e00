// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Log entries

use std::fmt;

use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};
use url::Url;

use crate::capture::CapturedBody;

/// Line that opens and closes every entry block
pub const SEPARATOR: &str = "------------------------------";

/// What came back for a request
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseRecord {
    /// The response body
    Body(CapturedBody),
    /// Description of the failure that replaced the response
    Error(String),
}

impl ResponseRecord {
    pub fn render(&self) -> String {
        match self {
            ResponseRecord::Body(body) => body.render(),
            ResponseRecord::Error(description) => format!("\"{}\"", description),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResponseRecord::Error(_))
    }
}

/// One captured request/response pair
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Request URL; `None` renders as `nil`
    pub url: Option<Url>,
    /// Request method
    pub method: Method,
    /// Response status, if a response arrived
    pub status: Option<StatusCode>,
    /// Captured request body
    pub request: CapturedBody,
    /// Captured response body or failure
    pub response: ResponseRecord,
    /// When the entry was built
    pub captured_at: DateTime<Utc>,
}

impl LogEntry {
    pub fn new(
        url: Option<Url>,
        method: Method,
        request: CapturedBody,
        response: ResponseRecord,
    ) -> Self {
        Self {
            url,
            method,
            status: None,
            request,
            response,
            captured_at: Utc::now(),
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// URL as printed in the log
    pub fn url_str(&self) -> &str {
        self.url.as_ref().map(Url::as_str).unwrap_or("nil")
    }

    /// The delimited text block written to the log file
    pub fn render(&self) -> String {
        format!(
            "{sep}\nURL: {}\nRequest: {}\nResponse: {}\n{sep}\n",
            self.url_str(),
            self.request.render(),
            self.response.render(),
            sep = SEPARATOR,
        )
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
