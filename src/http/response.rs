// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, Result};

/// Response metadata, relayed before any body bytes
#[derive(Debug, Clone)]
pub struct ResponseHead {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Final URL (after redirects)
    pub url: Url,
}

impl ResponseHead {
    /// Head with no headers
    pub fn new(status: StatusCode, url: Url) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            url,
        }
    }
}

/// A complete response as the caller sees it
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Final URL (after redirects)
    pub url: Url,
    /// Whole body; empty when the server sent none
    pub body: Bytes,
    /// Time from start to the last byte
    pub elapsed: Duration,
}

impl Response {
    /// Join relayed metadata with the collected body
    pub fn new(head: ResponseHead, body: Bytes) -> Self {
        Self {
            status: head.status,
            headers: head.headers,
            url: head.url,
            body,
            elapsed: Duration::ZERO,
        }
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Metadata to relay ahead of the body
    pub fn head(&self) -> ResponseHead {
        ResponseHead {
            status: self.status,
            headers: self.headers.clone(),
            url: self.url.clone(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Body as UTF-8 text
    pub fn text(&self) -> Result<String> {
        std::str::from_utf8(&self.body)
            .map(str::to_owned)
            .map_err(|e| Error::Other(e.to_string()))
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    pub fn body_len(&self) -> usize {
        self.body.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(body: &'static str) -> Response {
        let url = Url::parse("https://example.com").unwrap();
        Response::new(ResponseHead::new(StatusCode::OK, url), Bytes::from(body))
    }

    #[test]
    fn test_status() {
        let resp = response("");
        assert!(resp.is_success());
        assert_eq!(resp.status_code(), 200);
        assert_eq!(resp.elapsed, Duration::ZERO);
    }

    #[test]
    fn test_text_rejects_invalid_utf8() {
        assert_eq!(response("Hello, World!").text().unwrap(), "Hello, World!");

        let mut resp = response("");
        resp.body = Bytes::from_static(&[0xff, 0xfe]);
        assert!(resp.text().is_err());
    }

    #[test]
    fn test_head_carries_metadata() {
        let mut resp = response("[1]");
        resp.headers
            .insert(CONTENT_TYPE, "application/json".parse().unwrap());

        let rebuilt = Response::new(resp.head(), resp.body.clone());
        assert_eq!(rebuilt.content_type(), Some("application/json"));
        assert_eq!(rebuilt.json::<Vec<u8>>().unwrap(), vec![1]);
    }
}
