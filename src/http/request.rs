// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP request types and builder

use std::fmt;
use std::io::{self, Read};
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use url::Url;

use crate::capture::drain;
use crate::error::Result;

/// Request payload
///
/// A stream body is read exactly once; whoever drains it must replace it with
/// the buffered bytes before the request is sent.
pub enum RequestBody {
    /// No payload
    Empty,
    /// In-memory payload
    Bytes(Bytes),
    /// Payload supplied incrementally
    Stream(Box<dyn Read + Send>),
}

impl RequestBody {
    /// Whether the body is known to carry no bytes
    pub fn is_empty(&self) -> bool {
        match self {
            RequestBody::Empty => true,
            RequestBody::Bytes(b) => b.is_empty(),
            RequestBody::Stream(_) => false,
        }
    }

    /// In-memory bytes, if the body is not a stream
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            RequestBody::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestBody::Empty => write!(f, "Empty"),
            RequestBody::Bytes(b) => write!(f, "Bytes({} bytes)", b.len()),
            RequestBody::Stream(_) => write!(f, "Stream"),
        }
    }
}

impl From<Bytes> for RequestBody {
    fn from(bytes: Bytes) -> Self {
        RequestBody::Bytes(bytes)
    }
}

/// HTTP request representation
#[derive(Debug)]
pub struct Request {
    /// Request method
    pub method: Method,
    /// Request URL
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: RequestBody,
    /// Request timeout
    pub timeout: Option<Duration>,
    /// Set on a clone that has already been captured
    intercepted: bool,
}

impl Request {
    /// Create a new request with arbitrary method
    pub fn new(method: Method, url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            method,
            url: Url::parse(url.as_ref())?,
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
            timeout: None,
            intercepted: false,
        })
    }

    /// Create a new GET request
    pub fn get(url: impl AsRef<str>) -> Result<Self> {
        Self::new(Method::GET, url)
    }

    /// Create a new POST request
    pub fn post(url: impl AsRef<str>) -> Result<Self> {
        Self::new(Method::POST, url)
    }

    /// Set a header
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_ref()),
            HeaderValue::try_from(value.as_ref()),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Set the request body
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = RequestBody::Bytes(body.into());
        self
    }

    /// Supply the body as a stream that is read when the request is sent
    pub fn body_stream<R: Read + Send + 'static>(mut self, reader: R) -> Self {
        self.body = RequestBody::Stream(Box::new(reader));
        self
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Whether this request already went through capture
    pub fn is_intercepted(&self) -> bool {
        self.intercepted
    }

    /// Tag the request so no interceptor accepts it again
    pub fn mark_intercepted(mut self) -> Self {
        self.intercepted = true;
        self
    }

    /// Read a stream body into memory, leaving the buffered bytes in its place
    ///
    /// Returns the full payload; empty when there is none. Streams are read on
    /// the blocking pool.
    pub async fn buffer_body(&mut self) -> io::Result<Bytes> {
        let bytes = match std::mem::replace(&mut self.body, RequestBody::Empty) {
            RequestBody::Empty => Bytes::new(),
            RequestBody::Bytes(b) => b,
            RequestBody::Stream(mut reader) => {
                tokio::task::spawn_blocking(move || drain(&mut reader))
                    .await
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))??
            }
        };
        if !bytes.is_empty() {
            self.body = RequestBody::Bytes(bytes.clone());
        }
        Ok(bytes)
    }

    /// Get the host
    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    /// Whether the URL names something a transport can reach
    pub fn has_resolvable_target(&self) -> bool {
        matches!(self.url.scheme(), "http" | "https") && self.url.host_str().is_some()
    }
}
