// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Network transport
//!
//! The transport is the bottom of the stack: it sends a request as-is and
//! never consults protocol handlers.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::Client;

use super::request::Request;
use super::response::{Response, ResponseHead};
use super::session::SessionConfiguration;
use crate::error::{Error, Result};

/// Something that can put a request on the wire
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the complete response
    async fn send(&self, request: Request) -> Result<Response>;
}

/// reqwest-backed transport
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout_ms: u64,
}

impl ReqwestTransport {
    /// Build a transport from a session configuration's network settings
    pub fn new(config: &SessionConfiguration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.timeout())
            .redirect(Policy::limited(config.max_redirects()))
            .default_headers(config.default_headers().clone())
            .cookie_store(config.cookie_store())
            .build()?;

        Ok(Self {
            client,
            timeout_ms: config.timeout().as_millis() as u64,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, mut request: Request) -> Result<Response> {
        let start = Instant::now();
        let url = request.url.clone();
        let body = request.buffer_body().await?;

        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());

        if !body.is_empty() {
            builder = builder.body(body);
        }

        let mut timeout_ms = self.timeout_ms;
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
            timeout_ms = timeout.as_millis() as u64;
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::from_transport(e, &url, timeout_ms))?;

        let head = ResponseHead {
            status: response.status(),
            headers: response.headers().clone(),
            url: response.url().clone(),
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::from_transport(e, &url, timeout_ms))?;

        Ok(Response::new(head, body).with_elapsed(start.elapsed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        assert!(ReqwestTransport::new(&SessionConfiguration::default_config()).is_ok());
        assert!(ReqwestTransport::new(&SessionConfiguration::ephemeral()).is_ok());
    }
}
