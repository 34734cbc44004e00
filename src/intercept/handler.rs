// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Intercepting protocol handler
//!
//! Each accepted request runs through capture, forward, relay and log on its
//! own task. The caller sees exactly the events the network produced; once
//! the caller cancels, nothing more is relayed or logged.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use tracing::{debug, warn};
use url::Url;

use super::forward::{ForwardOutcome, Forwarder};
use crate::capture::CapturedBody;
use crate::error::Error;
use crate::http::{ProtocolClient, ProtocolHandler, Request};
use crate::sink::{LogEntry, LogSink, ResponseRecord};

/// Name the handler is registered under
pub const HANDLER_NAME: &str = "netcapt.intercept";

/// Read-only copy of a request as it entered capture
#[derive(Debug, Clone)]
pub struct InterceptedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl InterceptedRequest {
    fn snapshot(request: &Request, body: Bytes) -> Self {
        Self {
            method: request.method.clone(),
            url: request.url.clone(),
            headers: request.headers.clone(),
            body,
        }
    }

    /// The body in loggable form
    pub fn captured_body(&self) -> CapturedBody {
        CapturedBody::classify(Some(&self.body[..]))
    }
}

/// Protocol handler that captures, forwards and logs every request it accepts
pub struct InterceptingHandler {
    forwarder: Forwarder,
    sink: Arc<LogSink>,
    intercepted: AtomicU64,
    rejected: AtomicU64,
}

impl InterceptingHandler {
    pub fn new(forwarder: Forwarder, sink: Arc<LogSink>) -> Self {
        Self {
            forwarder,
            sink,
            intercepted: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
        }
    }

    /// Requests accepted so far
    pub fn intercepted(&self) -> u64 {
        self.intercepted.load(Ordering::Relaxed)
    }

    /// Requests declined so far
    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }

    pub fn sink(&self) -> &Arc<LogSink> {
        &self.sink
    }

    fn log(&self, request: &InterceptedRequest, status: Option<StatusCode>, response: ResponseRecord) {
        let mut entry = LogEntry::new(
            Some(request.url.clone()),
            request.method.clone(),
            request.captured_body(),
            response,
        );
        if let Some(status) = status {
            entry = entry.with_status(status);
        }
        self.sink.append(&entry);
    }
}

#[async_trait]
impl ProtocolHandler for InterceptingHandler {
    fn name(&self) -> &str {
        HANDLER_NAME
    }

    fn can_handle(&self, request: &Request) -> bool {
        if request.is_intercepted() {
            debug!(url = %request.url, "Request already captured, passing through");
            self.rejected.fetch_add(1, Ordering::Relaxed);
            return false;
        }
        if !request.has_resolvable_target() {
            debug!(url = %request.url, "Request has no resolvable target, passing through");
            self.rejected.fetch_add(1, Ordering::Relaxed);
            return false;
        }
        true
    }

    async fn start_loading(&self, mut request: Request, client: ProtocolClient) {
        self.intercepted.fetch_add(1, Ordering::Relaxed);

        let body = match request.buffer_body().await {
            Ok(body) => body,
            Err(e) => {
                warn!(url = %request.url, error = %e, "Failed to read request body stream");
                let snapshot = InterceptedRequest::snapshot(&request, Bytes::new());
                let error = Error::from(e);
                let description = error.to_string();
                client.did_fail_with(error, || {
                    self.log(&snapshot, None, ResponseRecord::Error(description))
                });
                return;
            }
        };

        let snapshot = InterceptedRequest::snapshot(&request, body);
        let forwarded = request.mark_intercepted();

        let outcome = tokio::select! {
            biased;
            _ = client.cancelled() => {
                debug!(url = %snapshot.url, "Cancelled before forward completed");
                return;
            }
            outcome = self.forwarder.forward(forwarded, client.transport()) => outcome,
        };

        match outcome {
            ForwardOutcome::Success(response) => {
                let status = response.status;
                let body = CapturedBody::classify(Some(&response.body[..]));
                let record = ResponseRecord::Body(body);

                client.did_receive_response(response.head());
                if !response.body.is_empty() {
                    client.did_load(response.body);
                }

                // The entry is on disk before the caller sees the load complete
                let settled = client.did_finish_with(|| {
                    self.log(&snapshot, Some(status), record)
                });
                if !settled {
                    debug!(url = %snapshot.url, "Discarding completion that arrived after cancel");
                }
            }
            ForwardOutcome::Failure(error) => {
                let description = error.to_string();
                let settled = client.did_fail_with(error, || {
                    self.log(&snapshot, None, ResponseRecord::Error(description))
                });
                if !settled {
                    debug!(url = %snapshot.url, "Discarding failure that arrived after cancel");
                }
            }
        }
    }
}
