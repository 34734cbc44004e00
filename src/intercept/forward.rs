// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Forwarding unit
//!
//! Sends a captured request for real, over the transport the calling client
//! would have used itself. That transport never consults protocol handlers,
//! so a forwarded request cannot loop back into capture, and the caller's
//! headers, timeouts, redirect policy and cookie store all still apply.

use std::sync::Arc;

use tracing::debug;

use crate::error::Error;
use crate::http::{Request, Response, Transport};

/// Result of one forwarded request
#[derive(Debug)]
pub enum ForwardOutcome {
    /// The network answered
    Success(Response),
    /// The network call failed
    Failure(Error),
}

impl ForwardOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ForwardOutcome::Success(_))
    }
}

/// Performs the network call on behalf of a captured request
#[derive(Clone, Default)]
pub struct Forwarder {
    fixed: Option<Arc<dyn Transport>>,
}

impl Forwarder {
    /// Forward over whichever transport the calling client uses
    pub fn through_caller() -> Self {
        Self::default()
    }

    /// Forward every request over `transport`, ignoring the caller's
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            fixed: Some(transport),
        }
    }

    /// Send the request once
    ///
    /// `caller` is the originating client's transport. Retrying is left to the
    /// application; a retry shows up as a new request. Dropping the returned
    /// future abandons the network call.
    pub async fn forward(
        &self,
        request: Request,
        caller: Option<&Arc<dyn Transport>>,
    ) -> ForwardOutcome {
        debug_assert!(request.is_intercepted(), "forwarding an unmarked request");

        let transport = match self.fixed.as_ref().or(caller) {
            Some(transport) => transport,
            None => {
                return ForwardOutcome::Failure(Error::network(format!(
                    "no transport to forward {}",
                    request.url
                )))
            }
        };

        debug!(method = %request.method, url = %request.url, "Forwarding captured request");
        match transport.send(request).await {
            Ok(response) => ForwardOutcome::Success(response),
            Err(e) => ForwardOutcome::Failure(e),
        }
    }
}
