// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Pluggable protocol handlers
//!
//! A handler installed on a [`SessionConfiguration`](super::SessionConfiguration)
//! is offered each request before the plain transport. A handler that accepts
//! a request owns its whole load: it reports progress to the caller through a
//! [`ProtocolClient`] and must stop reporting once the caller cancels.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::request::Request;
use super::response::ResponseHead;
use super::transport::Transport;
use crate::error::Error;

/// Protocol handler trait - consulted in order, first acceptor wins
///
/// # Example
///
/// ```rust,no_run
/// use netcapt::http::{ProtocolClient, ProtocolHandler, Request};
/// use async_trait::async_trait;
///
/// struct Refuser;
///
/// #[async_trait]
/// impl ProtocolHandler for Refuser {
///     fn name(&self) -> &str {
///         "refuser"
///     }
///
///     fn can_handle(&self, request: &Request) -> bool {
///         request.host() == Some("blocked.example")
///     }
///
///     async fn start_loading(&self, _request: Request, client: ProtocolClient) {
///         client.did_fail(netcapt::Error::network("blocked"));
///     }
/// }
/// ```
#[async_trait]
pub trait ProtocolHandler: Send + Sync {
    /// Unique name; a configuration holds at most one handler per name
    fn name(&self) -> &str;

    /// Decide whether to take the request
    fn can_handle(&self, request: &Request) -> bool;

    /// Run the load, reporting through `client`
    async fn start_loading(&self, request: Request, client: ProtocolClient);
}

/// Progress of a load as seen by the caller
#[derive(Debug)]
pub enum LoadEvent {
    /// Status and headers arrived
    Response(ResponseHead),
    /// A chunk of the body arrived
    Data(Bytes),
    /// The load completed
    Finished,
    /// The load failed
    Failed(Error),
}

impl LoadEvent {
    /// Whether no events follow this one
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadEvent::Finished | LoadEvent::Failed(_))
    }
}

/// Relay target handed to a protocol handler
///
/// Events sent after cancellation or after a terminal event are dropped.
/// The `settled` flag is shared with the caller's task: a terminal event and
/// a cancel never both take effect.
#[derive(Clone)]
pub struct ProtocolClient {
    tx: mpsc::UnboundedSender<LoadEvent>,
    cancel: CancellationToken,
    settled: Arc<Mutex<bool>>,
    transport: Option<Arc<dyn Transport>>,
}

impl ProtocolClient {
    pub(crate) fn new(
        tx: mpsc::UnboundedSender<LoadEvent>,
        cancel: CancellationToken,
        settled: Arc<Mutex<bool>>,
    ) -> Self {
        Self {
            tx,
            cancel,
            settled,
            transport: None,
        }
    }

    /// Attach the transport the caller would have used without handlers
    pub(crate) fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// The calling client's own transport, if the load came from a client
    pub fn transport(&self) -> Option<&Arc<dyn Transport>> {
        self.transport.as_ref()
    }

    fn relay(&self, event: LoadEvent) -> bool {
        let settled = self.settled.lock();
        if *settled || self.cancel.is_cancelled() {
            return false;
        }
        self.tx.send(event).is_ok()
    }

    /// Send a terminal event, running `commit` first
    ///
    /// `commit` runs only if the load is still live, and no cancel can land
    /// between it and the event.
    fn settle<F: FnOnce()>(&self, event: LoadEvent, commit: F) -> bool {
        let mut settled = self.settled.lock();
        if *settled || self.cancel.is_cancelled() {
            return false;
        }
        commit();
        *settled = true;
        self.tx.send(event).is_ok()
    }

    /// Report response metadata
    pub fn did_receive_response(&self, head: ResponseHead) -> bool {
        self.relay(LoadEvent::Response(head))
    }

    /// Report a body chunk
    pub fn did_load(&self, data: Bytes) -> bool {
        self.relay(LoadEvent::Data(data))
    }

    /// Report successful completion
    pub fn did_finish(&self) -> bool {
        self.settle(LoadEvent::Finished, || {})
    }

    /// Report completion, running `commit` atomically with it
    pub fn did_finish_with<F: FnOnce()>(&self, commit: F) -> bool {
        self.settle(LoadEvent::Finished, commit)
    }

    /// Report failure
    pub fn did_fail(&self, error: Error) -> bool {
        self.settle(LoadEvent::Failed(error), || {})
    }

    /// Report failure, running `commit` atomically with it
    pub fn did_fail_with<F: FnOnce()>(&self, error: Error, commit: F) -> bool {
        self.settle(LoadEvent::Failed(error), commit)
    }

    /// Whether the caller gave up on the load
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Resolves once the caller cancels
    pub async fn cancelled(&self) {
        self.cancel.cancelled().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> (ProtocolClient, mpsc::UnboundedReceiver<LoadEvent>, CancellationToken) {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let settled = Arc::new(Mutex::new(false));
        (ProtocolClient::new(tx, cancel.clone(), settled), rx, cancel)
    }

    #[test]
    fn test_nothing_after_terminal_event() {
        let (client, mut rx, _cancel) = client();
        assert!(client.did_load(Bytes::from("a")));
        assert!(client.did_finish());
        assert!(!client.did_load(Bytes::from("b")));
        assert!(!client.did_fail(Error::network("late")));

        assert!(matches!(rx.try_recv(), Ok(LoadEvent::Data(_))));
        assert!(matches!(rx.try_recv(), Ok(LoadEvent::Finished)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_nothing_after_cancel() {
        let (client, mut rx, cancel) = client();
        cancel.cancel();
        assert!(client.is_cancelled());
        assert!(!client.did_finish());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_commit_skipped_after_cancel() {
        let (client, mut rx, cancel) = client();
        cancel.cancel();

        let mut committed = false;
        assert!(!client.did_fail_with(Error::network("late"), || committed = true));
        assert!(!committed);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_commit_runs_once_with_terminal_event() {
        let (client, mut rx, _cancel) = client();

        let mut commits = 0;
        assert!(client.did_finish_with(|| commits += 1));
        assert!(!client.did_finish_with(|| commits += 1));
        assert_eq!(commits, 1);

        assert!(matches!(rx.try_recv(), Ok(LoadEvent::Finished)));
        assert!(rx.try_recv().is_err());
    }
}
