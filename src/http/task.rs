// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Caller-side handle for an in-flight request

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use bytes::BytesMut;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use url::Url;

use super::protocol::{LoadEvent, ProtocolClient};
use super::response::Response;
use crate::error::{Error, Result};

static TASK_COUNTER: AtomicU64 = AtomicU64::new(1);

/// A started request
///
/// Events arrive in order: one `Response`, any number of `Data`, then
/// `Finished`; or a single `Failed`. Dropping the task cancels it.
/// Once the terminal event has been sent, cancelling has no effect.
pub struct DataTask {
    id: u64,
    url: Url,
    events: mpsc::UnboundedReceiver<LoadEvent>,
    cancel: CancellationToken,
    settled: Arc<Mutex<bool>>,
}

impl DataTask {
    /// Create a task and the relay end that feeds it
    pub fn channel(url: Url) -> (ProtocolClient, DataTask) {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let settled = Arc::new(Mutex::new(false));
        let client = ProtocolClient::new(tx, cancel.clone(), settled.clone());
        let task = DataTask {
            id: TASK_COUNTER.fetch_add(1, Ordering::Relaxed),
            url,
            events: rx,
            cancel,
            settled,
        };
        (client, task)
    }

    /// Task identifier, unique within the process
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Original request URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Stop the load; no further events are delivered
    ///
    /// Does nothing once the load has settled.
    pub fn cancel(&self) {
        let settled = self.settled.lock();
        if !*settled {
            self.cancel.cancel();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Next event, or `None` once the load ended or was cancelled
    pub async fn next_event(&mut self) -> Option<LoadEvent> {
        if self.cancel.is_cancelled() {
            return None;
        }
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => None,
            event = self.events.recv() => event,
        }
    }

    /// Collect the events into a complete response
    pub async fn response(mut self) -> Result<Response> {
        let start = Instant::now();
        let mut head = None;
        let mut body = BytesMut::new();

        loop {
            match self.next_event().await {
                Some(LoadEvent::Response(h)) => head = Some(h),
                Some(LoadEvent::Data(chunk)) => body.extend_from_slice(&chunk),
                Some(LoadEvent::Finished) => {
                    let head = head.ok_or_else(|| {
                        Error::network(format!("{} finished without a response", self.url))
                    })?;
                    return Ok(Response::new(head, body.freeze()).with_elapsed(start.elapsed()));
                }
                Some(LoadEvent::Failed(e)) => return Err(e),
                None if self.cancel.is_cancelled() => return Err(Error::Cancelled),
                None => {
                    return Err(Error::network(format!(
                        "{} ended without completing",
                        self.url
                    )))
                }
            }
        }
    }
}

impl Drop for DataTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
