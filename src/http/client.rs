// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client implementation

use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use super::protocol::ProtocolClient;
use super::request::Request;
use super::response::Response;
use super::session::SessionConfiguration;
use super::task::DataTask;
use super::transport::{ReqwestTransport, Transport};
use crate::error::Result;

/// HTTP client that routes every request through its configuration's
/// protocol handlers before falling back to the transport
#[derive(Clone)]
pub struct HttpClient {
    config: SessionConfiguration,
    transport: Arc<dyn Transport>,
}

impl HttpClient {
    /// Create a client on the process-wide default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(SessionConfiguration::shared_default())
    }

    /// Create a client on the given configuration
    pub fn with_config(config: SessionConfiguration) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client with a custom transport
    pub fn with_transport(config: SessionConfiguration, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Get client configuration
    pub fn config(&self) -> &SessionConfiguration {
        &self.config
    }

    /// Transport for plain loads; handlers that forward send through it too
    pub fn transport(&self) -> Arc<dyn Transport> {
        self.transport.clone()
    }

    /// Start a request on a background task
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self, request: Request) -> DataTask {
        let (client, task) = DataTask::channel(request.url.clone());
        let client = client.with_transport(self.transport.clone());

        match self.config.route(&request) {
            Some(handler) => {
                debug!(
                    task = task.id(),
                    handler = handler.name(),
                    url = %request.url,
                    "Request taken by protocol handler"
                );
                tokio::spawn(async move {
                    handler.start_loading(request, client).await;
                });
            }
            None => {
                debug!(task = task.id(), url = %request.url, "Request sent directly");
                tokio::spawn(load_direct(self.transport.clone(), request, client));
            }
        }

        task
    }

    /// Execute a request and wait for the complete response
    ///
    /// Dropping the returned future cancels the request.
    pub async fn execute(&self, request: Request) -> Result<Response> {
        self.start(request).response().await
    }

    /// Execute a GET request
    pub async fn get(&self, url: impl AsRef<str>) -> Result<Response> {
        self.execute(Request::get(url)?).await
    }

    /// Execute a POST request
    pub async fn post(&self, url: impl AsRef<str>, body: impl Into<Bytes>) -> Result<Response> {
        self.execute(Request::post(url)?.body(body)).await
    }

    /// Execute multiple requests concurrently
    pub async fn execute_all(&self, requests: Vec<Request>) -> Vec<Result<Response>> {
        let futures: Vec<_> = requests.into_iter().map(|r| self.execute(r)).collect();
        futures::future::join_all(futures).await
    }
}

/// Plain load with no handler involved
async fn load_direct(transport: Arc<dyn Transport>, request: Request, client: ProtocolClient) {
    let result = tokio::select! {
        biased;
        _ = client.cancelled() => return,
        result = transport.send(request) => result,
    };

    match result {
        Ok(response) => {
            client.did_receive_response(response.head());
            if !response.body.is_empty() {
                client.did_load(response.body);
            }
            client.did_finish();
        }
        Err(e) => {
            client.did_fail(e);
        }
    }
}
