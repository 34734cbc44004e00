// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # netcapt - Transparent HTTP Capture for Debugging
//!
//! Sits between an application's outgoing HTTP calls and the network. Every
//! request is forwarded unmodified while its request and response bodies are
//! captured, pretty-printed and appended to a plain-text log.
//!
//! ## Features
//!
//! - Install once: `enable()` plugs the capture handler into the shared
//!   session configurations, no call-site changes
//! - Transparent: callers see the same responses, errors and cancellation
//! - Readable: JSON bodies are pretty-printed with sorted keys
//! - Safe under load: log entries never interleave
//! - Diagnostic stream: every entry is mirrored to `tracing`
//!
//! ## Example
//!
//! ```rust,no_run
//! use netcapt::HttpClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     netcapt::enable();
//!
//!     let client = HttpClient::new()?;
//!     let response = client.get("https://jsonplaceholder.typicode.com/posts").await?;
//!     println!("{} bytes", response.body_len());
//!
//!     println!("{}", netcapt::Debugger::global().read_log()?);
//!     Ok(())
//! }
//! ```

pub mod capture;
pub mod debugger;
pub mod error;
pub mod http;
pub mod intercept;
pub mod sink;

// Re-exports for convenience

// Registration
pub use debugger::{enable, DebugTrigger, Debugger, DebuggerConfig};

// Capture
pub use capture::{drain, CapturedBody};

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{
    DataTask, HttpClient, LoadEvent, ProtocolClient, ProtocolHandler, Request, Response,
    SessionConfiguration, Transport,
};

// Interception
pub use intercept::{ForwardOutcome, Forwarder, InterceptedRequest, InterceptingHandler};

// Sink
pub use sink::{LogEntry, LogSink, ResponseRecord, LOG_TARGET};

/// netcapt version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
