// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client layer
//!
//! Provides a lightweight HTTP client whose session configurations carry an
//! ordered list of protocol handlers, so interception can be installed once
//! without touching call sites.

mod client;
mod protocol;
mod request;
mod response;
mod session;
mod task;
mod transport;

pub use client::HttpClient;
pub use protocol::{LoadEvent, ProtocolClient, ProtocolHandler};
pub use request::{Request, RequestBody};
pub use response::{Response, ResponseHead};
pub use session::{SessionConfiguration, SessionKind};
pub use task::DataTask;
pub use transport::{ReqwestTransport, Transport};

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("netcapt/", env!("CARGO_PKG_VERSION"));
