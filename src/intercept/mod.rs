// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request interception
//!
//! The intercepting handler plugs into a session configuration and takes
//! every request that has not been captured yet. It marks a copy, forwards
//! it, relays the outcome to the caller and writes a log entry.

mod forward;
mod handler;

pub use forward::{ForwardOutcome, Forwarder};
pub use handler::{InterceptedRequest, InterceptingHandler, HANDLER_NAME};
