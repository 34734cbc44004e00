// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Body capture and formatting
//!
//! Turns raw request and response payloads into readable text: JSON
//! containers are pretty-printed with sorted keys, UTF-8 is kept verbatim,
//! and anything else becomes a size placeholder.

mod body;
mod drain;

pub use body::{CapturedBody, ABSENT_BODY};
pub use drain::{drain, DRAIN_CHUNK_SIZE};
