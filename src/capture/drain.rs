// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Stream draining

use std::io::{self, Read};

use bytes::{Bytes, BytesMut};

/// Bytes read per call when draining a stream body
pub const DRAIN_CHUNK_SIZE: usize = 32 * 1024;

/// Read a stream to its end
pub fn drain<R: Read + ?Sized>(reader: &mut R) -> io::Result<Bytes> {
    let mut buffer = BytesMut::new();
    let mut chunk = vec![0u8; DRAIN_CHUNK_SIZE];

    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => buffer.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(buffer.freeze())
}
