// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Log sink
//!
//! Appends entry blocks to a plain-text file and mirrors each one to the
//! `netcapt::api` tracing target. File writes hold a lock for the whole
//! open-append-close sequence so concurrent entries never interleave.
//! Nothing here returns an error to the request path.

mod entry;

pub use entry::{LogEntry, ResponseRecord, SEPARATOR};

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::{info, warn};

use crate::error::Result;

/// Tracing target of the diagnostic stream
pub const LOG_TARGET: &str = "netcapt::api";

/// Durable, append-only request log
pub struct LogSink {
    path: Option<PathBuf>,
    subsystem: String,
    category: String,
    write_lock: Mutex<()>,
    appended: AtomicU64,
}

impl LogSink {
    /// Use `path` as the log file, creating it empty if it does not exist
    ///
    /// Existing content is kept.
    pub fn open(
        path: impl Into<PathBuf>,
        subsystem: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self::build(Some(path), subsystem.into(), category.into()))
    }

    /// A sink that only feeds the diagnostic stream
    pub fn disabled(subsystem: impl Into<String>, category: impl Into<String>) -> Self {
        Self::build(None, subsystem.into(), category.into())
    }

    fn build(path: Option<PathBuf>, subsystem: String, category: String) -> Self {
        Self {
            path,
            subsystem,
            category,
            write_lock: Mutex::new(()),
            appended: AtomicU64::new(0),
        }
    }

    /// Log file location, if file output is active
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of entries appended so far
    pub fn appended(&self) -> u64 {
        self.appended.load(Ordering::Relaxed)
    }

    /// Write one entry to the file and the diagnostic stream
    pub fn append(&self, entry: &LogEntry) {
        let block = entry.render();

        if let Some(ref path) = self.path {
            let _guard = self.write_lock.lock();
            if let Err(e) = append_block(path, &block) {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to append to request log"
                );
            }
        }

        info!(
            target: LOG_TARGET,
            subsystem = %self.subsystem,
            category = %self.category,
            method = %entry.method,
            url = entry.url_str(),
            status = entry.status.map(|s| s.as_u16()),
            captured_at = %entry.captured_at.to_rfc3339(),
            "{}",
            block
        );

        self.appended.fetch_add(1, Ordering::Relaxed);
    }

    /// Whole log, for viewers
    pub fn read_to_string(&self) -> Result<String> {
        match self.path {
            Some(ref path) => {
                let _guard = self.write_lock.lock();
                Ok(fs::read_to_string(path)?)
            }
            None => Ok(String::new()),
        }
    }

    /// Truncate the log file
    pub fn clear(&self) -> Result<()> {
        if let Some(ref path) = self.path {
            let _guard = self.write_lock.lock();
            fs::write(path, "")?;
        }
        Ok(())
    }
}

/// Append to an existing file; a missing file is an error, not recreated
fn append_block(path: &Path, block: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().append(true).open(path)?;
    file.write_all(block.as_bytes())?;
    file.flush()
}
