// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Debugger configuration

use std::path::PathBuf;

/// File name of the request log
pub const LOG_FILE_NAME: &str = "ApiLogs";

/// Subsystem tag on diagnostic events
pub const DEFAULT_SUBSYSTEM: &str = "netcapt";

/// Category tag on diagnostic events
pub const DEFAULT_CATEGORY: &str = "API";

/// Environment variable naming the log file
pub const ENV_LOG_FILE: &str = "NETCAPT_LOG_FILE";

/// Environment variable naming the directory that holds the log file
pub const ENV_LOG_DIR: &str = "NETCAPT_LOG_DIR";

/// Debugger configuration
#[derive(Debug, Clone)]
pub struct DebuggerConfig {
    /// Log file; `None` keeps only the diagnostic stream
    pub log_path: Option<PathBuf>,
    /// Subsystem tag
    pub subsystem: String,
    /// Category tag
    pub category: String,
}

impl Default for DebuggerConfig {
    fn default() -> Self {
        Self {
            log_path: Some(default_log_path(std::env::var_os("HOME").map(PathBuf::from))),
            subsystem: DEFAULT_SUBSYSTEM.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

impl DebuggerConfig {
    /// Create a new debugger config
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `NETCAPT_LOG_FILE` / `NETCAPT_LOG_DIR`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Self::default();
        if let Some(file) = lookup(ENV_LOG_FILE).filter(|v| !v.is_empty()) {
            config.log_path = Some(PathBuf::from(file));
        } else if let Some(dir) = lookup(ENV_LOG_DIR).filter(|v| !v.is_empty()) {
            config.log_path = Some(PathBuf::from(dir).join(LOG_FILE_NAME));
        }
        config
    }

    /// Set log file
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    /// Log to the diagnostic stream only
    pub fn without_log_file(mut self) -> Self {
        self.log_path = None;
        self
    }

    /// Set subsystem tag
    pub fn subsystem(mut self, subsystem: impl Into<String>) -> Self {
        self.subsystem = subsystem.into();
        self
    }

    /// Set category tag
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

fn default_log_path(home: Option<PathBuf>) -> PathBuf {
    match home {
        Some(home) => home.join(".netcapt").join(LOG_FILE_NAME),
        None => std::env::temp_dir().join("netcapt").join(LOG_FILE_NAME),
    }
}
