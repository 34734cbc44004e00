// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Interception registration
//!
//! [`Debugger::enable`] installs the intercepting handler at the front of the
//! default and ephemeral session configurations exactly once, no matter how
//! many times or from how many threads it is called. There is no way to
//! uninstall it.

mod config;
mod trigger;

pub use config::{
    DebuggerConfig, DEFAULT_CATEGORY, DEFAULT_SUBSYSTEM, ENV_LOG_DIR, ENV_LOG_FILE, LOG_FILE_NAME,
};
pub use trigger::{DebugTrigger, TriggerCallback};

use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use lazy_static::lazy_static;
use tracing::{info, warn};

use crate::error::Result;
use crate::http::{HttpClient, ProtocolHandler, SessionConfiguration};
use crate::intercept::{Forwarder, InterceptingHandler};
use crate::sink::LogSink;

lazy_static! {
    static ref GLOBAL: Debugger = Debugger::new(
        DebuggerConfig::from_env(),
        SessionConfiguration::shared_default(),
        SessionConfiguration::shared_ephemeral(),
    );
}

/// Registrar for the intercepting handler
pub struct Debugger {
    config: DebuggerConfig,
    default_session: SessionConfiguration,
    ephemeral_session: SessionConfiguration,
    forwarder: Option<Forwarder>,
    installed: OnceLock<Arc<InterceptingHandler>>,
    trigger: DebugTrigger,
}

impl Debugger {
    /// Registrar over the given configurations
    pub fn new(
        config: DebuggerConfig,
        default_session: SessionConfiguration,
        ephemeral_session: SessionConfiguration,
    ) -> Self {
        Self {
            config,
            default_session,
            ephemeral_session,
            forwarder: None,
            installed: OnceLock::new(),
            trigger: DebugTrigger::new(),
        }
    }

    /// Forward captured requests through this forwarder instead of each
    /// caller's own transport
    pub fn with_forwarder(mut self, forwarder: Forwarder) -> Self {
        self.forwarder = Some(forwarder);
        self
    }

    /// The process-wide registrar over the shared configurations
    pub fn global() -> &'static Debugger {
        &GLOBAL
    }

    /// Install interception; later calls do nothing
    pub fn enable(&self) {
        self.installed.get_or_init(|| self.install());
    }

    fn install(&self) -> Arc<InterceptingHandler> {
        let sink = self.open_sink();
        let forwarder = self
            .forwarder
            .clone()
            .unwrap_or_else(Forwarder::through_caller);

        let handler = Arc::new(InterceptingHandler::new(forwarder, Arc::new(sink)));
        for session in [&self.default_session, &self.ephemeral_session] {
            session.install_front(handler.clone() as Arc<dyn ProtocolHandler>);
        }

        handler
    }

    fn open_sink(&self) -> LogSink {
        let subsystem = self.config.subsystem.as_str();
        let category = self.config.category.as_str();

        match self.config.log_path {
            Some(ref path) => match LogSink::open(path, subsystem, category) {
                Ok(sink) => {
                    info!(path = %path.display(), "Log file location");
                    sink
                }
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "Cannot create log file, logging to diagnostics only"
                    );
                    LogSink::disabled(subsystem, category)
                }
            },
            None => LogSink::disabled(subsystem, category),
        }
    }

    /// Whether the handler is installed
    pub fn is_enabled(&self) -> bool {
        self.handler().is_some()
    }

    /// The installed handler
    pub fn handler(&self) -> Option<&Arc<InterceptingHandler>> {
        self.installed.get()
    }

    pub fn config(&self) -> &DebuggerConfig {
        &self.config
    }

    pub fn default_session(&self) -> &SessionConfiguration {
        &self.default_session
    }

    pub fn ephemeral_session(&self) -> &SessionConfiguration {
        &self.ephemeral_session
    }

    /// A client on the default configuration
    pub fn client(&self) -> Result<HttpClient> {
        HttpClient::with_config(self.default_session.clone())
    }

    /// Entry point for whatever surfaces the debug view
    pub fn trigger(&self) -> &DebugTrigger {
        &self.trigger
    }

    /// Where entries are written
    pub fn log_path(&self) -> Option<&Path> {
        match self.handler() {
            Some(handler) => handler.sink().path(),
            None => self.config.log_path.as_deref(),
        }
    }

    /// Current log contents; empty if there is no log file yet
    pub fn read_log(&self) -> Result<String> {
        if let Some(handler) = self.handler() {
            return handler.sink().read_to_string();
        }
        match self.config.log_path {
            Some(ref path) if path.exists() => Ok(fs::read_to_string(path)?),
            _ => Ok(String::new()),
        }
    }

    /// Truncate the log file
    pub fn clear_log(&self) -> Result<()> {
        if let Some(handler) = self.handler() {
            return handler.sink().clear();
        }
        match self.config.log_path {
            Some(ref path) if path.exists() => Ok(fs::write(path, "")?),
            _ => Ok(()),
        }
    }
}

/// Enable interception on the shared configurations
///
/// Does nothing in release builds.
pub fn enable() {
    #[cfg(debug_assertions)]
    Debugger::global().enable();
}
