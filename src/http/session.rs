// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Session configurations
//!
//! A configuration bundles network settings with an ordered list of protocol
//! handlers that are offered every request ahead of the plain transport.
//! Clones share the handler list, so a handler installed on a shared
//! configuration reaches every client built from it, including clients that
//! already exist.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use lazy_static::lazy_static;
use parking_lot::RwLock;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use super::protocol::ProtocolHandler;
use super::request::Request;
use super::DEFAULT_USER_AGENT;

lazy_static! {
    static ref SHARED_DEFAULT: SessionConfiguration = SessionConfiguration::default_config();
    static ref SHARED_EPHEMERAL: SessionConfiguration = SessionConfiguration::ephemeral();
}

/// Flavour of a session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    /// Persistent cookies
    Default,
    /// Nothing persisted between requests
    Ephemeral,
}

/// Network settings plus the ordered protocol handler list
#[derive(Clone)]
pub struct SessionConfiguration {
    kind: SessionKind,
    user_agent: String,
    timeout: Duration,
    max_redirects: usize,
    default_headers: HeaderMap,
    cookie_store: bool,
    handlers: Arc<RwLock<Vec<Arc<dyn ProtocolHandler>>>>,
}

impl SessionConfiguration {
    fn with_kind(kind: SessionKind) -> Self {
        Self {
            kind,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            max_redirects: 10,
            default_headers: HeaderMap::new(),
            cookie_store: kind == SessionKind::Default,
            handlers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// A fresh default configuration with its own handler list
    pub fn default_config() -> Self {
        Self::with_kind(SessionKind::Default)
    }

    /// A fresh ephemeral configuration with its own handler list
    pub fn ephemeral() -> Self {
        Self::with_kind(SessionKind::Ephemeral)
    }

    /// The process-wide default configuration
    pub fn shared_default() -> Self {
        SHARED_DEFAULT.clone()
    }

    /// The process-wide ephemeral configuration
    pub fn shared_ephemeral() -> Self {
        SHARED_EPHEMERAL.clone()
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set maximum redirects to follow
    pub fn with_max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = max;
        self
    }

    /// Add a header sent with every request
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (HeaderName::try_from(name), HeaderValue::try_from(value)) {
            self.default_headers.insert(name, value);
        }
        self
    }

    /// Enable or disable the cookie store
    pub fn with_cookie_store(mut self, enabled: bool) -> Self {
        self.cookie_store = enabled;
        self
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub fn cookie_store(&self) -> bool {
        self.cookie_store
    }

    /// Insert a handler ahead of all others
    ///
    /// Returns false if a handler with the same name is already installed.
    pub fn install_front(&self, handler: Arc<dyn ProtocolHandler>) -> bool {
        let mut handlers = self.handlers.write();
        if handlers.iter().any(|h| h.name() == handler.name()) {
            return false;
        }
        handlers.insert(0, handler);
        true
    }

    /// Append a handler after all others
    pub fn install_back(&self, handler: Arc<dyn ProtocolHandler>) -> bool {
        let mut handlers = self.handlers.write();
        if handlers.iter().any(|h| h.name() == handler.name()) {
            return false;
        }
        handlers.push(handler);
        true
    }

    /// Snapshot of the handler list, in routing order
    pub fn handlers(&self) -> Vec<Arc<dyn ProtocolHandler>> {
        self.handlers.read().clone()
    }

    /// Names of installed handlers, in routing order
    pub fn handler_names(&self) -> Vec<String> {
        self.handlers
            .read()
            .iter()
            .map(|h| h.name().to_string())
            .collect()
    }

    /// How many installed handlers carry this name
    pub fn handler_count(&self, name: &str) -> usize {
        self.handlers
            .read()
            .iter()
            .filter(|h| h.name() == name)
            .count()
    }

    /// First handler willing to take the request
    pub fn route(&self, request: &Request) -> Option<Arc<dyn ProtocolHandler>> {
        self.handlers
            .read()
            .iter()
            .find(|h| h.can_handle(request))
            .cloned()
    }

    /// Whether two configurations share one handler list
    pub fn shares_handlers_with(&self, other: &SessionConfiguration) -> bool {
        Arc::ptr_eq(&self.handlers, &other.handlers)
    }
}

impl fmt::Debug for SessionConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfiguration")
            .field("kind", &self.kind)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("cookie_store", &self.cookie_store)
            .field("handlers", &self.handler_names())
            .finish()
    }
}
