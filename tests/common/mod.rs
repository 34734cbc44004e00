// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};

use async_trait::async_trait;
use netcapt::debugger::LOG_FILE_NAME;
use netcapt::http::{Request, Response, Transport};
use netcapt::{Debugger, DebuggerConfig, Forwarder, SessionConfiguration};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Captured diagnostic event
#[derive(Debug, Clone)]
pub struct CapturedLog {
    pub target: String,
    pub message: String,
    pub url: Option<String>,
}

struct CaptureLayer {
    logs: Arc<Mutex<Vec<CapturedLog>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        if let Some(message) = visitor.message {
            self.logs.lock().unwrap().push(CapturedLog {
                target: event.metadata().target().to_string(),
                message,
                url: visitor.url,
            });
        }
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    url: Option<String>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        match field.name() {
            "url" => self.url = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        match field.name() {
            "message" => self.message = Some(format!("{:?}", value)),
            "url" => self.url = Some(format!("{:?}", value)),
            _ => {}
        }
    }
}

/// Global subscriber that records every event; installed once per test binary
pub fn capture() -> Arc<Mutex<Vec<CapturedLog>>> {
    static LOGS: OnceLock<Arc<Mutex<Vec<CapturedLog>>>> = OnceLock::new();
    LOGS.get_or_init(|| {
        let logs = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(CaptureLayer { logs: logs.clone() });
        let _ = tracing::subscriber::set_global_default(subscriber);
        logs
    })
    .clone()
}

/// Diagnostic entries on the API target whose URL starts with `prefix`
pub fn api_events(logs: &Arc<Mutex<Vec<CapturedLog>>>, prefix: &str) -> Vec<CapturedLog> {
    logs.lock()
        .unwrap()
        .iter()
        .filter(|log| log.target == netcapt::LOG_TARGET)
        .filter(|log| log.url.as_deref().map_or(false, |u| u.starts_with(prefix)))
        .cloned()
        .collect()
}

/// Fresh registrar with its own configurations and a log file under `dir`
pub fn debugger(dir: &Path) -> Debugger {
    Debugger::new(
        DebuggerConfig::new().log_path(dir.join(LOG_FILE_NAME)),
        SessionConfiguration::default_config(),
        SessionConfiguration::ephemeral(),
    )
}

/// Registrar whose forwarder uses `transport`
pub fn debugger_with_transport(dir: &Path, transport: Arc<dyn Transport>) -> Debugger {
    debugger(dir).with_forwarder(Forwarder::new(transport))
}

/// Transport that fails every request with a connectivity error
pub struct Offline;

#[async_trait]
impl Transport for Offline {
    async fn send(&self, _request: Request) -> netcapt::Result<Response> {
        Err(netcapt::Error::connectivity("offline"))
    }
}

/// Split a log into its lines, grouped per five-line entry block
pub fn blocks(contents: &str) -> Vec<Vec<String>> {
    contents
        .lines()
        .map(str::to_string)
        .collect::<Vec<_>>()
        .chunks(5)
        .map(|c| c.to_vec())
        .collect()
}
