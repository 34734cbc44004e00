// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Process-wide registration over the shared session configurations

#![cfg(debug_assertions)]

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use netcapt::debugger::{ENV_LOG_DIR, LOG_FILE_NAME};
use netcapt::intercept::HANDLER_NAME;
use netcapt::{Debugger, HttpClient, SessionConfiguration};
use tempfile::TempDir;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Point the global registrar at a scratch directory before first use
fn log_dir() -> &'static Path {
    static DIR: OnceLock<TempDir> = OnceLock::new();
    DIR.get_or_init(|| {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var(ENV_LOG_DIR, dir.path());
        dir
    })
    .path()
}

#[test]
fn test_enable_installs_once_on_shared_configurations() {
    let dir = log_dir();

    netcapt::enable();
    netcapt::enable();
    netcapt::enable();

    assert!(Debugger::global().is_enabled());
    assert_eq!(
        SessionConfiguration::shared_default().handler_count(HANDLER_NAME),
        1
    );
    assert_eq!(
        SessionConfiguration::shared_ephemeral().handler_count(HANDLER_NAME),
        1
    );
    assert_eq!(
        SessionConfiguration::shared_default().handler_names()[0],
        HANDLER_NAME
    );

    let path = dir.join(LOG_FILE_NAME);
    assert!(path.exists());
    assert_eq!(Debugger::global().log_path(), Some(path.as_path()));
}

#[tokio::test]
async fn test_clients_built_before_enable_are_captured() {
    log_dir();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"early":true}"#))
        .mount(&server)
        .await;

    let early = HttpClient::new().unwrap();
    netcapt::enable();

    let url = format!("{}/early", server.uri());
    early.get(&url).await.unwrap();

    let log = Debugger::global().read_log().unwrap();
    assert!(log.contains(&format!("URL: {}\n", url)));
    assert!(log.contains("Response: {\n  \"early\": true\n}\n"));
}

#[tokio::test]
async fn test_ephemeral_session_is_captured() {
    log_dir();
    netcapt::enable();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("stored"))
        .mount(&server)
        .await;

    let client = HttpClient::with_config(SessionConfiguration::shared_ephemeral()).unwrap();
    let url = format!("{}/ephemeral", server.uri());
    client.post(&url, "note").await.unwrap();

    let log = Debugger::global().read_log().unwrap();
    assert!(log.contains(&format!("URL: {}\nRequest: note\nResponse: stored\n", url)));
}

#[test]
fn test_trigger_runs_registered_callbacks() {
    log_dir();

    let hits = Arc::new(AtomicUsize::new(0));
    let h = hits.clone();
    Debugger::global().trigger().on_fire(move || {
        h.fetch_add(1, Ordering::SeqCst);
    });

    assert!(Debugger::global().trigger().fire() >= 1);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
