//! Integration tests for `FeedClient` and a full `Watcher` cycle over HTTP.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use careersignal_core::Record;
use careersignal_feed::{
    AlertToggle, CycleOutcome, FeedClient, FeedError, Notifier, Presenter, Watcher,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const README: &str = "\
# Summer 2026 Tech Internships

Use this repo to share and keep track of software internships.

| Company | Role | Location | Application/Link | Date Posted |
| ------- | ---- | -------- | ---------------- | ----------- |
| **Acme** | Software Engineering Intern | New York, NY | <a href=\"https://acme.co/careers/1\"><img src=\"https://i.imgur.com/btn.png\" width=\"118\" alt=\"Apply\"></a> | Sep 01 |
| Beta | Data Science Intern | Remote | [Apply](https://beta.io/jobs/2) | Sep 02 |
| Closed Co | Quant Intern | Chicago, IL | 🔒 | Aug 15 |
";

/// Builds a `FeedClient` pointed at the mock server with a short timeout.
fn test_client(server: &MockServer, timeout_secs: u64) -> FeedClient {
    FeedClient::new(
        &format!("{}/README.md", server.uri()),
        timeout_secs,
        "careersignal-test/0.1",
    )
    .expect("failed to build test FeedClient")
}

async fn mount_readme(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/README.md"))
        .respond_with(response)
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// FeedClient
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_document_returns_body_text() {
    let server = MockServer::start().await;
    mount_readme(
        &server,
        ResponseTemplate::new(200).set_body_raw(README, "text/plain; charset=utf-8"),
    )
    .await;

    let body = test_client(&server, 5)
        .fetch_document()
        .await
        .expect("expected Ok body");

    assert_eq!(body, README);
}

#[tokio::test]
async fn fetch_document_maps_non_2xx_to_unexpected_status() {
    let server = MockServer::start().await;
    mount_readme(&server, ResponseTemplate::new(404)).await;

    let result = test_client(&server, 5).fetch_document().await;

    assert!(
        matches!(result, Err(FeedError::UnexpectedStatus { status: 404, .. })),
        "expected UnexpectedStatus(404), got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_document_rejects_non_text_content_type() {
    let server = MockServer::start().await;
    mount_readme(
        &server,
        ResponseTemplate::new(200).set_body_raw(vec![0x89, 0x50, 0x4e, 0x47], "image/png"),
    )
    .await;

    let result = test_client(&server, 5).fetch_document().await;

    assert!(
        matches!(result, Err(FeedError::NonText { ref content_type, .. }) if content_type == "image/png"),
        "expected NonText, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_document_rejects_invalid_utf8() {
    let server = MockServer::start().await;
    mount_readme(
        &server,
        ResponseTemplate::new(200).set_body_raw(vec![0xff, 0xfe, 0xfd], "text/plain"),
    )
    .await;

    let result = test_client(&server, 5).fetch_document().await;

    assert!(
        matches!(result, Err(FeedError::Decode { .. })),
        "expected Decode, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_document_times_out() {
    let server = MockServer::start().await;
    mount_readme(
        &server,
        ResponseTemplate::new(200)
            .set_body_raw(README, "text/plain")
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let result = test_client(&server, 1).fetch_document().await;

    assert!(
        matches!(result, Err(FeedError::Timeout { timeout_secs: 1, .. })),
        "expected Timeout, got: {result:?}"
    );
}

// ---------------------------------------------------------------------------
// Watcher over HTTP
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
struct Sink {
    alerts: Arc<Mutex<Vec<String>>>,
    snapshots: Arc<Mutex<Vec<Vec<Record>>>>,
}

impl Notifier for Sink {
    fn notify(&self, _title: &str, body: &str) {
        self.alerts.lock().unwrap().push(body.to_string());
    }
}

impl Presenter for Sink {
    fn replace(&self, snapshot: &[Record]) {
        self.snapshots.lock().unwrap().push(snapshot.to_vec());
    }
}

struct AlwaysOn;

impl AlertToggle for AlwaysOn {
    fn alerts_enabled(&self) -> bool {
        true
    }
}

#[tokio::test]
async fn watcher_cycle_parses_live_readme() {
    let server = MockServer::start().await;
    mount_readme(
        &server,
        ResponseTemplate::new(200).set_body_raw(README, "text/plain; charset=utf-8"),
    )
    .await;

    let sink = Sink::default();
    let mut watcher = Watcher::new(test_client(&server, 5), sink.clone(), AlwaysOn, sink.clone());

    let report = match watcher.run_cycle().await {
        CycleOutcome::Completed(report) => report,
        CycleOutcome::FetchFailed(e) => panic!("expected completed cycle, got: {e}"),
    };
    assert!(report.seeded);
    assert_eq!(report.snapshot_len, 3);

    let snapshots = sink.snapshots.lock().unwrap();
    let records = &snapshots[0];
    assert_eq!(records[0].company, "**Acme**");
    assert_eq!(records[0].link, "https://acme.co/careers/1");
    assert_eq!(records[1].link, "https://beta.io/jobs/2");
    assert_eq!(records[2].link, "");
    assert!(sink.alerts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn watcher_survives_server_error_and_alerts_after_recovery() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/README.md"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(README, "text/plain"))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let sink = Sink::default();
    let mut watcher = Watcher::new(test_client(&server, 5), sink.clone(), AlwaysOn, sink.clone());
    watcher.run_cycle().await;

    server.reset().await;
    mount_readme(&server, ResponseTemplate::new(500)).await;
    let outcome = watcher.run_cycle().await;
    assert!(matches!(
        outcome,
        CycleOutcome::FetchFailed(FeedError::UnexpectedStatus { status: 500, .. })
    ));

    server.reset().await;
    let updated = format!("{README}| Delta | Platform Intern | Austin, TX | https://delta.dev/jobs/9 | Sep 04 |\n");
    mount_readme(
        &server,
        ResponseTemplate::new(200).set_body_raw(updated, "text/plain"),
    )
    .await;
    watcher.run_cycle().await;

    assert_eq!(
        *sink.alerts.lock().unwrap(),
        vec!["Delta - Platform Intern".to_string()]
    );
    assert_eq!(sink.snapshots.lock().unwrap().len(), 2);
}
