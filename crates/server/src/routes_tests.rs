// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use axum::body::Body;
use axum::http::Request;
use parking_lot::Mutex;
use tempfile::TempDir;
use tower::ServiceExt;

use runpad_core::SystemClock;
use runpad_engine::registry::builtin;
use runpad_engine::{
    AuditStore, FakeAuditStore, FakeInterpreter, LogAuditStore, RunCapture, RunPipeline,
    StaticRegistry,
};
use runpad_storage::AuditLog;

struct Harness {
    app: Router,
    interpreter: FakeInterpreter,
    store: FakeAuditStore,
    _dir: TempDir,
}

/// Router over the built-in registry, a scripted fake interpreter, and
/// a fake audit store.
fn harness() -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let audit_log = Arc::new(Mutex::new(
        AuditLog::open(dir.path().join("audit.log")).unwrap(),
    ));
    let interpreter = FakeInterpreter::new();
    let store = FakeAuditStore::new();
    let pipeline = RunPipeline::new(
        Arc::new(StaticRegistry::builtin()),
        Arc::new(interpreter.clone()),
        Arc::new(store.clone()),
    );
    let app = router(AppState::new(pipeline, audit_log));
    Harness { app, interpreter, store, _dir: dir }
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn successful_program_returns_its_output() {
    let h = harness();
    h.interpreter.script(
        builtin::HELLO_WORLD,
        RunCapture::completed("Day 1 Program Ran Successfully!\nTotal: 4\n"),
    );

    let (status, body) = get_json(h.app, "/?path=day1/hello_world.py").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Success");
    assert_eq!(body["program"], "day1/hello_world.py");
    assert_eq!(body["output"], "Day 1 Program Ran Successfully!\nTotal: 4");
}

#[tokio::test]
async fn faulting_program_is_a_failure_response_not_an_http_error() {
    let h = harness();
    h.interpreter.script(
        builtin::EXAMPLE,
        RunCapture::faulted(
            "",
            "Traceback (most recent call last):\n  File \"<stdin>\", line 5\nException: Test Failure",
        ),
    );

    let (status, body) = get_json(h.app, "/?path=day2/example.py").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Failure");
    let output = body["output"].as_str().unwrap();
    assert!(output.contains("Test Failure"), "output was: {output}");
    assert!(output.contains("Traceback"), "output was: {output}");
}

#[tokio::test]
async fn empty_path_is_bad_request() {
    let h = harness();

    let (status, body) = get_json(h.app, "/?path=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing 'path' query parameter.");
}

#[tokio::test]
async fn missing_path_is_bad_request() {
    let h = harness();

    let (status, body) = get_json(h.app, "/").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing 'path' query parameter.");
}

#[tokio::test]
async fn unknown_program_is_not_found() {
    let h = harness();

    let (status, body) = get_json(h.app, "/?path=unknown/x.py").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Program not found: unknown/x.py");
    assert!(h.store.records().is_empty());
}

#[tokio::test]
async fn audit_failure_annotates_output_but_status_stays_ok() {
    let h = harness();
    h.interpreter.script(
        builtin::HELLO_WORLD,
        RunCapture::completed("Day 1 Program Ran Successfully!\nTotal: 4\n"),
    );
    h.store.fail_with("store unreachable");

    let (status, body) = get_json(h.app, "/?path=day1/hello_world.py").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Success");
    let output = body["output"].as_str().unwrap();
    assert!(output.starts_with("Day 1 Program Ran Successfully!\nTotal: 4"));
    assert!(output.contains("--- AUDIT LOGGING ERROR ---"), "output was: {output}");
    assert!(output.contains("store unreachable"));
}

#[tokio::test]
async fn health_reports_ok() {
    let h = harness();

    let (status, body) = get_json(h.app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn history_lists_recorded_runs() {
    // Wire the pipeline's audit store to the same on-disk log the
    // history endpoint reads.
    let dir = tempfile::tempdir().unwrap();
    let audit_log = Arc::new(Mutex::new(
        AuditLog::open(dir.path().join("audit.log")).unwrap(),
    ));
    let interpreter = FakeInterpreter::new();
    interpreter.script(builtin::HELLO_WORLD, RunCapture::completed("hello\n"));
    let pipeline = RunPipeline::new(
        Arc::new(StaticRegistry::builtin()),
        Arc::new(interpreter),
        Arc::new(LogAuditStore::new(Arc::clone(&audit_log), SystemClock)),
    );
    let app = router(AppState::new(pipeline, audit_log));

    let (status, _) = get_json(app.clone(), "/?path=day1/hello_world.py").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get_json(app, "/runs").await;
    assert_eq!(status, StatusCode::OK);
    let runs = body["runs"].as_array().unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0]["program_id"], "day1/hello_world.py");
    assert_eq!(runs[0]["status"], "Success");
    assert_eq!(runs[0]["output"], "hello");
    assert!(runs[0]["recorded_at_ms"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn history_limit_keeps_most_recent() {
    let dir = tempfile::tempdir().unwrap();
    let audit_log = Arc::new(Mutex::new(
        AuditLog::open(dir.path().join("audit.log")).unwrap(),
    ));
    let store = LogAuditStore::new(Arc::clone(&audit_log), SystemClock);
    for i in 0..5 {
        let outcome = runpad_core::ExecutionOutcome::success(format!("run {i}"));
        store.record(&runpad_core::ProgramId::new("p"), &outcome).await.unwrap();
    }
    let pipeline = RunPipeline::new(
        Arc::new(StaticRegistry::builtin()),
        Arc::new(FakeInterpreter::new()),
        Arc::new(FakeAuditStore::new()),
    );
    let app = router(AppState::new(pipeline, audit_log));

    let (status, body) = get_json(app, "/runs?limit=2").await;

    assert_eq!(status, StatusCode::OK);
    let runs = body["runs"].as_array().unwrap();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0]["output"], "run 3");
    assert_eq!(runs[1]["output"], "run 4");
}
