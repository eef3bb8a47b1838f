//! End-to-end tests against a running server.

use std::time::Duration;

use log_demo_server::observability::{LogLevel, RecordLevel, Stream};

mod common;

#[tokio::test]
async fn test_startup_record_announces_port() {
    let server = common::start_server("SANDBOX").await;

    let info = server.sink.lines_at(RecordLevel::Standard(LogLevel::Info));
    assert_eq!(info.len(), 1);
    assert!(info[0].ends_with(&format!("Server running on port {}", server.addr.port())));

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_routes() {
    let server = common::start_server("SANDBOX").await;
    let client = common::client();

    let res = client.get(server.url("/")).send().await.expect("Server unreachable");
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Backend up ✅");

    let res = client.get(server.url("/healthz")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));

    let res = client.get(server.url("/generate-logs")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "✅ Generated 10 random logs");

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_generate_logs_in_sandbox_writes_all_ten() {
    let server = common::start_server("SANDBOX").await;
    server.sink.clear();

    common::client()
        .get(server.url("/generate-logs"))
        .send()
        .await
        .unwrap();

    let lines = server.sink.lines();
    assert_eq!(lines.len(), 11, "one DEV record plus ten generated");
    assert!(lines[0].1.contains("] [DEV] GET /generate-logs | "));

    for (i, (stream, line)) in lines[1..].iter().enumerate() {
        assert!(line.ends_with(&format!(" | {{\"requestId\":{}}}", i)), "{}", line);
        let expected = if line.contains("] [ERROR] ") || line.contains("] [WARN] ") {
            Stream::Stderr
        } else {
            Stream::Stdout
        };
        assert_eq!(*stream, expected);
    }

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_production_suppresses_all_but_errors() {
    let server = common::start_server("PRODUCTION").await;
    let client = common::client();

    for _ in 0..5 {
        client.get(server.url("/generate-logs")).send().await.unwrap();
    }

    let lines = server.sink.lines();
    let dev = server.sink.lines_at(RecordLevel::Dev);
    let errors = server.sink.lines_at(RecordLevel::Standard(LogLevel::Error));

    assert_eq!(dev.len(), 5);
    assert_eq!(lines.len(), dev.len() + errors.len());
    assert!(server.sink.lines_at(RecordLevel::Standard(LogLevel::Info)).is_empty());

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let server = common::start_server("SANDBOX").await;
    let client = common::client();

    let mut tasks = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        let url = if i % 2 == 0 { server.url("/") } else { server.url("/healthz") };
        tasks.push(tokio::spawn(async move {
            let res = client.get(url).send().await.unwrap();
            (res.status().as_u16(), res.text().await.unwrap())
        }));
    }

    for (i, task) in tasks.into_iter().enumerate() {
        let (status, body) = task.await.unwrap();
        assert_eq!(status, 200);
        if i % 2 == 0 {
            assert_eq!(body, "Backend up ✅");
        } else {
            assert_eq!(body, "{\"status\":\"ok\"}");
        }
    }

    assert_eq!(server.sink.lines_at(RecordLevel::Dev).len(), 20);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let server = common::start_server("SANDBOX").await;
    server.shutdown.trigger();

    let result = tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server did not stop")
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_large_body_does_not_change_route_response() {
    let server = common::start_server("SANDBOX").await;
    server.sink.clear();

    let res = common::client()
        .get(server.url("/"))
        .body(vec![b'x'; 3 * 1024 * 1024])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Backend up ✅");

    let dev = server.sink.lines_at(RecordLevel::Dev);
    assert_eq!(dev.len(), 1);
    assert!(!dev[0].contains("\"body\""));

    server.shutdown.trigger();
}
