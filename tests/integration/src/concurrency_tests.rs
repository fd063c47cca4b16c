//! Concurrent creation against the shared in-memory store.

use crate::test_utils::TestServer;
use reqwest::StatusCode;
use std::collections::HashSet;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_all_stored() {
    let server = std::sync::Arc::new(TestServer::start().await);
    let request_count = 8;

    let mut handles = Vec::new();
    for i in 0..request_count {
        let server = std::sync::Arc::clone(&server);
        handles.push(tokio::spawn(async move {
            server.create(&format!("concurrent-{i}")).await.status()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    let records = server.list().await;
    assert_eq!(records.len(), request_count);

    let texts: HashSet<String> = records
        .iter()
        .map(|r| r["text"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(texts.len(), request_count);
    for record in &records {
        assert_eq!(record["rsaOutputSize"], 256);
    }
}
