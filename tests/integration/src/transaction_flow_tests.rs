//! End-to-end create/list flow over HTTP.

use crate::test_utils::TestServer;
use calldata_core::{estimate_arbitrum_fee, estimate_op_stack_fee, Algorithm, TransactionRecord};
use reqwest::StatusCode;
use serde_json::Value;

const CLIENT_FIELDS: [&str; 5] = ["Time", "OutputSize", "ArbitrumPrice", "OptimismPrice", "BasePrice"];

#[tokio::test]
async fn test_health_probe() {
    let server = TestServer::start().await;
    let body: Value = server
        .client
        .get(server.url("/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_create_then_list_in_insertion_order() {
    let server = TestServer::start().await;
    assert!(server.list().await.is_empty());

    for text in ["first", "second", "third"] {
        let response = server.create(text).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let records = server.list().await;
    let texts: Vec<&str> = records.iter().map(|r| r["text"].as_str().unwrap()).collect();
    assert_eq!(texts, ["first", "second", "third"]);
}

#[tokio::test]
async fn test_created_record_matches_listed_record() {
    let server = TestServer::start().await;

    let created: Value = server.create("round trip").await.json().await.unwrap();
    let listed = server.list().await;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed.last().unwrap(), &created);
}

#[tokio::test]
async fn test_record_wire_format() {
    let server = TestServer::start().await;
    let text = "ünïcödé calldata";

    let body: Value = server.create(text).await.json().await.unwrap();
    let obj = body.as_object().unwrap();

    assert_eq!(obj["inputSize"], text.len());
    assert!(obj["date"].is_string());
    for algorithm in Algorithm::ALL {
        for suffix in CLIENT_FIELDS {
            let key = format!("{}{}", algorithm.as_str(), suffix);
            assert!(obj.contains_key(&key), "missing field {key}");
        }
    }

    let record: TransactionRecord = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(record.text(), text);
    for algorithm in Algorithm::ALL {
        let m = record.metrics(algorithm);
        let arbitrum = estimate_arbitrum_fee(m.output_size);
        let op_stack = estimate_op_stack_fee(m.output_size);
        assert!((m.arbitrum_fee - arbitrum).abs() < 1e-18);
        assert!((m.op_stack_fee - op_stack).abs() < 1e-18);
        assert!((m.base_fee - op_stack).abs() < 1e-18);
    }
}

#[tokio::test]
async fn test_trailing_slash_optional() {
    let server = TestServer::start().await;
    let response = server
        .client
        .post(server.url("/transactions"))
        .json(&serde_json::json!({ "text": "no slash" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listed: Vec<Value> = server
        .client
        .get(server.url("/transactions"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_failures_leave_store_untouched() {
    let server = TestServer::start().await;
    server.create("kept").await;

    let oversized = server.create(&"x".repeat(215)).await;
    assert_eq!(oversized.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = oversized.json().await.unwrap();
    assert_eq!(body["algorithm"], "rsa");

    let missing = server
        .client
        .post(server.url("/transactions/"))
        .json(&serde_json::json!({ "txt": "typo" }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    let records = server.list().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["text"], "kept");
    assert_eq!(server.state.store.len(), 1);
}

#[tokio::test]
async fn test_body_limit_enforced() {
    let config = calldata_core::ServiceConfig {
        max_body_bytes: 64,
        ..Default::default()
    };
    let server = TestServer::start_with(config).await;

    let response = server.create(&"y".repeat(128)).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "PayloadTooLarge");
    assert!(server.state.store.is_empty());
}
