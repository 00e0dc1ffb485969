use crate::helpers::{spawn_app, start_server, BrokenStateRepository};
use chrono::DateTime;
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

#[tokio::test]
async fn health_reports_a_connected_store() {
    let app = spawn_app().await;

    let response = app.get_health().await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["server"], json!("running"));
    assert_eq!(body["mongo"], json!("connected"));

    let time = body["time"].as_str().unwrap();
    DateTime::parse_from_rfc3339(time).expect("time is not valid ISO 8601");
}

#[tokio::test]
async fn health_reports_a_disconnected_store() {
    let app = spawn_app().await;
    app.repository.connected.store(false, Ordering::SeqCst);

    let response = app.get_health().await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["mongo"], json!("disconnected"));
}

#[tokio::test]
async fn health_returns_the_error_payload_when_the_state_query_fails() {
    let (address, api_client, _chat_server, _email_server) =
        start_server(Arc::new(BrokenStateRepository)).await;

    let response = api_client
        .get(&format!("{}/health", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], json!("error"));
    assert_eq!(body["message"], json!("Health check failed"));
    assert!(!body["error"].as_str().unwrap().is_empty());
}
