use crate::helpers::{spawn_app, TestApp};
use serde_json::json;
use std::sync::atomic::Ordering;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn valid_submission() -> serde_json::Value {
    json!({
        "name": "Asha",
        "email": "asha@example.com",
        "number": "9876543210",
        "message": "Interested in a wedding shoot",
        "occasion": "Wedding"
    })
}

async fn mount_chat_mock(app: &TestApp, status: u16, expected_hits: u64) {
    Mock::given(method("POST"))
        .and(path(TestApp::chat_messages_path()))
        .respond_with(ResponseTemplate::new(status))
        .expect(expected_hits)
        .mount(&app.chat_server)
        .await;
}

async fn mount_email_mock(app: &TestApp, status: u16, expected_hits: u64) {
    Mock::given(method("POST"))
        .and(path("/email"))
        .respond_with(ResponseTemplate::new(status))
        .expect(expected_hits)
        .mount(&app.email_server)
        .await;
}

#[tokio::test]
async fn submit_returns_200_and_the_success_payload_for_a_valid_form() {
    let app = spawn_app().await;
    mount_chat_mock(&app, 201, 1).await;
    mount_email_mock(&app, 200, 1).await;

    let response = app.post_contact(valid_submission()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Form submitted successfully!"));
}

#[tokio::test]
async fn submit_persists_exactly_one_inquiry() {
    let app = spawn_app().await;
    mount_chat_mock(&app, 201, 1).await;
    mount_email_mock(&app, 200, 1).await;

    app.post_contact(valid_submission()).await;

    let stored = app.repository.stored();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Asha");
    assert_eq!(stored[0].email, "asha@example.com");
    assert_eq!(stored[0].message, "Interested in a wedding shoot");
}

#[tokio::test]
async fn submit_notifies_both_channels_with_the_submitted_fields() {
    let app = spawn_app().await;
    mount_chat_mock(&app, 201, 1).await;
    mount_email_mock(&app, 200, 1).await;

    app.post_contact(valid_submission()).await;

    let chat_body = app.sole_chat_notification_body().await;
    assert!(chat_body.contains("Asha"));
    assert!(chat_body.contains("asha@example.com"));
    assert!(chat_body.contains("9876543210"));
    assert!(chat_body.contains("Wedding"));
    assert!(chat_body.contains("Interested in a wedding shoot"));

    let email_request = app.sole_email_request().await;
    assert!(email_request["Subject"].as_str().unwrap().contains("Asha"));
    let html_body = email_request["HtmlBody"].as_str().unwrap();
    assert!(html_body.contains("Asha"));
    assert!(html_body.contains("asha@example.com"));
    assert!(html_body.contains("9876543210"));
    assert!(html_body.contains("Wedding"));
    assert!(html_body.contains("Interested in a wedding shoot"));
}

#[tokio::test]
async fn submit_renders_fallbacks_when_optional_fields_are_absent() {
    let app = spawn_app().await;
    mount_chat_mock(&app, 201, 1).await;
    mount_email_mock(&app, 200, 1).await;

    let response = app
        .post_contact(json!({
            "name": "Asha",
            "email": "asha@example.com",
            "message": "Interested in a wedding shoot"
        }))
        .await;

    assert_eq!(200, response.status().as_u16());

    let chat_body = app.sole_chat_notification_body().await;
    assert!(chat_body.contains("Number: Not specified"));
    assert!(chat_body.contains("Occasion: Not specified"));

    let email_request = app.sole_email_request().await;
    let html_body = email_request["HtmlBody"].as_str().unwrap();
    assert!(html_body.contains("Not provided"));
    assert!(html_body.contains("Not specified"));
}

#[tokio::test]
async fn submit_returns_the_generic_failure_when_persistence_fails() {
    let app = spawn_app().await;
    app.repository.fail_create.store(true, Ordering::SeqCst);
    // Neither channel may be touched when the write fails
    mount_chat_mock(&app, 201, 0).await;
    mount_email_mock(&app, 200, 0).await;

    let response = app.post_contact(valid_submission()).await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Error processing request"));
}

#[tokio::test]
async fn submit_keeps_the_record_and_skips_mail_when_the_chat_channel_fails() {
    let app = spawn_app().await;
    mount_chat_mock(&app, 500, 1).await;
    mount_email_mock(&app, 200, 0).await;

    let response = app.post_contact(valid_submission()).await;

    assert_eq!(500, response.status().as_u16());
    // No rollback: the inquiry stays persisted
    assert_eq!(app.repository.stored().len(), 1);
}

#[tokio::test]
async fn submit_returns_the_generic_failure_when_the_mail_channel_fails() {
    let app = spawn_app().await;
    mount_chat_mock(&app, 201, 1).await;
    mount_email_mock(&app, 500, 1).await;

    let response = app.post_contact(valid_submission()).await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(app.repository.stored().len(), 1);
}

#[tokio::test]
async fn submit_returns_the_generic_failure_when_required_fields_are_missing() {
    let app = spawn_app().await;
    mount_chat_mock(&app, 201, 0).await;
    mount_email_mock(&app, 200, 0).await;

    let response = app
        .post_contact(json!({
            "email": "asha@example.com",
            "message": "Interested in a wedding shoot"
        }))
        .await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Error processing request"));
    assert_eq!(app.repository.stored().len(), 0);
}

#[tokio::test]
async fn submission_route_allows_the_configured_origin() {
    let app = spawn_app().await;
    mount_chat_mock(&app, 201, 1).await;
    mount_email_mock(&app, 200, 1).await;

    let response = app
        .api_client
        .post(&format!("{}/contact", &app.address))
        .header("Origin", "http://localhost:3000")
        .json(&valid_submission())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
}
