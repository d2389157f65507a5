use crate::suite::{trigger_json, TestApp, AUTHORIZATION};
use mayan_edms_provider::{RemoteError, TriggerApi};
use reqwest::{Method, StatusCode};
use serde_json::json;
use std::collections::HashMap;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn fetch_decodes_trigger_with_event_type() {
    // Arrange
    let application = TestApp::spawn(HashMap::new()).await;
    Mock::given(method("GET"))
        .and(path(
            application.path("workflow_templates/5/transitions/7/triggers/42/"),
        ))
        .and(header("Authorization", AUTHORIZATION))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(trigger_json(
                42,
                "tag.attach",
                "Tag attached",
            )),
        )
        .expect(1)
        .mount(application.server())
        .await;
    // Act
    let trigger = application
        .client()
        .fetch(5, 7, 42)
        .await
        .expect("Failed to fetch trigger");
    // Assert
    assert_eq!(trigger.id, 42);
    assert_eq!(trigger.event_type.id, "tag.attach");
    assert_eq!(trigger.event_type.label, "Tag attached");
    assert_eq!(trigger.event_type.name, "tag_attach");
}

#[tokio::test]
async fn create_posts_only_the_event_type_id() {
    // Arrange
    let application = TestApp::spawn(HashMap::new()).await;
    Mock::given(method("POST"))
        .and(path(
            application.path("workflow_templates/5/transitions/7/triggers/"),
        ))
        .and(header("Authorization", AUTHORIZATION))
        .and(body_json(json!({ "event_type_id": "tag.attach" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(trigger_json(
                42,
                "tag.attach",
                "Tag attached",
            )),
        )
        .expect(1)
        .mount(application.server())
        .await;
    // Act
    let trigger = application
        .client()
        .create(5, 7, "tag.attach")
        .await
        .expect("Failed to create trigger");
    // Assert
    assert_eq!(trigger.id, 42);
    assert_eq!(trigger.event_type.id, "tag.attach");
}

#[tokio::test]
async fn create_rejection_surfaces_status_and_body() {
    // Arrange
    let application = TestApp::spawn(HashMap::new()).await;
    Mock::given(method("POST"))
        .and(path(
            application.path("workflow_templates/5/transitions/7/triggers/"),
        ))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"event_type_id":["Invalid pk \"nope\""]}"#),
        )
        .expect(1)
        .mount(application.server())
        .await;
    // Act
    let err = application
        .client()
        .create(5, 7, "nope")
        .await
        .expect_err("Expected the server to reject the trigger");
    // Assert
    match err {
        RemoteError::Status { status, body, .. } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(body.contains("Invalid pk"));
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_of_missing_trigger_is_not_found() {
    // Arrange
    let application = TestApp::spawn(HashMap::new()).await;
    Mock::given(method("GET"))
        .and(path(
            application.path("workflow_templates/5/transitions/7/triggers/99/"),
        ))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Not found." })))
        .mount(application.server())
        .await;
    // Act
    let err = application
        .client()
        .fetch(5, 7, 99)
        .await
        .expect_err("Expected not found");
    // Assert
    assert!(err.is_not_found());
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn fetch_with_malformed_body_is_a_decode_error() {
    // Arrange
    let application = TestApp::spawn(HashMap::new()).await;
    Mock::given(method("GET"))
        .and(path(
            application.path("workflow_templates/5/transitions/7/triggers/42/"),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(application.server())
        .await;
    // Act
    let err = application
        .client()
        .fetch(5, 7, 42)
        .await
        .expect_err("Expected decode failure");
    // Assert
    assert!(matches!(err, RemoteError::Decode { .. }));
}

#[tokio::test]
async fn delete_issues_delete_to_trigger_path() {
    // Arrange
    let application = TestApp::spawn(HashMap::new()).await;
    Mock::given(method("DELETE"))
        .and(path(
            application.path("workflow_templates/5/transitions/7/triggers/42/"),
        ))
        .and(header("Authorization", AUTHORIZATION))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(application.server())
        .await;
    // Act
    let result = application.client().delete(5, 7, 42).await;
    // Assert
    assert!(result.is_ok());
}

#[tokio::test]
async fn transient_failures_are_retried() {
    // Arrange
    let application = TestApp::spawn(HashMap::from([("MAX_RETRIES", "1")])).await;
    Mock::given(method("GET"))
        .and(path(
            application.path("workflow_templates/5/transitions/7/triggers/42/"),
        ))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(application.server())
        .await;
    // Act
    let err = application
        .client()
        .fetch(5, 7, 42)
        .await
        .expect_err("Expected service unavailable");
    // Assert
    assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
}

#[tokio::test]
async fn create_is_sent_once_on_transient_failure() {
    // Arrange
    let application = TestApp::spawn(HashMap::from([("MAX_RETRIES", "2")])).await;
    Mock::given(method("POST"))
        .and(path(
            application.path("workflow_templates/5/transitions/7/triggers/"),
        ))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(application.server())
        .await;
    // Act
    let err = application
        .client()
        .create(5, 7, "tag.attach")
        .await
        .expect_err("Expected service unavailable");
    // Assert
    assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    assert_eq!(application.request_count().await, 1);
}

#[tokio::test]
async fn unencodable_body_fails_before_sending() {
    // Arrange
    let application = TestApp::spawn(HashMap::new()).await;
    // JSON objects only take string keys
    let body = HashMap::from([((5, 7), "tag.attach")]);
    // Act
    let err = application
        .client()
        .perform_request("workflow_templates/5/transitions/7/triggers/", Method::POST, Some(&body))
        .await
        .expect_err("Expected encoding failure");
    // Assert
    assert!(matches!(err, RemoteError::Encode { .. }));
    assert_eq!(application.request_count().await, 0);
}
