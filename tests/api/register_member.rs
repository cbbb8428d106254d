use crate::helpers::{
    get_error_message, get_json_response_body, register, TestApp,
};

use member_registry::domain::MemberStore;
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_201_with_assigned_id(app: &mut TestApp) {
    let response = app.post_member(&json!({ "name": "spring" })).await;
    assert_eq!(response.status().as_u16(), 201);

    let schema = json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "id": { "type": "integer", "minimum": 1 }
      },
      "required": ["id"]
    });

    let response_body = get_json_response_body(response).await;
    assert!(
        jsonschema::is_valid(&schema, &response_body),
        "response does not match schema: {response_body}"
    );
    assert_eq!(response_body, json!({ "id": 1 }));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_409_for_duplicate_names(app: &mut TestApp) {
    assert_eq!(register(app, "spring").await, 1);

    let response = app.post_member(&json!({ "name": "spring" })).await;
    assert_eq!(
        response.status().as_u16(),
        409,
        "Duplicate registration should conflict"
    );
    assert_eq!(
        get_error_message(response).await,
        "Member already exists: spring"
    );
    assert_eq!(
        app.member_store.read().await.find_all().await.unwrap().len(),
        1,
        "Rejected registration must not be stored"
    );

    assert_eq!(register(app, "spring2").await, 2);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_for_invalid_names(app: &mut TestApp) {
    let test_cases = [
        ("".to_string(), "Member name cannot be empty"),
        ("a".repeat(256), "Max name length is 255 characters"),
    ];

    for (name, message) in test_cases.iter() {
        let response = app.post_member(&json!({ "name": name })).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {name:?}"
        );
        assert_eq!(get_error_message(response).await, *message);
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_422_for_malformed_input(app: &mut TestApp) {
    let test_cases = [
        json!({}),
        json!({ "name": 42 }),
        json!({ "nickname": "spring" }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_member(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            422,
            "Failed for input: {:?}",
            test_case
        );
        assert!(
            !get_error_message(response).await.is_empty(),
            "Error body should carry a message for input: {:?}",
            test_case
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_json_error_for_unparseable_body(app: &mut TestApp) {
    let response = app
        .http_client
        .post(format!("{}/members", &app.address))
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
    assert!(!get_error_message(response).await.is_empty());

    let response = app
        .http_client
        .post(format!("{}/members", &app.address))
        .body("name=spring")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 415);
    assert!(!get_error_message(response).await.is_empty());
}
