use crate::helpers::{
    get_error_message, get_json_response_body, register, TestApp,
};

use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_200_for_registered_members(app: &mut TestApp) {
    let schema = json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "id": { "type": "integer", "minimum": 1 },
        "name": { "type": "string", "minLength": 1, "maxLength": 255 }
      },
      "required": ["id", "name"]
    });

    for name in ["Ted", "Dougal"].iter() {
        let id = register(app, name).await;
        let response = app.get_member(&id.to_string()).await;

        assert_eq!(
            response.status().as_u16(),
            200,
            "Failed to get member: {:?}",
            response
        );

        let response_body = get_json_response_body(response).await;
        assert!(
            jsonschema::is_valid(&schema, &response_body),
            "response does not match schema"
        );
        assert_eq!(response_body, json!({ "id": id, "name": name }));
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_for_unknown_id(app: &mut TestApp) {
    register(app, "Ted").await;

    let response = app.get_member("2").await;
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(get_error_message(response).await, "Member not found: 2");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_for_invalid_id(app: &mut TestApp) {
    for member_id in ["abc", "0", "-1", "1.5"].iter() {
        let response = app.get_member(member_id).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for member id: {member_id}"
        );
    }
}
