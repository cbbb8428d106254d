use crate::helpers::{get_json_response_body, register, TestApp};

use member_registry::domain::{Member, MemberName};
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_empty_list_when_no_members(app: &mut TestApp) {
    let response = app.get_members().await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        get_json_response_body(response).await,
        json!({ "members": [] })
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_list_members_in_registration_order(app: &mut TestApp) {
    let names = ["Ted", "Dougal", "Jack"];
    let mut ids = vec![];
    for name in names.iter() {
        ids.push(register(app, name).await);
    }

    let response = app.get_members().await;
    assert_eq!(response.status().as_u16(), 200);

    let expected: Vec<_> = ids
        .iter()
        .zip(names.iter())
        .map(|(id, name)| json!({ "id": id, "name": name }))
        .collect();
    assert_eq!(
        get_json_response_body(response).await,
        json!({ "members": expected })
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_include_members_registered_through_the_service(
    app: &mut TestApp,
) {
    let id = app
        .membership_service
        .register(Member::new(
            MemberName::parse("Mrs Doyle".to_owned()).unwrap(),
        ))
        .await
        .unwrap();

    let response = app.get_members().await;
    assert_eq!(
        get_json_response_body(response).await,
        json!({ "members": [{ "id": *id.as_ref(), "name": "Mrs Doyle" }] })
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_not_list_cleared_members(app: &mut TestApp) {
    register(app, "Ted").await;
    app.member_store.write().await.clear_store();

    let response = app.get_members().await;
    assert_eq!(
        get_json_response_body(response).await,
        json!({ "members": [] })
    );

    assert_eq!(register(app, "Ted").await, 2, "Ids should not be reused");
}
