//! Update endpoint: PUT /api/users/2

use super::test_base;
use mockito::Matcher;
use rest_harness::base::RESPONSE_STATUS_CODE_200;
use rest_harness::json_path::value_in_object;
use rest_harness::User;
use serde_json::json;

#[test]
fn test_put_user_returns_200_and_reflects_update() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("PUT", "/api/users/2")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(
            json!({"name": "Anthony", "job": "automation tester"}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"name":"Anthony","job":"automation tester","updatedAt":"2026-10-18T09:15:02.004Z"}"#,
        )
        .create();

    let base = test_base(&server);
    let client = base.client();

    let payload = User::new("Anthony", "automation tester").to_json().unwrap();
    let response = client
        .put(&base.url("/api/users/2"), &payload, &base.json_headers())
        .unwrap();
    assert_eq!(
        client.status_code(&response),
        RESPONSE_STATUS_CODE_200,
        "response status code is not 200"
    );

    let json = client.response_json(&response).unwrap();
    assert_eq!(value_in_object(&json, "name").unwrap(), "Anthony", "name is not same");
    assert_eq!(value_in_object(&json, "job").unwrap(), "automation tester");

    mock.assert();
}
