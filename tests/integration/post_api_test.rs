//! Create endpoint: POST /api/users

use super::test_base;
use mockito::Matcher;
use rest_harness::base::RESPONSE_STATUS_CODE_201;
use rest_harness::json_path::value_in_object;
use rest_harness::User;
use serde_json::json;

#[test]
fn test_post_user_returns_201_and_echoes_fields() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/users")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"name": "Anthony", "job": "tester"})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"name":"Anthony","job":"tester","id":"481","createdAt":"2026-10-18T09:12:44.120Z"}"#)
        .create();

    let base = test_base(&server);
    let client = base.client();

    let user = User::new("Anthony", "tester");
    let payload = user.to_json().unwrap();

    let response = client
        .post(&base.url("/api/users"), &payload, &base.json_headers())
        .unwrap();
    assert_eq!(
        client.status_code(&response),
        RESPONSE_STATUS_CODE_201,
        "status code is not 201"
    );

    let json = client.response_json(&response).unwrap();
    assert_eq!(value_in_object(&json, "name").unwrap(), "Anthony", "name is not same");
    assert_eq!(value_in_object(&json, "job").unwrap(), "tester", "job is not same");

    let echoed: User = serde_json::from_value(serde_json::Value::Object(json)).unwrap();
    assert_eq!(echoed, user);

    mock.assert();
}

#[test]
fn test_post_without_content_type_still_sends_json() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/users")
        .match_header("content-type", "application/json")
        .with_status(201)
        .with_body(r#"{"name":"Anthony","job":"tester"}"#)
        .create();

    let base = test_base(&server);
    let client = base.client();

    let payload = User::new("Anthony", "tester").to_json().unwrap();
    let response = client
        .post(&base.url("/api/users"), &payload, &Default::default())
        .unwrap();

    assert_eq!(client.status_code(&response), RESPONSE_STATUS_CODE_201);
    mock.assert();
}
