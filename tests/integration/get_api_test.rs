//! Listing endpoint: GET /api/users?page=2

use super::test_base;
use mockito::Matcher;
use rest_harness::base::RESPONSE_STATUS_CODE_200;
use rest_harness::client::Headers;
use rest_harness::json_path::{value_by_jpath, value_in_object};

const USERS_PAGE_2: &str = r#"{
    "page": 2,
    "per_page": 6,
    "total": 12,
    "total_pages": 2,
    "data": [
        {"id": 7, "email": "michael.lawson@reqres.in", "first_name": "Eve", "last_name": "Lawson"},
        {"id": 8, "email": "lindsay.ferguson@reqres.in", "first_name": "Lindsay", "last_name": "Ferguson"}
    ],
    "support": {"url": "https://reqres.in/#support-heading", "text": "Thanks!"}
}"#;

fn mock_users_page(server: &mut mockito::ServerGuard) -> mockito::Mock {
    server
        .mock("GET", "/api/users")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(200)
        .with_header("content-type", "application/json; charset=utf-8")
        .with_body(USERS_PAGE_2)
        .create()
}

#[test]
fn test_get_users_page_returns_200_and_first_name() {
    let mut server = mockito::Server::new();
    let mock = mock_users_page(&mut server);

    let base = test_base(&server);
    let client = base.client();

    let response = client.get(&base.url("/api/users?page=2")).unwrap();
    assert_eq!(
        client.status_code(&response),
        RESPONSE_STATUS_CODE_200,
        "response status code is not 200"
    );

    let json = client.response_json(&response).unwrap();
    let first_name = value_in_object(&json, "data[0]/first_name").unwrap();
    assert_eq!(first_name, "Eve", "first name is not Eve");

    mock.assert();
}

#[test]
fn test_get_users_page_with_headers() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/users")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .match_header("accept", "application/json")
        .with_status(200)
        .with_body(USERS_PAGE_2)
        .create();

    let base = test_base(&server);
    let client = base.client();

    let mut headers = Headers::new();
    headers.insert("Accept".to_string(), "application/json".to_string());

    let response = client
        .get_with_headers(&base.url("/api/users?page=2"), &headers)
        .unwrap();
    assert_eq!(client.status_code(&response), RESPONSE_STATUS_CODE_200);

    let json = serde_json::Value::Object(client.response_json(&response).unwrap());
    assert_eq!(value_by_jpath(&json, "total_pages").unwrap(), "2");
    assert_eq!(value_by_jpath(&json, "data[1]/last_name").unwrap(), "Ferguson");

    mock.assert();
}

#[test]
fn test_get_response_keeps_headers() {
    let mut server = mockito::Server::new();
    let mock = mock_users_page(&mut server);

    let base = test_base(&server);
    let response = base.client().get(&base.url("api/users?page=2")).unwrap();

    assert!(response.is_success());
    assert_eq!(
        response.content_type(),
        Some("application/json; charset=utf-8")
    );

    mock.assert();
}
