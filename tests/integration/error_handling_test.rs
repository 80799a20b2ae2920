//! Failures surface to the calling test as errors, never as retries.

use super::{init_test_env, test_base};
use rest_harness::base::{RESPONSE_STATUS_CODE_404, RESPONSE_STATUS_CODE_500};
use rest_harness::{RequestError, RestClient};

#[test]
fn test_not_found_is_a_response_not_an_error() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/users/23")
        .with_status(404)
        .with_body("{}")
        .create();

    let base = test_base(&server);
    let client = base.client();

    let response = client.get(&base.url("/api/users/23")).unwrap();
    assert_eq!(client.status_code(&response), RESPONSE_STATUS_CODE_404);
    assert!(client.response_json(&response).unwrap().is_empty());

    mock.assert();
}

#[test]
fn test_server_error_is_sent_once() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/unstable")
        .with_status(500)
        .expect(1)
        .create();

    let base = test_base(&server);
    let client = base.client();

    let response = client.get(&base.url("/api/unstable")).unwrap();
    assert_eq!(client.status_code(&response), RESPONSE_STATUS_CODE_500);

    mock.assert();
}

#[test]
fn test_html_body_fails_json_parsing() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html><body>hello</body></html>")
        .create();

    let base = test_base(&server);
    let client = base.client();

    let response = client.get(&base.url("/")).unwrap();
    assert!(matches!(
        client.response_json(&response),
        Err(RequestError::JsonParse(_))
    ));

    mock.assert();
}

#[test]
fn test_unreachable_host_is_network_error() {
    init_test_env();
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = RestClient::new();
    let result = client.get(&format!("http://127.0.0.1:{}/api/users", port));
    assert!(
        matches!(result, Err(RequestError::NetworkError(_))),
        "got {:?}",
        result
    );
}

#[test]
fn test_unsupported_scheme_is_rejected() {
    init_test_env();
    let result = RestClient::new().delete("ftp://example.com/api/users/2");
    assert!(matches!(result, Err(RequestError::UnsupportedProtocol(_))));
}
