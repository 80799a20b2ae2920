//! Delete endpoint: DELETE /api/users/2

use super::test_base;
use rest_harness::base::RESPONSE_STATUS_CODE_204;
use rest_harness::RequestError;

#[test]
fn test_delete_user_returns_204_with_empty_body() {
    let mut server = mockito::Server::new();
    let mock = server.mock("DELETE", "/api/users/2").with_status(204).create();

    let base = test_base(&server);
    let client = base.client();

    let response = client.delete(&base.url("/api/users/2")).unwrap();
    assert_eq!(client.status_code(&response), RESPONSE_STATUS_CODE_204);
    assert!(response.body.is_empty());

    // Nothing to decode: an empty body is not a JSON object.
    assert!(matches!(
        client.response_json(&response),
        Err(RequestError::JsonParse(_))
    ));

    mock.assert();
}
