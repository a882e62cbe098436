//! Shorten endpoint contract tests using wiremock.
//!
//! These verify the wire shape of the request (method, path, header,
//! JSON body) and the treatment of the plain-text response body.

use quicklink::shortener::ShortenerClient;
use quicklink::traits::{ShortenTransport, TransportError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_shorten_success_returns_raw_token_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/shorten"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({"originalUrl": "example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_string("abc123"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ShortenerClient::with_base_url(server.uri());
    let token = client.shorten("example.com").await.expect("expected token");

    // The body is opaque text, never parsed as JSON.
    assert_eq!(token, "abc123");
}

#[tokio::test]
async fn test_shorten_accepts_any_2xx() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(ResponseTemplate::new(201).set_body_string("created1"))
        .mount(&server)
        .await;

    let client = ShortenerClient::with_base_url(server.uri());
    assert_eq!(client.shorten("example.com").await.unwrap(), "created1");
}

#[tokio::test]
async fn test_shorten_non_2xx_is_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = ShortenerClient::with_base_url(server.uri());
    let result = client.shorten("example.com").await;

    match result {
        Err(TransportError::ServerError { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected ServerError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_shorten_connection_refused_is_transport_error() {
    let client = ShortenerClient::with_base_url("http://127.0.0.1:1".to_string());
    let result = client.shorten("example.com").await;
    assert!(matches!(
        result,
        Err(TransportError::ConnectionFailed(_)) | Err(TransportError::Other(_))
    ));
}

#[tokio::test]
async fn test_shorten_sends_untrimmed_candidate() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/shorten"))
        .and(body_json(serde_json::json!({"originalUrl": " example.com "})))
        .respond_with(ResponseTemplate::new(200).set_body_string("t"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ShortenerClient::with_base_url(server.uri());
    assert!(client.shorten(" example.com ").await.is_ok());
}
