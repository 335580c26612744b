#![allow(clippy::unwrap_used)]
// Integration tests for `DeviceClient` using wiremock.

use std::time::Duration;

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use loquat_api::{
    ApiKeyRequest, Command, ConnectRequest, DeviceClient, Error, Payload, Transport,
    TransportConfig,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, DeviceClient) {
    let server = MockServer::start().await;
    let config = TransportConfig::new(Url::parse(&server.uri()).unwrap());
    let client = DeviceClient::new(config).unwrap();
    (server, client)
}

// ── GET commands ────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_scan_result() {
    let (server, client) = setup().await;

    let body = json!([{ "ssid": "Home", "bars": 3, "security": "WPA2" }]);
    Mock::given(method("GET"))
        .and(path("/get_scan_result"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.request(Command::GetScanResult, None).await.unwrap();

    assert!(resp.is_ok());
    let parsed: serde_json::Value = serde_json::from_slice(&resp.body).unwrap();
    assert_eq!(parsed, body);
}

#[tokio::test]
async fn test_sends_fixed_user_agent() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .and(header("user-agent", "LoquatClient/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.request(Command::Status, None).await.unwrap();
    assert_eq!(resp.status, 200);
}

#[tokio::test]
async fn test_get_ignores_payload() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/get_net_info"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let payload = Payload::from(ApiKeyRequest::build(Some("k"), Some("s")).unwrap());
    let resp = client
        .request(Command::GetNetInfo, Some(&payload))
        .await
        .unwrap();
    assert!(resp.is_ok());
}

// ── POST commands ───────────────────────────────────────────────────

#[tokio::test]
async fn test_connect_posts_json_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/connect"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "ssid": "Home",
            "psk": "secret123",
            "security": "WPA2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("connecting"))
        .expect(1)
        .mount(&server)
        .await;

    let payload = Payload::from(
        ConnectRequest::build(Some("Home"), Some("secret123"), None).unwrap(),
    );
    let resp = client.request(Command::Connect, Some(&payload)).await.unwrap();

    assert!(resp.is_ok());
    assert_eq!(resp.text(), "connecting");
}

#[tokio::test]
async fn test_apikey_posts_json_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/apikey"))
        .and(body_json(json!({ "apikey": "sk-1", "aiserver": "ai.example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_string("saved"))
        .expect(1)
        .mount(&server)
        .await;

    let payload = Payload::from(ApiKeyRequest::build(Some("sk-1"), Some("ai.example.com")).unwrap());
    let resp = client.request(Command::ApiKey, Some(&payload)).await.unwrap();
    assert_eq!(resp.text(), "saved");
}

#[tokio::test]
async fn test_post_without_payload_sends_empty_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/connect"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.request(Command::Connect, None).await.unwrap();
    assert!(resp.body.is_empty());
}

// ── Status and redirect handling ────────────────────────────────────

#[tokio::test]
async fn test_non_200_is_returned_not_raised() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/get_status"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let resp = client.request(Command::GetStatus, None).await.unwrap();

    assert_eq!(resp.status, 500);
    assert!(!resp.is_ok());
    assert_eq!(resp.text(), "boom");
}

#[tokio::test]
async fn test_follows_redirects() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("location", format!("{}/v2/status", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"ok\":true}"))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.request(Command::Status, None).await.unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.text(), "{\"ok\":true}");
}

// ── Failure modes ───────────────────────────────────────────────────

#[tokio::test]
async fn test_timeout_is_reported() {
    let server = MockServer::start().await;
    let config = TransportConfig::new(Url::parse(&server.uri()).unwrap())
        .with_timeouts(Duration::from_millis(100), Duration::from_millis(100));
    let client = DeviceClient::new(config).unwrap();

    Mock::given(method("GET"))
        .and(path("/get_scan_result"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let result = client.request(Command::GetScanResult, None).await;

    match result {
        Err(err @ Error::Timeout { .. }) => {
            assert_eq!(err.to_string(), "Request timed out after 100ms");
            let cause = std::error::Error::source(&err).unwrap();
            assert!(cause.downcast_ref::<reqwest::Error>().is_some());
        }
        other => panic!("expected Timeout error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_long_timeout_applies_to_slow_commands_only() {
    let server = MockServer::start().await;
    let config = TransportConfig::new(Url::parse(&server.uri()).unwrap())
        .with_timeouts(Duration::from_millis(100), Duration::from_secs(3));
    let client = DeviceClient::new(config).unwrap();

    let delayed = ResponseTemplate::new(200)
        .set_body_string("ok")
        .set_delay(Duration::from_millis(500));
    Mock::given(method("POST"))
        .and(path("/connect"))
        .respond_with(delayed.clone())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(delayed)
        .mount(&server)
        .await;

    let connect = client.request(Command::Connect, None).await.unwrap();
    assert_eq!(connect.status, 200);
    assert_eq!(connect.text(), "ok");

    let status = client.request(Command::Status, None).await;
    assert!(
        matches!(status, Err(Error::Timeout { timeout, .. }) if timeout == Duration::from_millis(100)),
        "expected Timeout error, got: {status:?}"
    );
}

#[tokio::test]
async fn test_connection_refused() {
    // Reserve a free port, then release it so nothing is listening.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = TransportConfig::for_device("127.0.0.1", port).unwrap();
    let client = DeviceClient::new(config).unwrap();

    let result = client.request(Command::Status, None).await;

    match result {
        Err(err @ Error::Transport(_)) => assert!(err.is_connect()),
        other => panic!("expected Transport error, got: {other:?}"),
    }
}
