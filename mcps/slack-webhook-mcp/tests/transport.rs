//! Integration tests for the reqwest webhook transport
//!
//! A local `wiremock` server stands in for Slack. The transport is exercised
//! directly because the sender only accepts `hooks.slack.com` URLs.

use std::time::Duration;

use serde_json::json;
use slack_webhook_mcp::webhook::{
    MessageFormat, ReqwestTransport, SendError, SendRequest, SlackPayload, TransportError,
    WebhookTransport,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOOK_PATH: &str = "/services/TEST/WEBHOOK/URL";

fn payload_bytes(request: &SendRequest) -> Vec<u8> {
    serde_json::to_vec(&SlackPayload::from_request(request)).unwrap()
}

/// Bind then drop a listener so nothing is accepting on its port
fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[tokio::test]
async fn posts_json_and_returns_ok_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(HOOK_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "text": "*Bold text*", "mrkdwn": true })))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new();
    let request = SendRequest::new("*Bold text*");
    let url = format!("{}{}", server.uri(), HOOK_PATH);

    let response = transport
        .post_json(&url, payload_bytes(&request))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "ok");
    assert!(response.is_success());
}

#[tokio::test]
async fn text_format_omits_mrkdwn_on_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(HOOK_PATH))
        .and(body_json(json!({ "text": "Plain text" })))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new();
    let request = SendRequest::new("Plain text").with_format(MessageFormat::Text);
    let url = format!("{}{}", server.uri(), HOOK_PATH);

    let response = transport
        .post_json(&url, payload_bytes(&request))
        .await
        .unwrap();

    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn error_status_body_is_returned_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("invalid_token"))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new();
    let url = format!("{}{}", server.uri(), HOOK_PATH);

    let response = transport
        .post_json(&url, payload_bytes(&SendRequest::new("hi")))
        .await
        .unwrap();

    assert_eq!(response.status, 403);
    assert_eq!(response.body, "invalid_token");
    assert!(!response.is_success());
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("ok")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let transport = ReqwestTransport::with_timeout(Duration::from_millis(100)).unwrap();
    let url = format!("{}{}", server.uri(), HOOK_PATH);

    let result = transport
        .post_json(&url, payload_bytes(&SendRequest::new("hi")))
        .await;

    match result {
        Err(TransportError::Http(err)) => assert!(err.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    let transport = ReqwestTransport::new();
    let url = format!("http://127.0.0.1:{}{}", closed_port(), HOOK_PATH);

    let result = transport
        .post_json(&url, payload_bytes(&SendRequest::new("hi")))
        .await;

    assert!(matches!(result, Err(TransportError::Http(_))));
}

#[tokio::test]
async fn network_error_text_does_not_leak_webhook_token() {
    let transport = ReqwestTransport::new();
    let url = format!(
        "http://127.0.0.1:{}/services/T000/B000/SECRETTOKEN",
        closed_port()
    );

    let err = transport
        .post_json(&url, payload_bytes(&SendRequest::new("hi")))
        .await
        .unwrap_err();
    let text = SendError::from(err).to_string();

    assert!(text.starts_with("Network error: "), "{text}");
    assert!(!text.contains("SECRETTOKEN"), "{text}");
    assert!(!text.contains("/services/"), "{text}");
}

#[tokio::test]
async fn timeout_error_text_does_not_leak_webhook_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("ok")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let transport = ReqwestTransport::from_client(client);
    let url = format!("{}/services/T000/B000/SECRETTOKEN", server.uri());

    let err = transport
        .post_json(&url, payload_bytes(&SendRequest::new("hi")))
        .await
        .unwrap_err();
    let text = SendError::from(err).to_string();

    assert!(!text.contains("SECRETTOKEN"), "{text}");
}
