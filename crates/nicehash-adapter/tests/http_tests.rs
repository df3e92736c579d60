/*
[INPUT]:  Scripted transports and mock HTTP responses
[OUTPUT]: Test results for the client façade
[POS]:    Integration tests - error taxonomy and request shape
[UPDATE]: When HTTP endpoints or error handling change
*/

mod common;

use common::{ScriptedTransport, fake_credentials, setup_mock_server};
use nicehash_adapter::{
    AlgoType, ClientConfig, Credentials, Location, NicehashClient, NicehashError,
};
use reqwest::StatusCode;
use std::sync::Arc;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn scripted_client(transport: Arc<ScriptedTransport>) -> NicehashClient {
    assert_ok!(NicehashClient::with_transport(
        transport,
        "https://api.nicehash.com/",
        fake_credentials(),
    ))
}

#[test]
fn test_client_creation() {
    let client = assert_ok!(NicehashClient::new(Credentials::default()));
    assert!(client.credentials().is_empty());
    assert_eq!(client.api_url().as_str(), "https://api.nicehash.com/api");
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig {
        base_url: "http://localhost:8080/".to_string(),
        user_agent: Some("nicehash-adapter-tests".to_string()),
        ..ClientConfig::default()
    };
    let client = assert_ok!(NicehashClient::with_config(config, fake_credentials()));
    assert_eq!(client.api_url().as_str(), "http://localhost:8080/api");
    assert_eq!(client.credentials().api_id, "FAKEID");
}

#[test]
fn test_client_rejects_invalid_base_url() {
    let config = ClientConfig {
        base_url: "::not a url::".to_string(),
        ..ClientConfig::default()
    };
    let err = assert_err!(NicehashClient::with_config(config, Credentials::default()));
    assert!(matches!(err, NicehashError::UrlParse(_)));
}

#[tokio::test]
async fn test_transport_error_is_propagated() {
    let transport = Arc::new(ScriptedTransport::default().fail("connection reset by peer"));
    let client = scripted_client(transport.clone());

    let err = assert_err!(client.get_balance().await);
    assert!(matches!(err, NicehashError::Transport(_)));
    assert_eq!(err.to_string(), "Transport error: connection reset by peer");
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_non_success_status_is_http_error() {
    let transport = Arc::new(
        ScriptedTransport::default().respond(StatusCode::SERVICE_UNAVAILABLE, "<html>busy</html>"),
    );
    let client = scripted_client(transport);

    let err = assert_err!(client.get_stats_global_current().await);
    assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    assert_eq!(err.to_string(), "HTTP response: 503 Service Unavailable");
}

#[tokio::test]
async fn test_business_error_with_ok_status() {
    let transport = Arc::new(ScriptedTransport::default().respond(
        StatusCode::OK,
        r#"{"result":{"error":"Invalid API key"},"method":"balance"}"#,
    ));
    let client = scripted_client(transport);

    let err = assert_err!(client.get_balance().await);
    match err {
        NicehashError::Api { message, .. } => assert_eq!(message, "Invalid API key"),
        other => panic!("expected business error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let transport = Arc::new(ScriptedTransport::default().respond(StatusCode::OK, "not json"));
    let client = scripted_client(transport);

    let err = assert_err!(client.get_version().await);
    assert!(err.is_decode_error());
    assert!(err.to_string().starts_with("Failed to decode version response"));
}

#[tokio::test]
async fn test_bare_number_balance_is_decode_error() {
    let transport = Arc::new(ScriptedTransport::default().respond(
        StatusCode::OK,
        r#"{"result":{"balance_confirmed":0.005,"balance_pending":"0"},"method":"balance"}"#,
    ));
    let client = scripted_client(transport);

    let err = assert_err!(client.get_balance().await);
    assert!(err.is_decode_error());
    assert!(err.to_string().contains("result.balance_confirmed"));
}

#[tokio::test]
async fn test_request_url_shape() {
    let transport = Arc::new(ScriptedTransport::default().respond(
        StatusCode::OK,
        r#"{"result":{"success":"Order removed."},"method":"orders.remove"}"#,
    ));
    let client = scripted_client(transport.clone());

    let message = assert_ok!(
        client
            .order_remove(AlgoType::X11, Location::WestHash, 42)
            .await
    );
    assert_eq!(message, "Order removed.");

    let requests = transport.requests();
    assert_eq!(
        requests[0].as_str(),
        "https://api.nicehash.com/api?method=orders.remove&id=FAKEID&key=FAKEKEY&algo=3&location=1&order=42"
    );
}

#[tokio::test]
async fn test_public_calls_never_send_credentials() {
    let transport = Arc::new(ScriptedTransport::default().respond(
        StatusCode::OK,
        r#"{"result":{"stats":[]},"method":"stats.global.24h"}"#,
    ));
    let client = scripted_client(transport.clone());

    let stats = assert_ok!(client.get_stats_global_day().await);
    assert!(stats.is_empty());
    assert_eq!(
        transport.requests()[0].query(),
        Some("method=stats.global.24h")
    );
}

#[tokio::test]
async fn test_client_is_shareable_across_tasks() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .and(query_param("method", "balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {"balance_confirmed": "1.5", "balance_pending": "0.25"},
            "method": "balance",
        })))
        .expect(4)
        .mount(&server)
        .await;

    let config = ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    };
    let client = Arc::new(assert_ok!(NicehashClient::with_config(config, fake_credentials())));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_balance().await })
        })
        .collect();

    for handle in handles {
        let balance = assert_ok!(assert_ok!(handle.await));
        assert_eq!(balance.confirmed, 1.5);
        assert_eq!(balance.pending, 0.25);
    }
}
