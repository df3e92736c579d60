/*
[INPUT]:  Fully built request URLs
[OUTPUT]: Status, headers and raw body of the HTTP response
[POS]:    HTTP layer - outbound transport seam (reqwest by default, mockable)
[UPDATE]: When changing TLS, user agent or debug dump behavior
*/

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use std::fmt;
use tracing::debug;

use crate::http::{ClientConfig, NicehashError, Result};

const DUMP_BODY_MAX_BYTES: usize = 4096;

/// Response as seen by the codec layer.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Performs a single GET round trip.
///
/// Implementations must be safe to share between concurrent callers; the
/// client never retries and never holds state across calls.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    async fn get(&self, url: &Url) -> Result<TransportResponse>;
}

/// The server labels JSON bodies as `text/html` (or not at all).
pub fn normalize_content_type(headers: &mut HeaderMap) {
    let mislabeled = match headers.get(CONTENT_TYPE) {
        None => true,
        Some(value) => value
            .to_str()
            .map(|raw| raw.is_empty() || raw.starts_with("text/html"))
            .unwrap_or(false),
    };
    if mislabeled {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
}

/// Default transport backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    debug: bool,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout);
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        if config.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|err| NicehashError::Config(format!("cannot build HTTP client: {err}")))?;

        Ok(Self {
            client,
            debug: config.debug,
        })
    }

    /// Wrap an existing reqwest client, e.g. one with a custom proxy.
    pub fn from_client(client: Client, debug: bool) -> Self {
        Self { client, debug }
    }

    fn dump_response(&self, url: &Url, response: &TransportResponse) {
        let shown = response.body.len().min(DUMP_BODY_MAX_BYTES);
        debug!(
            %url,
            status = %response.status,
            headers = ?response.headers,
            body = %String::from_utf8_lossy(&response.body[..shown]),
            "dump response"
        );
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse> {
        if self.debug {
            debug!(%url, "dump request GET");
        }

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let mut headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        normalize_content_type(&mut headers);

        let response = TransportResponse {
            status,
            headers,
            body,
        };
        if self.debug {
            self.dump_response(url, &response);
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[rstest]
    #[case(None, "application/json")]
    #[case(Some("text/html; charset=UTF-8"), "application/json")]
    #[case(Some("application/json"), "application/json")]
    #[case(Some("text/plain"), "text/plain")]
    fn test_normalize_content_type(#[case] raw: Option<&'static str>, #[case] expected: &str) {
        let mut headers = HeaderMap::new();
        if let Some(value) = raw {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(value));
        }
        normalize_content_type(&mut headers);
        assert_eq!(headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()), Some(expected));
    }

    #[tokio::test]
    async fn test_reqwest_transport_reads_body_and_fixes_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api"))
            .and(header("user-agent", "nicehash-test/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"result":{"api_version":"1.0.1"},"method":null}"#,
                "text/html",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig {
            user_agent: Some("nicehash-test/1.0".to_string()),
            debug: true,
            ..ClientConfig::default()
        };
        let transport = ReqwestTransport::new(&config).expect("transport");
        let url = Url::parse(&format!("{}/api", server.uri())).expect("url");

        let response = transport.get(&url).await.expect("response");
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
        assert!(response.body.starts_with(b"{\"result\""));
    }

    #[tokio::test]
    async fn test_reqwest_transport_connection_failure() {
        let transport = ReqwestTransport::new(&ClientConfig::default()).expect("transport");
        let url = Url::parse("http://127.0.0.1:1/api").expect("url");

        let err = transport.get(&url).await.unwrap_err();
        assert!(matches!(err, NicehashError::Transport(_)));
    }
}
