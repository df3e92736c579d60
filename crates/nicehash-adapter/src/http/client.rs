/*
[INPUT]:  HTTP configuration (base URL, timeouts, user agent), API credentials
[OUTPUT]: Client façade that encodes, sends and decodes every API call
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::Url;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::codec::Envelope;
use crate::http::transport::{ReqwestTransport, Transport};
use crate::http::{DecodeError, NicehashError, Result};
use crate::types::{ApiMethod, Params};

/// Base URL for the NiceHash API
pub const DEFAULT_BASE_URL: &str = "https://api.nicehash.com/";

/// Label used in logs and errors for the method-less version call
const VERSION_CALL: &str = "version";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server root; `/api` is appended. Empty means [`DEFAULT_BASE_URL`].
    pub base_url: String,
    pub user_agent: Option<String>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Dump every request and response at DEBUG level
    pub debug: bool,
    pub accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            debug: false,
            accept_invalid_certs: false,
        }
    }
}

/// API id/key pair. Empty values are never sent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_id: String,
    pub api_key: String,
}

impl Credentials {
    pub fn new(api_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_id: api_id.into(),
            api_key: api_key.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.api_id.is_empty() && self.api_key.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_id", &self.api_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Resolve the `<base-url>/api` endpoint every call goes to.
pub fn api_url(base_url: &str) -> Result<Url> {
    let base = if base_url.trim().is_empty() {
        DEFAULT_BASE_URL
    } else {
        base_url.trim()
    };
    Ok(Url::parse(&format!("{}/api", base.trim_end_matches('/')))?)
}

/// Main HTTP client for the NiceHash API
#[derive(Debug, Clone)]
pub struct NicehashClient {
    transport: Arc<dyn Transport>,
    api_url: Url,
    credentials: Credentials,
}

impl NicehashClient {
    /// Create a client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(ClientConfig::default(), credentials)
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(Arc::new(transport), &config.base_url, credentials)
    }

    /// Create a client on top of a caller-provided transport
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        base_url: &str,
        credentials: Credentials,
    ) -> Result<Self> {
        Ok(Self {
            transport,
            api_url: api_url(base_url)?,
            credentials,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Parameters for an authenticated method
    pub(crate) fn signed(&self, method: ApiMethod) -> Params {
        Params::new(method).credentials(&self.credentials.api_id, &self.credentials.api_key)
    }

    /// Encode `params`, perform the round trip and decode `result`.
    pub(crate) async fn call<T>(
        &self,
        params: Params,
        decode: fn(&Value) -> std::result::Result<T, DecodeError>,
    ) -> Result<T> {
        let method = params.method.map_or(VERSION_CALL, ApiMethod::as_str);

        let mut url = self.api_url.clone();
        let query = params.to_query_string()?;
        if !query.is_empty() {
            url.set_query(Some(&query));
        }

        debug!(method = %method, "calling NiceHash API");
        let response = self.transport.get(&url).await?;
        if !response.status.is_success() {
            return Err(NicehashError::HttpStatus {
                status: response.status,
            });
        }

        let envelope = Envelope::parse(&response.body).map_err(|err| err.into_error(method))?;
        if let Some(message) = envelope.error().map_err(|err| err.into_error(method))? {
            warn!(method = %method, message = %message, "NiceHash API returned an error");
            return Err(NicehashError::Api {
                method: method.to_string(),
                message: message.to_string(),
            });
        }

        decode(&envelope.result).map_err(|err| err.into_error(method))
    }
}
