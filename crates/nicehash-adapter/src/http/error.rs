/*
[INPUT]:  Error sources (transport, HTTP status, business errors, decoding)
[OUTPUT]: Structured error types with method and field context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Boxed error produced by a [`Transport`](crate::http::Transport) implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the NiceHash adapter
#[derive(Error, Debug)]
pub enum NicehashError {
    /// Network or connection failure reported by the transport
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    /// Server answered with a non-2xx status
    #[error("HTTP response: {status}")]
    HttpStatus { status: StatusCode },

    /// Server reported `result.error`
    #[error("API error ({method}): {message}")]
    Api { method: String, message: String },

    /// Response body did not have the shape the method promises
    #[error("Failed to decode {method} response: {source}")]
    Decode {
        method: String,
        #[source]
        source: DecodeError,
    },

    /// A call argument cannot be put on the wire
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl NicehashError {
    pub fn transport(err: impl Into<BoxError>) -> Self {
        NicehashError::Transport(err.into())
    }

    /// Check if the server rejected the call with a business error
    pub fn is_business_error(&self) -> bool {
        matches!(self, NicehashError::Api { .. })
    }

    pub fn is_decode_error(&self) -> bool {
        matches!(self, NicehashError::Decode { .. })
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            NicehashError::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for NicehashError {
    fn from(err: reqwest::Error) -> Self {
        NicehashError::Transport(Box::new(err))
    }
}

/// Why a response payload could not be turned into a record.
///
/// `path` locates the offending value, e.g. `result.workers[0][4]`.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing `{path}`")]
    Missing { path: String },

    #[error("`{path}`: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: String,
    },

    #[error("`{path}`: cannot parse {raw:?} as a number")]
    InvalidNumber { path: String, raw: String },

    #[error("`{path}`: cannot parse {raw} as a timestamp")]
    InvalidTimestamp { path: String, raw: String },

    #[error("`{path}`: expected {expected} elements, found {found}")]
    ShortArray {
        path: String,
        expected: usize,
        found: usize,
    },

    #[error("`{path}`: unknown {kind} code {code}")]
    UnknownVariant {
        path: String,
        kind: &'static str,
        code: String,
    },
}

impl DecodeError {
    pub(crate) fn into_error(self, method: &str) -> NicehashError {
        NicehashError::Decode {
            method: method.to_string(),
            source: self,
        }
    }
}

/// Result type alias for NiceHash operations
pub type Result<T> = std::result::Result<T, NicehashError>;
