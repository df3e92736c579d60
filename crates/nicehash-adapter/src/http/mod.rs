/*
[INPUT]:  HTTP client configuration and API methods
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - query-string RPC communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod public;
pub mod trade;
pub mod transport;
pub mod user;

pub use error::{BoxError, DecodeError, NicehashError, Result};
pub use transport::{ReqwestTransport, Transport, TransportResponse};

pub use client::{ClientConfig, Credentials, DEFAULT_BASE_URL, NicehashClient};
