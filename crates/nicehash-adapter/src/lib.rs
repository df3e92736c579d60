/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public NiceHash adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod codec;
pub mod http;
pub mod types;

// Re-export commonly used types from codec
pub use codec::Envelope;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Credentials,
    DecodeError,
    NicehashClient,
    NicehashError,
    ReqwestTransport,
    Result,
    Transport,
    TransportResponse,
};

// Re-export all types
pub use types::*;
