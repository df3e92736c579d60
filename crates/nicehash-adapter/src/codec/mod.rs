/*
[INPUT]:  Typed parameters (outbound) and raw JSON bodies (inbound)
[OUTPUT]: Query strings and typed domain records
[POS]:    Codec layer - wire encoding/decoding independent of transport
[UPDATE]: When the protocol's payload shapes change
*/

pub mod decode;
pub mod envelope;
pub mod params;

pub use envelope::Envelope;
pub use params::format_decimal;
