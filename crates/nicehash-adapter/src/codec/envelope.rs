/*
[INPUT]:  Raw response body bytes
[OUTPUT]: The `result` payload, or the business error it reports
[POS]:    Codec layer - `{result, method}` wrapper shared by every method
[UPDATE]: When the response wrapper changes
*/

use serde::Deserialize;
use serde_json::Value;

use crate::http::DecodeError;

/// `{"result": ..., "method": ...}` wrapper around every response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub method: Option<String>,
}

impl Envelope {
    pub fn parse(body: &[u8]) -> Result<Self, DecodeError> {
        let envelope: Envelope = serde_json::from_slice(body)?;
        if envelope.result.is_null() {
            return Err(DecodeError::Missing {
                path: "result".to_string(),
            });
        }
        Ok(envelope)
    }

    /// Non-empty `result.error` message.
    ///
    /// A present `error` that is not a string is reported as a decode error.
    pub fn error(&self) -> Result<Option<&str>, DecodeError> {
        match self.result.get("error") {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(message)) if message.is_empty() => Ok(None),
            Some(Value::String(message)) => Ok(Some(message.as_str())),
            Some(other) => Err(DecodeError::TypeMismatch {
                path: "result.error".to_string(),
                expected: "string",
                found: other.to_string(),
            }),
        }
    }
}
