//! Shared error type across lockwire crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, WireError>;

/// Unified validation error surfaced by every codec component.
///
/// All variants are local, terminal failures: nothing is retried and nothing
/// is logged inside the codec. Encode-time failures emit no bytes;
/// decode-time failures never leave a partially populated message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// Decoded tag does not match the expected tag for the target message,
    /// or a legacy state map carries a bad key.
    #[error("invalid event type {got:?}")]
    InvalidEventType { got: String },

    /// A field's value is outside its declared closed set; raised identically
    /// on encode and decode.
    #[error("invalid value {got:?} for {field}, expected one of {allowed:?}")]
    InvalidEnumValue {
        field: &'static str,
        got: String,
        allowed: &'static [&'static str],
    },

    /// Malformed hash-key string.
    #[error("invalid hashKey {got:?}")]
    InvalidHashKey { got: String },

    /// Signal strength outside [-100, 0].
    #[error("invalid rssi {got}, expected -100..=0")]
    InvalidRssi { got: i64 },

    /// The outer JSON structure does not parse or is missing a required
    /// structural path.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// The payload document does not deserialize into the concrete message
    /// shape (includes closed-enum violations surfaced through serde).
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}
