//! Scalar value types, each owning its own wire format and validation rule.
//!
//! Serde stays lenient; `validate()` is the single source of truth and is
//! run by the message layer identically before encode and after decode, so
//! an invalid value can neither reach the wire nor survive a decode.

mod hash_key;
mod rssi;
mod timestamp;

pub use hash_key::HashKey;
pub use rssi::Rssi;
pub use timestamp::Timestamp;
