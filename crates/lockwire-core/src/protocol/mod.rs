//! Protocol modules (envelope codec, enum codec, path lookup).
//!
//! All codecs here are pure, stateless transformations: malformed input is
//! reported as `WireError` instead of panicking, and the only process-wide
//! state is the set of compiled path lookups, which are created once and
//! read-only thereafter.

pub mod envelope;
pub mod enums;
pub mod path;
