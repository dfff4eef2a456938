//! lockwire core: wire-level protocol primitives for lock/access devices.
//!
//! This crate defines the envelope codec, scalar value types, and error
//! surface shared by every concrete message type. It carries no transport
//! or runtime dependencies.
//!
//! Panics, `unwrap`, and `expect` are compile-denied; every fallible path
//! surfaces as [`WireError`].

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;
pub mod values;

/// Shared result type.
pub use error::{Result, WireError};
