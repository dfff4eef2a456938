//! Concrete message types of the lockwire protocol.
//!
//! Every type here is a data shape plugged into the generic envelope
//! contract of `lockwire-core`: cloud-originated requests implement
//! [`Event`], device-originated messages implement [`Response`], and both
//! get their encode/decode from the adapter rather than hand-rolled
//! per-type serialization.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod adapter;
pub mod auth;
pub mod config;
pub mod device_status;
pub mod firmware;
pub mod locate;
pub mod lock;
pub mod lock_legacy;
pub mod network;
pub mod passthrough;
pub mod serial;
pub mod storage;
pub mod time_sync;
pub mod transaction_id;

pub use adapter::{Event, Response};
pub use lockwire_core::{Result, WireError};
