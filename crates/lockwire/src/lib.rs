//! Top-level facade crate re-exporting the core codec and the message
//! catalogue, so users can depend on a single crate.
//!
//! ```
//! use lockwire::messages::lock::LockOpen;
//! use lockwire::messages::Event;
//!
//! let doc = LockOpen { transaction_id: 1, channel_ids: vec![] }
//!     .encode()
//!     .unwrap();
//! assert_eq!(
//!     doc,
//!     r#"{"event":{"eventType":"lockActionOpen","payload":{},"transactionId":1}}"#
//! );
//! ```

pub mod core {
    pub use lockwire_core::*;
}

pub mod messages {
    pub use lockwire_messages::*;
}
