//! Pass-through command document.
//!
//! Forwarded verbatim between the gateway and the device: the envelope is
//! part of the declared shape and the tag is not validated, mirroring the
//! transparent handling in the original protocol.

use serde::{Deserialize, Serialize};

/// Outer pass-through document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PassThrough {
    pub event: PassThroughEvent,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassThroughEvent {
    pub event_type: String,
    pub payload: PassThroughPayload,
    pub status: i32,
    pub transaction_id: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassThroughPayload {
    pub command_id: i32,
    pub data: Vec<PassThroughData>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PassThroughData {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub data: String,
}
