//! Network topology messages.

use serde::{Deserialize, Serialize};

use lockwire_core::wire_enum;

use crate::adapter::Event;

pub const GET_NETWORK_INFO_REQUEST_EVENT: &str = "getNwkInfoReq";
pub const UPDATE_NETWORK_STATE_EVENT: &str = "updateNetworkState";
pub const REMOVE_DEVICE_REQUEST_EVENT: &str = "removeDeviceReq";
pub const REMOVE_DEVICE_RESPONSE_EVENT: &str = "removeDeviceRsp";

wire_enum! {
    /// Open or close the network for joining.
    pub enum NetworkAction as "action" {
        Open = "open",
        Close = "close",
    }
}

/// `getNwkInfoReq` — request the network topology. Zero-payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetNetworkInfo {
    #[serde(skip)]
    pub transaction_id: u32,
}

impl Event for GetNetworkInfo {
    const EVENT_TYPE: &'static str = GET_NETWORK_INFO_REQUEST_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}

/// A device entry in the topology report.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    pub active: String,
    pub short_addr: String,
    pub ext_addr: String,
    pub topic: String,
    pub smart_objects: SmartObjects,
}

/// Placeholder object kept for wire compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SmartObjects {}

/// Gateway-produced topology report. Plain document, no envelope.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetNetworkInfoResponse {
    pub name: String,
    pub channels: i32,
    pub pan_id: String,
    pub short_addr: String,
    pub ext_addr: String,
    pub security_enabled: i32,
    pub mode: String,
    pub state: String,
    pub fw_version: String,
    pub devices: Vec<Device>,
}

/// `updateNetworkState` — open/close the network for a duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateNetworkState {
    #[serde(skip)]
    pub transaction_id: u32,
    pub action: NetworkAction,
    /// Duration in nanoseconds (historical wire unit).
    pub duration: i64,
}

impl Event for UpdateNetworkState {
    const EVENT_TYPE: &'static str = UPDATE_NETWORK_STATE_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}

/// `removeDeviceReq` — evict a device from the network.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveDeviceRequest {
    #[serde(skip)]
    pub transaction_id: u32,
    pub ext_address: String,
}

impl Event for RemoveDeviceRequest {
    const EVENT_TYPE: &'static str = REMOVE_DEVICE_REQUEST_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}

/// Gateway-produced removal result. Plain document, no envelope.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RemoveDeviceResponse {
    pub ext_addr: String,
    #[serde(
        rename = "removeDeviceAddr",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub remove_device_addr: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}
