//! Device status request/response.

use serde::{Deserialize, Serialize};

use lockwire_core::protocol::envelope::DeviceMeta;
use lockwire_core::wire_enum;

use crate::adapter::{Event, Response};

pub const DEVICE_STATUS_REQUEST_EVENT: &str = "deviceStatusReq";
pub const DEVICE_STATUS_RESPONSE_EVENT: &str = "deviceStatusRsp";

wire_enum! {
    /// Why the device sent a status report.
    pub enum DeviceStatusReason as "reason" {
        None = "none",
        CloudRequested = "cloudRequested",
        ScheduledUpdate = "scheduledUpdate",
        StatusChange = "statusChange",
        ErrorDetected = "errorDetected",
    }
}

/// `deviceStatusReq` — ask the device for a status report. Zero-payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeviceStatusRequest {
    #[serde(skip)]
    pub transaction_id: u32,
}

impl Event for DeviceStatusRequest {
    const EVENT_TYPE: &'static str = DEVICE_STATUS_REQUEST_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}

/// Raw sensor block of a status report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LockSensor {
    pub raw: u8,
    pub privacy: u8,
    pub handle: u8,
    pub key: u8,
}

/// `deviceStatusRsp` — periodic or requested device status report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatusResponse {
    #[serde(skip)]
    pub meta: DeviceMeta,
    #[serde(skip)]
    pub transaction_id: u32,
    pub reason: DeviceStatusReason,
    /// Device clock, Unix seconds.
    pub time: i64,
    pub timezone: i32,
    pub battery_level: i32,
    pub battery_level_load: i32,
    pub network_state: i32,
    pub auto_request: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_sensor: Option<LockSensor>,
}

impl Response for DeviceStatusResponse {
    const EVENT_TYPE: &'static str = DEVICE_STATUS_RESPONSE_EVENT;

    fn meta(&self) -> &DeviceMeta {
        &self.meta
    }

    fn set_meta(&mut self, meta: DeviceMeta) {
        self.meta = meta;
    }

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}
