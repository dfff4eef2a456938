//! Firmware version query and upgrade messages.

use serde::{Deserialize, Serialize};

use lockwire_core::protocol::envelope::DeviceMeta;
use lockwire_core::wire_enum;

use crate::adapter::{Event, Response};

pub const FW_VERSION_REQUEST_EVENT: &str = "fwVersionReq";
pub const FW_VERSION_RESPONSE_EVENT: &str = "fwVersionRsp";
pub const FW_UPDATE_REQUEST_EVENT: &str = "fwUpdateReq";
pub const FW_UPDATE_RESPONSE_EVENT: &str = "fwUpdateRsp";
pub const FW_BLOCK_RESPONSE_EVENT: &str = "fwBlockRsp";
pub const FW_UPDATE_ABORT_EVENT: &str = "fwUpdateAbortReq";

wire_enum! {
    /// Outcome of a firmware upgrade attempt.
    ///
    /// Wire spellings mix conventions; they are historical.
    pub enum FirmwareUpgradeStatus as "status" {
        Success = "success",
        DeviceNotFound = "deviceNotFound",
        InvalidState = "invalid_state",
        InvalidFile = "invalid_file",
        InvalidFileId = "invalid_file_id",
        UnknownError = "unknownError",
    }
}

/// `fwVersionReq` — ask the device for its firmware version. Zero-payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FirmwareVersionRequest {
    #[serde(skip)]
    pub transaction_id: u32,
}

impl Event for FirmwareVersionRequest {
    const EVENT_TYPE: &'static str = FW_VERSION_REQUEST_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}

/// `fwVersionRsp` — firmware version report. Carries no correlation id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirmwareVersionResponse {
    #[serde(skip)]
    pub meta: DeviceMeta,
    pub fw_version: String,
}

impl Response for FirmwareVersionResponse {
    const EVENT_TYPE: &'static str = FW_VERSION_RESPONSE_EVENT;

    fn meta(&self) -> &DeviceMeta {
        &self.meta
    }

    fn set_meta(&mut self, meta: DeviceMeta) {
        self.meta = meta;
    }
}

/// `fwUpdateReq` — start an upgrade from the named file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirmwareUpgradeRequest {
    #[serde(skip)]
    pub transaction_id: u32,
    pub file_name: String,
}

impl Event for FirmwareUpgradeRequest {
    const EVENT_TYPE: &'static str = FW_UPDATE_REQUEST_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}

/// `fwUpdateRsp` — upgrade result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirmwareUpgradeResponse {
    #[serde(skip)]
    pub meta: DeviceMeta,
    #[serde(skip)]
    pub transaction_id: u32,
    pub error_code: i32,
    pub status: FirmwareUpgradeStatus,
}

impl Response for FirmwareUpgradeResponse {
    const EVENT_TYPE: &'static str = FW_UPDATE_RESPONSE_EVENT;

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

/// `fwBlockRsp` — per-block upgrade progress.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirmwareBlockResponse {
    #[serde(skip)]
    pub meta: DeviceMeta,
    #[serde(skip)]
    pub transaction_id: u32,
    pub block_nr: i32,
    pub total_blocks_nr: i32,
}

impl Response for FirmwareBlockResponse {
    const EVENT_TYPE: &'static str = FW_BLOCK_RESPONSE_EVENT;

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

/// `fwUpdateAbortReq` — abort a running upgrade. Zero-payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FirmwareUpdateAbort {
    #[serde(skip)]
    pub transaction_id: u32,
}

impl Event for FirmwareUpdateAbort {
    const EVENT_TYPE: &'static str = FW_UPDATE_ABORT_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}
