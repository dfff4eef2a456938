//! Device configuration read/update/response messages.
//!
//! The read request is a sparse set of boolean flags; the update and the
//! response carry presence-tracked optional values. Either way a property
//! appears on the wire only when requested/set, and wire order is the fixed
//! declaration order below — embedded parsers depend on it.

use serde::{Deserialize, Serialize};

use lockwire_core::protocol::envelope::DeviceMeta;
use lockwire_core::wire_enum;

use crate::adapter::{Event, Response};

pub const DEVICE_CONFIG_READ_EVENT: &str = "deviceConfigRead";
pub const DEVICE_CONFIG_UPDATE_EVENT: &str = "deviceConfigUpdate";
pub const DEVICE_CONFIG_RESPONSE_EVENT: &str = "deviceConfigResponse";

wire_enum! {
    /// Kind of hardware behind the firmware.
    pub enum DeviceType as "deviceType" {
        None = "none",
        FullCloudLock = "FullCloudLock",
        WallReader = "WallReader",
        FullCloudRelay = "FullCloudRelay",
    }
}

wire_enum! {
    /// Role of the device in its network.
    pub enum DeviceRole as "deviceRole" {
        None = "none",
        Standalone = "Standalone",
        Master = "Master",
        Slave = "Slave",
    }
}

wire_enum! {
    /// Buzzer loudness setting.
    pub enum BuzzerVolume as "buzzerVolume" {
        Off = "off",
        Medium = "medium",
        Maximum = "maximum",
    }
}

wire_enum! {
    /// Result of a configuration operation.
    pub enum ConfigResponseStatus as "status" {
        None = "none",
        CreateOk = "createOK",
        ReadOk = "readOK",
        UpdateOk = "updateOK",
        DeleteOk = "deleteOK",
        ConfigSizeError = "configSizeError",
        Error = "error",
        ErrorOutOfRange = "errorOutOfRange",
        ErrorNotFound = "errorNotFound",
        ErrorFlash = "errorFlash",
        ErrorNoCallBack = "errorNoCallBack",
        ErrorNoSpace = "errorNoSpace",
        ErrorNoReadAccess = "errorNoReadAccess",
        ErrorNoWriteAccess = "errorNoWriteAccess",
    }
}

fn is_false(v: &bool) -> bool {
    !*v
}

/// `deviceConfigRead` — request a subset of configuration properties.
///
/// A flag is true iff the caller wants that property in the eventual
/// response; false flags are omitted from the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadConfig {
    #[serde(skip)]
    pub transaction_id: u32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub tx_power: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub device_type: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub device_role: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub front_breakout: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub back_breakout: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub reclose_delay: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub status_msg_flags: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub status_update_interval: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub nfc_picc_encryption_key: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub nfc_encryption_key: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub installed_relay_module_ids: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub external_relay_mode: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub slave_fw_address: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub buzzer_volume: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub emv_co_private_key: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub emv_co_key_version: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub emv_co_collector_id: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub google_smart_tap_enabled: bool,
}

impl ReadConfig {
    /// Build a read request from requested property names.
    ///
    /// Unrecognized names are silently ignored so newer firmware may request
    /// keys this revision does not know about. Wire order stays declaration
    /// order regardless of input order.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cfg = Self::default();
        for key in keys {
            match key.as_ref() {
                "txPower" => cfg.tx_power = true,
                "deviceType" => cfg.device_type = true,
                "deviceRole" => cfg.device_role = true,
                "frontBreakout" => cfg.front_breakout = true,
                "backBreakout" => cfg.back_breakout = true,
                "recloseDelay" => cfg.reclose_delay = true,
                "statusMsgFlags" => cfg.status_msg_flags = true,
                "statusUpdateInterval" => cfg.status_update_interval = true,
                "nfcPiccEncryptionKey" => cfg.nfc_picc_encryption_key = true,
                "nfcEncryptionKey" => cfg.nfc_encryption_key = true,
                "installedRelayModuleIds" => cfg.installed_relay_module_ids = true,
                "externalRelayMode" => cfg.external_relay_mode = true,
                "slaveFwAddress" => cfg.slave_fw_address = true,
                "buzzerVolume" => cfg.buzzer_volume = true,
                "emvCoPrivateKey" => cfg.emv_co_private_key = true,
                "emvCoKeyVersion" => cfg.emv_co_key_version = true,
                "emvCoCollectorId" => cfg.emv_co_collector_id = true,
                "googleSmartTapEnabled" => cfg.google_smart_tap_enabled = true,
                _ => {}
            }
        }
        cfg
    }
}

impl Event for ReadConfig {
    const EVENT_TYPE: &'static str = DEVICE_CONFIG_READ_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}

/// `deviceConfigUpdate` — write a subset of configuration properties.
///
/// A property is emitted iff its value is set; absent properties stay absent
/// rather than defaulting to zero, so "unset" survives a round trip.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConfig {
    #[serde(skip)]
    pub transaction_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_power: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reclose_delay: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_msg_flags: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_update_interval: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nfc_encryption_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installed_relay_module_ids: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_relay_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slave_fw_address: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buzzer_volume: Option<BuzzerVolume>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emv_co_private_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emv_co_key_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emv_co_collector_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_smart_tap_enabled: Option<bool>,
}

impl Event for UpdateConfig {
    const EVENT_TYPE: &'static str = DEVICE_CONFIG_UPDATE_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}

/// `deviceConfigResponse` — device-reported configuration state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    #[serde(skip)]
    pub meta: DeviceMeta,
    #[serde(skip)]
    pub transaction_id: u32,
    pub status: ConfigResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_power: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<DeviceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_role: Option<DeviceRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_breakout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_breakout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reclose_delay: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_msg_flags: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_update_interval: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installed_relay_module_ids: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_relay_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slave_fw_address: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buzzer_volume: Option<BuzzerVolume>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emv_co_key_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emv_co_collector_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_smart_tap_enabled: Option<bool>,
}

impl Response for ConfigResponse {
    const EVENT_TYPE: &'static str = DEVICE_CONFIG_RESPONSE_EVENT;

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
