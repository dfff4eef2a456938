//! Lock action requests and responses.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use lockwire_core::error::{Result, WireError};
use lockwire_core::protocol::envelope;
use lockwire_core::protocol::path::JsonPath;
use lockwire_core::wire_enum;

use crate::adapter::{Event, Response};

pub const LOCK_ACTION_OPEN_EVENT: &str = "lockActionOpen";
pub const LOCK_ACTION_CLOSE_EVENT: &str = "lockActionClose";
pub const LOCK_ACTION_AUTO_EVENT: &str = "lockActionAuto";
pub const LOCK_ACTION_RESPONSE_EVENT: &str = "lockActionResponse";
pub const LOCK_OFFLINE_RESPONSE_EVENT: &str = "lockOfflineResponse";

/// Sentinel status reported by offline lock responses. Deliberately outside
/// the [`LockStatus`] closed set.
pub const OPEN_TIMEOUT_STATUS: &str = "openTimeoutError";

wire_enum! {
    /// Result of a lock action.
    pub enum LockStatus as "lockActionStatus" {
        None = "none",
        ExtRelayState = "extRelayState",
        LockOpened = "lockOpened",
        LockClosed = "lockClosed",
        DriverOn = "driverOn",
        ErrorLockAlreadyOpen = "errorLockAlreadyOpen",
        ErrorLockAlreadyClosed = "errorLockAlreadyClosed",
        ErrorDriverEnabled = "errorDriverEnabled",
        DeviceTypeUnknown = "deviceTypeUnknown",
    }
}

/// `lockActionOpen` — open the lock, optionally on specific channels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockOpen {
    #[serde(skip)]
    pub transaction_id: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channel_ids: Vec<i32>,
}

impl Event for LockOpen {
    const EVENT_TYPE: &'static str = LOCK_ACTION_OPEN_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}

/// `lockActionClose` — close the lock. Zero-payload message.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LockClose {
    #[serde(skip)]
    pub transaction_id: u32,
}

impl Event for LockClose {
    const EVENT_TYPE: &'static str = LOCK_ACTION_CLOSE_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}

/// `lockActionAuto` — open, then re-close after a delay.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockAuto {
    #[serde(skip)]
    pub transaction_id: u32,
    pub reclose_delay: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channel_ids: Vec<i32>,
}

impl Event for LockAuto {
    const EVENT_TYPE: &'static str = LOCK_ACTION_AUTO_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}

/// `lockActionResponse` — device-reported result of a lock action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockResponse {
    #[serde(skip)]
    pub meta: envelope::DeviceMeta,
    #[serde(skip)]
    pub transaction_id: u32,
    pub lock_action_status: LockStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channel_ids: Vec<i32>,
}

impl Response for LockResponse {
    const EVENT_TYPE: &'static str = LOCK_ACTION_RESPONSE_EVENT;

    fn meta(&self) -> &envelope::DeviceMeta {
        &self.meta
    }

    fn set_meta(&mut self, meta: envelope::DeviceMeta) {
        self.meta = meta;
    }

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}

fn lock_status_path() -> &'static JsonPath {
    static PATH: OnceLock<JsonPath> = OnceLock::new();
    PATH.get_or_init(|| JsonPath::new(["lockActionStatus"]))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OfflinePayload {
    lock_action_status: &'static str,
}

/// `lockOfflineResponse` — the device reports an open timeout while offline.
///
/// The payload carries a single sentinel field which is peeked through the
/// compiled path without materializing the rest of the payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LockOffline {
    #[serde(skip)]
    pub transaction_id: u32,
}

impl Event for LockOffline {
    const EVENT_TYPE: &'static str = LOCK_OFFLINE_RESPONSE_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }

    fn encode(&self) -> Result<String> {
        let payload = OfflinePayload {
            lock_action_status: OPEN_TIMEOUT_STATUS,
        };
        envelope::encode_event(Self::EVENT_TYPE, self.transaction_id, &payload)
    }

    fn decode(raw: &str) -> Result<Self> {
        let event = envelope::decode_event(raw, Self::EVENT_TYPE)?;

        let leaf = lock_status_path()
            .extract(event.payload_str())?
            .ok_or_else(|| WireError::MalformedEnvelope("missing lockActionStatus".into()))?;
        let status: String = serde_json::from_str(leaf.get())
            .map_err(|e| WireError::MalformedPayload(e.to_string()))?;

        if status != OPEN_TIMEOUT_STATUS {
            return Err(WireError::InvalidEnumValue {
                field: "lockActionStatus",
                got: status,
                allowed: &[OPEN_TIMEOUT_STATUS],
            });
        }

        Ok(Self {
            transaction_id: event.transaction_id,
        })
    }
}
