//! Local key-storage management messages.

use serde::{Deserialize, Serialize};

use lockwire_core::error::{Result, WireError};
use lockwire_core::protocol::envelope::DeviceMeta;

use crate::adapter::{Event, Response};

pub const LOCAL_STORAGE_ADD_KEY_EVENT: &str = "localStorageAddKey";
pub const LOCAL_STORAGE_UPDATE_KEY_EVENT: &str = "localStorageUpdateKey";
pub const LOCAL_STORAGE_GET_KEY_EVENT: &str = "localStorageGetKey";
pub const LOCAL_STORAGE_DELETE_KEY_EVENT: &str = "localStorageDeleteKey";
pub const LOCAL_STORAGE_RESPONSE_EVENT: &str = "localStorageResponse";

/// Result code of a storage operation. The one integer-valued closed enum of
/// the protocol; follows the same decode/encode contract as the string
/// enums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageStatus {
    #[default]
    Ok,
    ReadOk,
    KeyNotFound,
    KeyAlreadyExists,
    FlashStorageFull,
    Critical,
}

impl StorageStatus {
    pub const FIELD: &'static str = "status";
    pub const ALLOWED: &'static [&'static str] = &["0", "1", "2", "3", "4", "5"];
    pub const VALUES: &'static [Self] = &[
        Self::Ok,
        Self::ReadOk,
        Self::KeyNotFound,
        Self::KeyAlreadyExists,
        Self::FlashStorageFull,
        Self::Critical,
    ];

    /// Decode a raw wire integer, rejecting non-members.
    pub fn decode(raw: u8) -> Result<Self> {
        match raw {
            0 => Ok(Self::Ok),
            1 => Ok(Self::ReadOk),
            2 => Ok(Self::KeyNotFound),
            3 => Ok(Self::KeyAlreadyExists),
            4 => Ok(Self::FlashStorageFull),
            5 => Ok(Self::Critical),
            other => Err(WireError::InvalidEnumValue {
                field: Self::FIELD,
                got: other.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }

    /// Encode to the wire integer. Cannot fail: membership is guaranteed by
    /// the type.
    pub fn encode(self) -> u8 {
        self as u8
    }
}

impl Serialize for StorageStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.encode())
    }
}

impl<'de> Deserialize<'de> for StorageStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = u8::deserialize(deserializer)?;
        Self::decode(raw).map_err(serde::de::Error::custom)
    }
}

/// Master key grant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterKey {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channel_ids: Vec<i32>,
}

/// Time-window key grant (epoch bounds).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeKey {
    pub start_time: i64,
    pub end_time: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channel_ids: Vec<i32>,
}

/// Weekly-schedule key grant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AclKey {
    /// Days of week, 0 = Sunday.
    pub days_of_week: Vec<u8>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channel_ids: Vec<i32>,
}

/// Capability flags attached to a stored key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyFlags {
    pub master_key: bool,
    pub privacy_override: bool,
    pub is_multi_channel: bool,
    pub is_meeting_mode_allowed: bool,
}

/// Stored-key document shared by the add/update requests and the response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageData {
    pub status: StorageStatus,
    pub hash_key: String,
    pub flags: KeyFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_key: Option<MasterKey>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub time_keys: Vec<TimeKey>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub acl_keys: Vec<AclKey>,
}

/// `localStorageAddKey` — store a new key on the device.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StorageAddKey {
    #[serde(skip)]
    pub transaction_id: u32,
    #[serde(flatten)]
    pub data: StorageData,
}

impl Event for StorageAddKey {
    const EVENT_TYPE: &'static str = LOCAL_STORAGE_ADD_KEY_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}

/// `localStorageUpdateKey` — update an existing key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StorageUpdateKey {
    #[serde(skip)]
    pub transaction_id: u32,
    #[serde(flatten)]
    pub data: StorageData,
}

impl Event for StorageUpdateKey {
    const EVENT_TYPE: &'static str = LOCAL_STORAGE_UPDATE_KEY_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}

/// `localStorageGetKey` — look a key up by hash.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageGetKey {
    #[serde(skip)]
    pub transaction_id: u32,
    pub hash_key: String,
}

impl Event for StorageGetKey {
    const EVENT_TYPE: &'static str = LOCAL_STORAGE_GET_KEY_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}

/// `localStorageDeleteKey` — delete a key by hash.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageDeleteKey {
    #[serde(skip)]
    pub transaction_id: u32,
    pub hash_key: String,
}

impl Event for StorageDeleteKey {
    const EVENT_TYPE: &'static str = LOCAL_STORAGE_DELETE_KEY_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}

/// `localStorageResponse` — result of a storage operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StorageResponse {
    #[serde(skip)]
    pub meta: DeviceMeta,
    #[serde(skip)]
    pub transaction_id: u32,
    #[serde(flatten)]
    pub data: StorageData,
}

impl Response for StorageResponse {
    const EVENT_TYPE: &'static str = LOCAL_STORAGE_RESPONSE_EVENT;

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
