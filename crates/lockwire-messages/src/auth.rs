//! Authentication event exchanged on credential presentation.

use serde::{Deserialize, Serialize};

use lockwire_core::error::Result;
use lockwire_core::values::{HashKey, Timestamp};
use lockwire_core::wire_enum;

use crate::adapter::Event;

pub const AUTH_EVENT: &str = "authEvent";

wire_enum! {
    /// How a credential was presented.
    pub enum AuthType as "authType" {
        None = "none",
        Nfc = "NFC",
        Qr = "QR",
        Mobile = "Mobile",
        NumPad = "numPad",
    }
}

wire_enum! {
    /// Outcome of an authentication attempt.
    ///
    /// Wire spellings are historical and must not be corrected.
    pub enum AuthStatus as "authStatus" {
        None = "none",
        SuccessOffline = "succesOffline",
        FailedOffline = "failedOffline",
        FailedPrivacy = "failedPrivacy",
        VerifyOnline = "verifyOnline",
        FailedOnline = "failedOnline",
        SuccessOnline = "successOnline",
        ErrorTimeNotSet = "errorTimeNotSet",
        NotFoundOffline = "NotFoundOffline",
        ErrorEncryption = "errorEncryption",
    }
}

/// `authEvent` — a credential was presented at the device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auth {
    #[serde(skip)]
    pub transaction_id: u32,
    pub hash_key: HashKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    pub auth_type: AuthType,
    pub auth_status: AuthStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channel_ids: Vec<i32>,
}

impl Event for Auth {
    const EVENT_TYPE: &'static str = AUTH_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }

    fn validate(&self) -> Result<()> {
        self.hash_key.validate()
    }
}
