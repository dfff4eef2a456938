//! Device transaction-counter management.

use serde::{Deserialize, Serialize};

use lockwire_core::protocol::envelope::DeviceMeta;
use lockwire_core::wire_enum;

use crate::adapter::{Event, Response};

pub const TRANSACTION_ID_REQUEST_EVENT: &str = "transactionIdReq";
pub const TRANSACTION_ID_RESPONSE_EVENT: &str = "transactionIdRsp";

wire_enum! {
    /// Read or reset the device's transaction counter.
    pub enum TransactionIdAction as "action" {
        Read = "read",
        Reset = "reset",
    }
}

/// `transactionIdReq` — read or reset the device counter. Carries no
/// correlation id of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionIdRequest {
    pub action: TransactionIdAction,
}

impl Event for TransactionIdRequest {
    const EVENT_TYPE: &'static str = TRANSACTION_ID_REQUEST_EVENT;

    fn transaction_id(&self) -> u32 {
        0
    }

    fn set_transaction_id(&mut self, _id: u32) {}
}

/// `transactionIdRsp` — the device's current counter value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionIdResponse {
    #[serde(skip)]
    pub meta: DeviceMeta,
    pub device_transaction_id: u32,
}

impl Response for TransactionIdResponse {
    const EVENT_TYPE: &'static str = TRANSACTION_ID_RESPONSE_EVENT;

    fn meta(&self) -> &DeviceMeta {
        &self.meta
    }

    fn set_meta(&mut self, meta: DeviceMeta) {
        self.meta = meta;
    }
}
