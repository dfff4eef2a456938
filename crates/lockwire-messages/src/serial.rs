//! Serial connection control messages.

use serde::{Deserialize, Serialize};

use lockwire_core::protocol::envelope::DeviceMeta;
use lockwire_core::wire_enum;

use crate::adapter::{Event, Response};

pub const SERIAL_CONNECTION_REQUEST_EVENT: &str = "serialConnectionReq";
pub const SERIAL_CONNECTION_RESPONSE_EVENT: &str = "serialConnectionRsp";

wire_enum! {
    /// Serial link control action.
    pub enum SerialConnectionAction as "serialConnectionAction" {
        Start = "start",
        Reset = "reset",
    }
}

/// `serialConnectionReq` — control the device's serial link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerialConnectionRequest {
    #[serde(skip)]
    pub transaction_id: u32,
    /// Historical wire name; the field holds a serial action, not a
    /// transaction id.
    #[serde(rename = "transactionIdAction")]
    pub action: SerialConnectionAction,
}

impl Event for SerialConnectionRequest {
    const EVENT_TYPE: &'static str = SERIAL_CONNECTION_REQUEST_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}

/// `serialConnectionRsp` — serial link status. Carries no correlation id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SerialConnectionResponse {
    #[serde(skip)]
    pub meta: DeviceMeta,
    pub status: i32,
}

impl Response for SerialConnectionResponse {
    const EVENT_TYPE: &'static str = SERIAL_CONNECTION_RESPONSE_EVENT;

    fn meta(&self) -> &DeviceMeta {
        &self.meta
    }

    fn set_meta(&mut self, meta: DeviceMeta) {
        self.meta = meta;
    }
}
