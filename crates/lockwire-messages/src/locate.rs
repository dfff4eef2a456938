//! Locate (identify) request.

use serde::{Deserialize, Serialize};

use crate::adapter::Event;

pub const LOCATE_REQUEST_EVENT: &str = "locateReq";

/// `locateReq` — make the device identify itself. Zero-payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocateRequest {
    #[serde(skip)]
    pub transaction_id: u32,
}

impl Event for LocateRequest {
    const EVENT_TYPE: &'static str = LOCATE_REQUEST_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}
