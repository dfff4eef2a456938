//! Time synchronization trigger.

use serde::{Deserialize, Serialize};

use crate::adapter::Event;

pub const TIME_SYNC_EVENT: &str = "timeSync";

/// `timeSync` — tell the device to resynchronize its clock. Zero-payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeSync {
    #[serde(skip)]
    pub transaction_id: u32,
}

impl Event for TimeSync {
    const EVENT_TYPE: &'static str = TIME_SYNC_EVENT;

    fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    fn set_transaction_id(&mut self, id: u32) {
        self.transaction_id = id;
    }
}
