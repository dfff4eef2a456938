//! Generic envelope adapter shared by every message type.
//!
//! A message struct doubles as its own payload shape: the correlation id and
//! device metadata are `#[serde(skip)]`ed out of the payload and spliced in
//! from the envelope, so each concrete type only declares its wire fields
//! and tag. `validate()` runs identically before encode and after decode,
//! which keeps field validation symmetric: an invalid in-memory value never
//! reaches the wire, and an invalid wire value never survives a decode.

use serde::de::DeserializeOwned;
use serde::Serialize;

use lockwire_core::error::Result;
use lockwire_core::protocol::envelope::{self, DeviceMeta};

/// A cloud-to-device message carried by the canonical request envelope
/// `{"event":{"eventType","payload","transactionId"}}`.
pub trait Event: Serialize + DeserializeOwned {
    /// Discriminator tag this message answers to.
    const EVENT_TYPE: &'static str;

    fn transaction_id(&self) -> u32;
    fn set_transaction_id(&mut self, id: u32);

    /// Field checks applied identically before encode and after decode.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Encode into the request envelope. Validation failures emit no bytes.
    fn encode(&self) -> Result<String> {
        self.validate()?;
        envelope::encode_event(Self::EVENT_TYPE, self.transaction_id(), self)
    }

    /// Decode from the request envelope. The tag check short-circuits before
    /// the payload is inspected; the value is only constructed once every
    /// check has passed.
    fn decode(raw: &str) -> Result<Self> {
        let event = envelope::decode_event(raw, Self::EVENT_TYPE)?;
        let mut msg: Self = event.parse_payload()?;
        msg.set_transaction_id(event.transaction_id);
        msg.validate()?;
        Ok(msg)
    }
}

/// A device-to-cloud message carried by the flat response envelope, which
/// adds `short_addr` / `ext_addr` / `rssi` beside the envelope fields.
pub trait Response: Serialize + DeserializeOwned {
    /// Discriminator tag this message answers to.
    const EVENT_TYPE: &'static str;

    fn meta(&self) -> &DeviceMeta;
    fn set_meta(&mut self, meta: DeviceMeta);

    /// Correlation id; messages without one report 0.
    fn transaction_id(&self) -> u32 {
        0
    }
    fn set_transaction_id(&mut self, _id: u32) {}

    /// Field checks applied identically before encode and after decode.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Encode into the response envelope. The rssi range is checked before
    /// any bytes are produced.
    fn encode(&self) -> Result<String> {
        self.validate()?;
        envelope::encode_response(self.meta(), Self::EVENT_TYPE, self.transaction_id(), self)
    }

    /// Decode from the response envelope: tag check, then rssi range, then
    /// payload.
    fn decode(raw: &str) -> Result<Self> {
        let response = envelope::decode_response(raw, Self::EVENT_TYPE)?;
        let mut msg: Self = response.parse_payload()?;
        msg.set_transaction_id(response.transaction_id);
        msg.set_meta(response.meta);
        msg.validate()?;
        Ok(msg)
    }
}
