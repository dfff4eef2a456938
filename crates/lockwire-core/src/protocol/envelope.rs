//! Canonical event envelope codec.
//!
//! Requests travel as `{"event":{"eventType","payload","transactionId"}}`;
//! device-originated responses are flat and add `short_addr` / `ext_addr` /
//! `rssi` as siblings of the same three fields. Payloads stay raw
//! (`RawValue`) on decode so the concrete message type can deserialize — or
//! just peek — them later.
//!
//! Validation order is fixed: structural parse, then the event-type check,
//! then the rssi range check (responses), then payload deserialization. A
//! tag mismatch short-circuits with no payload inspection.

use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::error::{Result, WireError};
use crate::protocol::path::JsonPath;
use crate::values::Rssi;

/// Wire rendering of an absent payload. Device parsers depend on a
/// structurally present payload object, never `null`.
pub const EMPTY_PAYLOAD: &str = "{}";

fn event_path() -> &'static JsonPath {
    static PATH: OnceLock<JsonPath> = OnceLock::new();
    PATH.get_or_init(|| JsonPath::new(["event"]))
}

/// Out-of-band device metadata carried by response envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceMeta {
    /// 16-bit network address, hex string.
    pub short_addr: String,
    /// 64-bit network address, hex string.
    pub ext_addr: String,
    /// Received signal strength.
    pub rssi: Rssi,
}

#[derive(Serialize)]
struct EventFrame<'a> {
    #[serde(rename = "eventType")]
    event_type: &'a str,
    payload: &'a RawValue,
    #[serde(rename = "transactionId")]
    transaction_id: u32,
}

#[derive(Serialize)]
struct EventWrapper<'a> {
    event: EventFrame<'a>,
}

#[derive(Serialize)]
struct ResponseFrame<'a> {
    short_addr: &'a str,
    ext_addr: &'a str,
    rssi: i8,
    #[serde(rename = "eventType")]
    event_type: &'a str,
    payload: &'a RawValue,
    #[serde(rename = "transactionId")]
    transaction_id: u32,
}

#[derive(Deserialize)]
struct EventFrameIn<'a> {
    #[serde(rename = "eventType", default)]
    event_type: String,
    #[serde(borrow, default)]
    payload: Option<&'a RawValue>,
    #[serde(rename = "transactionId", default)]
    transaction_id: u32,
}

#[derive(Deserialize)]
struct ResponseFrameIn<'a> {
    #[serde(default)]
    short_addr: String,
    #[serde(default)]
    ext_addr: String,
    #[serde(default)]
    rssi: i64,
    #[serde(rename = "eventType", default)]
    event_type: String,
    #[serde(borrow, default)]
    payload: Option<&'a RawValue>,
    #[serde(rename = "transactionId", default)]
    transaction_id: u32,
}

fn payload_to_raw<P>(payload: &P) -> Result<Box<RawValue>>
where
    P: Serialize + ?Sized,
{
    let body = serde_json::to_string(payload)
        .map_err(|e| WireError::MalformedPayload(e.to_string()))?;
    RawValue::from_string(body).map_err(|e| WireError::MalformedPayload(e.to_string()))
}

/// Encode a request envelope. A payload that serializes to a zero-field
/// object renders as literal `{}`.
pub fn encode_event<P>(tag: &str, transaction_id: u32, payload: &P) -> Result<String>
where
    P: Serialize + ?Sized,
{
    let raw = payload_to_raw(payload)?;
    let wrapper = EventWrapper {
        event: EventFrame {
            event_type: tag,
            payload: &raw,
            transaction_id,
        },
    };
    serde_json::to_string(&wrapper).map_err(|e| WireError::MalformedEnvelope(e.to_string()))
}

/// A decoded request envelope with its payload still raw.
#[derive(Debug)]
pub struct DecodedEvent<'a> {
    pub transaction_id: u32,
    payload: Option<&'a RawValue>,
}

impl<'a> DecodedEvent<'a> {
    /// Raw payload document; an absent payload reads as `{}`.
    pub fn payload_str(&self) -> &'a str {
        self.payload.map(RawValue::get).unwrap_or(EMPTY_PAYLOAD)
    }

    /// Deserialize the payload into the concrete message shape.
    pub fn parse_payload<P: DeserializeOwned>(&self) -> Result<P> {
        serde_json::from_str(self.payload_str())
            .map_err(|e| WireError::MalformedPayload(e.to_string()))
    }
}

/// Decode a request envelope, validating the tag before the payload is
/// touched.
pub fn decode_event<'a>(raw: &'a str, expected: &str) -> Result<DecodedEvent<'a>> {
    let event = event_path()
        .extract(raw)?
        .ok_or_else(|| WireError::MalformedEnvelope("missing event object".into()))?;

    let frame: EventFrameIn<'a> = serde_json::from_str(event.get())
        .map_err(|e| WireError::MalformedEnvelope(e.to_string()))?;

    if frame.event_type != expected {
        return Err(WireError::InvalidEventType {
            got: frame.event_type,
        });
    }

    Ok(DecodedEvent {
        transaction_id: frame.transaction_id,
        payload: frame.payload,
    })
}

/// A decoded response envelope with its payload still raw.
#[derive(Debug)]
pub struct DecodedResponse<'a> {
    pub meta: DeviceMeta,
    pub transaction_id: u32,
    payload: Option<&'a RawValue>,
}

impl<'a> DecodedResponse<'a> {
    /// Raw payload document; an absent payload reads as `{}`.
    pub fn payload_str(&self) -> &'a str {
        self.payload.map(RawValue::get).unwrap_or(EMPTY_PAYLOAD)
    }

    /// Deserialize the payload into the concrete message shape.
    pub fn parse_payload<P: DeserializeOwned>(&self) -> Result<P> {
        serde_json::from_str(self.payload_str())
            .map_err(|e| WireError::MalformedPayload(e.to_string()))
    }
}

/// Encode a response envelope (flat shape). The rssi range is checked before
/// any bytes are produced.
pub fn encode_response<P>(
    meta: &DeviceMeta,
    tag: &str,
    transaction_id: u32,
    payload: &P,
) -> Result<String>
where
    P: Serialize + ?Sized,
{
    meta.rssi.validate()?;
    let raw = payload_to_raw(payload)?;
    let frame = ResponseFrame {
        short_addr: &meta.short_addr,
        ext_addr: &meta.ext_addr,
        rssi: meta.rssi.value(),
        event_type: tag,
        payload: &raw,
        transaction_id,
    };
    serde_json::to_string(&frame).map_err(|e| WireError::MalformedEnvelope(e.to_string()))
}

/// Decode a response envelope. The tag check runs first, then the rssi range
/// check, then the caller deserializes the payload.
pub fn decode_response<'a>(raw: &'a str, expected: &str) -> Result<DecodedResponse<'a>> {
    let frame: ResponseFrameIn<'a> = serde_json::from_str(raw)
        .map_err(|e| WireError::MalformedEnvelope(e.to_string()))?;

    if frame.event_type != expected {
        return Err(WireError::InvalidEventType {
            got: frame.event_type,
        });
    }

    let rssi = Rssi::from_wire(frame.rssi)?;

    Ok(DecodedResponse {
        meta: DeviceMeta {
            short_addr: frame.short_addr,
            ext_addr: frame.ext_addr,
            rssi,
        },
        transaction_id: frame.transaction_id,
        payload: frame.payload,
    })
}
