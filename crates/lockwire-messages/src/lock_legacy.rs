//! Legacy map-keyed lock event still produced by old firmware.
//!
//! The shape is `{"state":{"<stateTag>":{"recloseDelay"?:u8}}}` — the state
//! is discriminated by a map key rather than an `eventType` tag, so this
//! adapter does not go through the standard envelope codec.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::{Map, Value};

use lockwire_core::error::{Result, WireError};

/// Substituted for a zero reclose delay on both encode and decode.
pub const DEFAULT_RECLOSE_DELAY: u8 = 5;

/// Discriminated lock state of the legacy shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Open,
    Closed,
    Auto,
}

impl LockState {
    /// The state's own event-type tag, used as the map key.
    pub fn as_tag(self) -> &'static str {
        match self {
            LockState::Open => "lockActionOpen",
            LockState::Closed => "lockActionClose",
            LockState::Auto => "lockActionAuto",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "lockActionOpen" => Some(LockState::Open),
            "lockActionClose" => Some(LockState::Closed),
            "lockActionAuto" => Some(LockState::Auto),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct LegacyFrame<'a> {
    #[serde(borrow, default)]
    state: Option<&'a RawValue>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StateBody {
    #[serde(default)]
    reclose_delay: u8,
}

/// A decoded legacy lock event: one state, plus the reclose delay for the
/// auto state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyLockEvent {
    pub state: LockState,
    /// Meaningful for [`LockState::Auto`] only; zero is normalized to
    /// [`DEFAULT_RECLOSE_DELAY`].
    pub reclose_delay: u8,
}

impl LegacyLockEvent {
    /// Decode the legacy shape. Exactly one recognized state key must be
    /// present; anything else fails with `InvalidEventType` naming the
    /// offending key.
    pub fn decode(raw: &str) -> Result<Self> {
        let frame: LegacyFrame = serde_json::from_str(raw)
            .map_err(|e| WireError::MalformedEnvelope(e.to_string()))?;
        let state = frame
            .state
            .ok_or_else(|| WireError::MalformedEnvelope("missing state object".into()))?;

        let entries: BTreeMap<String, StateBody> = serde_json::from_str(state.get())
            .map_err(|e| WireError::MalformedEnvelope(e.to_string()))?;

        if let Some(unknown) = entries.keys().find(|k| LockState::from_tag(k).is_none()) {
            return Err(WireError::InvalidEventType {
                got: unknown.clone(),
            });
        }

        let mut states = entries
            .iter()
            .filter_map(|(tag, body)| LockState::from_tag(tag).map(|s| (s, body)));

        match (states.next(), states.next()) {
            (Some((state, body)), None) => {
                let reclose_delay = match state {
                    LockState::Auto if body.reclose_delay == 0 => DEFAULT_RECLOSE_DELAY,
                    LockState::Auto => body.reclose_delay,
                    _ => 0,
                };
                Ok(Self {
                    state,
                    reclose_delay,
                })
            }
            (None, _) => Err(WireError::InvalidEventType { got: String::new() }),
            (Some(_), Some((second, _))) => Err(WireError::InvalidEventType {
                got: second.as_tag().to_owned(),
            }),
        }
    }

    /// Encode the legacy shape. The auto state carries `recloseDelay` with
    /// the same zero→5 substitution applied on decode, so a round trip
    /// through this adapter is idempotent.
    pub fn encode(&self) -> Result<String> {
        let mut body = Map::new();
        if self.state == LockState::Auto {
            let delay = if self.reclose_delay == 0 {
                DEFAULT_RECLOSE_DELAY
            } else {
                self.reclose_delay
            };
            body.insert("recloseDelay".into(), Value::from(delay));
        }

        let mut state = Map::new();
        state.insert(self.state.as_tag().into(), Value::Object(body));

        let mut root = Map::new();
        root.insert("state".into(), Value::Object(state));

        serde_json::to_string(&Value::Object(root))
            .map_err(|e| WireError::MalformedEnvelope(e.to_string()))
    }
}
