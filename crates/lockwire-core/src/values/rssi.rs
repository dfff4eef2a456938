//! Received signal strength indication.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WireError};

/// Signal strength in dBm, constrained to [-100, 0] inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rssi(i8);

impl Rssi {
    pub const MIN: i8 = -100;
    pub const MAX: i8 = 0;

    /// Build a validated rssi value.
    pub fn new(value: i8) -> Result<Self> {
        let rssi = Self(value);
        rssi.validate()?;
        Ok(rssi)
    }

    /// Range-check a raw wire integer and convert.
    pub fn from_wire(value: i64) -> Result<Self> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(WireError::InvalidRssi { got: value });
        }
        Ok(Self(value as i8))
    }

    pub fn value(self) -> i8 {
        self.0
    }

    pub fn validate(self) -> Result<()> {
        if self.0 < Self::MIN || self.0 > Self::MAX {
            return Err(WireError::InvalidRssi {
                got: i64::from(self.0),
            });
        }
        Ok(())
    }
}

impl From<i8> for Rssi {
    fn from(value: i8) -> Self {
        Self(value)
    }
}
