//! Credential hash key: `0x` + hex digits.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WireError};

/// Hash key of a stored credential, wire-encoded as `"0x"` followed by a
/// non-empty, even-length run of hex digits (whole bytes).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashKey(String);

impl HashKey {
    /// Build a validated hash key.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let key = Self(raw.into());
        key.validate()?;
        Ok(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check the wire format: `0x` prefix, non-empty even-length hex
    /// remainder.
    pub fn validate(&self) -> Result<()> {
        let digits = match self.0.strip_prefix("0x") {
            Some(digits) => digits,
            None => return Err(self.invalid()),
        };

        if digits.is_empty()
            || digits.len() % 2 != 0
            || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(self.invalid());
        }

        Ok(())
    }

    fn invalid(&self) -> WireError {
        WireError::InvalidHashKey {
            got: self.0.clone(),
        }
    }
}

impl From<String> for HashKey {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for HashKey {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl fmt::Display for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
