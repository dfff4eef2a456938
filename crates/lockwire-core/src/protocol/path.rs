//! Structural path lookup over raw JSON documents.
//!
//! Some message types need to peek a single leaf field (e.g. a lock status
//! sentinel) without materializing the whole payload. A `JsonPath` walks a
//! fixed chain of object keys; each step shallow-parses one object level and
//! leaves every value as `RawValue`, so siblings of the looked-up key are
//! never deserialized.

use std::collections::HashMap;

use serde_json::value::RawValue;

use crate::error::{Result, WireError};

/// Compiled lookup for a fixed object path such as `$.event.payload`.
///
/// Compiled once per distinct path (typically behind a `OnceLock`) and
/// shared read-only across threads; it is never mutated after construction.
#[derive(Debug, Clone)]
pub struct JsonPath {
    segments: Vec<String>,
}

impl JsonPath {
    /// Build a path from its key segments, root first.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Extract the sub-document at this path.
    ///
    /// Returns `Ok(None)` when a key along the path is absent, and
    /// `MalformedEnvelope` when a traversed level is not a JSON object.
    pub fn extract<'a>(&self, doc: &'a str) -> Result<Option<&'a RawValue>> {
        let mut current: &'a RawValue = serde_json::from_str(doc)
            .map_err(|e| WireError::MalformedEnvelope(e.to_string()))?;

        for segment in &self.segments {
            let level: HashMap<String, &'a RawValue> = serde_json::from_str(current.get())
                .map_err(|e| WireError::MalformedEnvelope(e.to_string()))?;

            match level.get(segment.as_str()) {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }

        Ok(Some(current))
    }
}
