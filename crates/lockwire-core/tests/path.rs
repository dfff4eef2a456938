//! Structural path lookup over raw JSON documents.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use lockwire_core::protocol::path::JsonPath;
use lockwire_core::WireError;

const DOC: &str = r#"{"event":{"eventType":"authEvent","payload":{"hashKey":"0x1a2b"},"transactionId":7}}"#;

#[test]
fn extracts_nested_value() {
    let path = JsonPath::new(["event", "payload", "hashKey"]);
    let raw = path.extract(DOC).unwrap().unwrap();
    assert_eq!(raw.get(), r#""0x1a2b""#);
}

#[test]
fn intermediate_values_stay_raw() {
    let path = JsonPath::new(["event", "payload"]);
    let raw = path.extract(DOC).unwrap().unwrap();
    assert_eq!(raw.get(), r#"{"hashKey":"0x1a2b"}"#);
}

#[test]
fn missing_key_is_none_not_error() {
    let path = JsonPath::new(["event", "missing"]);
    assert!(path.extract(DOC).unwrap().is_none());

    let path = JsonPath::new(["noSuchRoot", "payload"]);
    assert!(path.extract(DOC).unwrap().is_none());
}

#[test]
fn non_object_level_is_malformed() {
    // "eventType" holds a string, so descending through it must fail.
    let path = JsonPath::new(["event", "eventType", "deeper"]);
    let err = path.extract(DOC).unwrap_err();
    assert!(matches!(err, WireError::MalformedEnvelope(_)));

    let err = JsonPath::new(["a"]).extract("[1,2,3]").unwrap_err();
    assert!(matches!(err, WireError::MalformedEnvelope(_)));
}

#[test]
fn empty_path_yields_whole_document() {
    let path = JsonPath::new(std::iter::empty::<&str>());
    let raw = path.extract(DOC).unwrap().unwrap();
    assert_eq!(raw.get(), DOC);
}
