//! Captured wire documents decoded end to end.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use lockwire_core::protocol::envelope;
use lockwire_core::WireError;

fn load(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/vectors")
        .join(name);
    fs::read_to_string(path).unwrap()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LockBody {
    lock_action_status: String,
}

#[test]
fn status_request_vector() {
    let doc = load("event_status_request.json");
    let ev = envelope::decode_event(&doc, "deviceStatusReq").unwrap();
    assert_eq!(ev.transaction_id, 42);
    assert_eq!(ev.payload_str(), "{}");
}

#[test]
fn wrong_tag_vector() {
    let doc = load("event_wrong_tag.json");
    let err = envelope::decode_event(&doc, "lockActionResponse").unwrap_err();
    assert_eq!(
        err,
        WireError::InvalidEventType {
            got: "wrongTag".into()
        }
    );
}

#[test]
fn lock_response_vector() {
    let doc = load("response_lock.json");
    let rsp = envelope::decode_response(&doc, "lockActionResponse").unwrap();
    assert_eq!(rsp.meta.short_addr, "0x1234");
    assert_eq!(rsp.meta.ext_addr, "0x0011223344556677");
    assert_eq!(rsp.meta.rssi.value(), -54);
    assert_eq!(rsp.transaction_id, 7);
    let body: LockBody = rsp.parse_payload().unwrap();
    assert_eq!(body.lock_action_status, "lockOpened");
}

#[test]
fn bad_rssi_vector() {
    let doc = load("response_bad_rssi.json");
    let err = envelope::decode_response(&doc, "lockActionResponse").unwrap_err();
    assert_eq!(err, WireError::InvalidRssi { got: -254 });
}
