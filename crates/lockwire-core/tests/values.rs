//! Scalar value types: hash keys, rssi, timestamps.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use lockwire_core::values::{HashKey, Rssi, Timestamp};
use lockwire_core::WireError;

#[test]
fn hash_key_accepts_whole_byte_hex() {
    for raw in ["0x1a2b", "0x00", "0xDEADBEEF", "0xaB"] {
        HashKey::new(raw).unwrap();
    }
}

#[test]
fn hash_key_rejects_bad_shapes() {
    for raw in [
        "1a2b",    // no prefix
        "0x",      // empty digits
        "0x1",     // odd length
        "0x1a2",   // odd length
        "0x1g",    // not hex
        "0X1a2b",  // wrong prefix case
        "",
    ] {
        let err = HashKey::new(raw).unwrap_err();
        assert_eq!(err, WireError::InvalidHashKey { got: raw.into() }, "{raw:?}");
    }
}

#[test]
fn hash_key_lenient_construction_defers_validation() {
    // From<&str> never fails; validate() reports the stored text.
    let key = HashKey::from("not-a-key");
    assert_eq!(key.as_str(), "not-a-key");
    assert!(key.validate().is_err());
}

#[test]
fn hash_key_serde_is_transparent() {
    let key = HashKey::new("0x1a2b").unwrap();
    assert_eq!(serde_json::to_string(&key).unwrap(), r#""0x1a2b""#);
    let back: HashKey = serde_json::from_str(r#""0x1a2b""#).unwrap();
    assert_eq!(back, key);
}

#[test]
fn rssi_bounds_are_inclusive() {
    assert!(Rssi::new(0).is_ok());
    assert!(Rssi::new(-100).is_ok());
    assert!(Rssi::new(-50).is_ok());
    assert_eq!(Rssi::new(1).unwrap_err(), WireError::InvalidRssi { got: 1 });
    assert_eq!(
        Rssi::new(-101).unwrap_err(),
        WireError::InvalidRssi { got: -101 }
    );
}

#[test]
fn rssi_from_wire_checks_before_narrowing() {
    assert_eq!(Rssi::from_wire(-40).unwrap().value(), -40);
    assert_eq!(
        Rssi::from_wire(-1000).unwrap_err(),
        WireError::InvalidRssi { got: -1000 }
    );
    assert_eq!(
        Rssi::from_wire(300).unwrap_err(),
        WireError::InvalidRssi { got: 300 }
    );
}

#[test]
fn timestamp_roundtrips_through_system_time() {
    let ts = Timestamp::from_unix(1_700_000_000);
    let sys: SystemTime = ts.into();
    assert_eq!(sys, UNIX_EPOCH + Duration::from_secs(1_700_000_000));
    assert_eq!(Timestamp::from(sys), ts);

    let pre_epoch = Timestamp::from_unix(-5);
    let sys: SystemTime = pre_epoch.into();
    assert_eq!(Timestamp::from(sys), pre_epoch);
}

#[test]
fn timestamp_serde_is_bare_seconds() {
    let ts = Timestamp::from_unix(1136239445);
    assert_eq!(serde_json::to_string(&ts).unwrap(), "1136239445");
    let back: Timestamp = serde_json::from_str("1136239445").unwrap();
    assert_eq!(back.unix(), 1136239445);
}
