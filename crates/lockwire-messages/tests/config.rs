//! Configuration read/update/response messages.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use lockwire_core::protocol::envelope::DeviceMeta;
use lockwire_core::values::Rssi;
use lockwire_messages::config::{
    BuzzerVolume, ConfigResponse, ConfigResponseStatus, DeviceRole, DeviceType, ReadConfig,
    UpdateConfig,
};
use lockwire_messages::{Event, Response, WireError};

#[test]
fn read_emits_flags_in_declaration_order() {
    // Input order does not matter; unknown keys are ignored.
    let mut msg = ReadConfig::from_keys(["deviceRole", "txPower", "futureKey"]);
    msg.transaction_id = 3;
    assert_eq!(
        msg.encode().unwrap(),
        r#"{"event":{"eventType":"deviceConfigRead","payload":{"txPower":true,"deviceRole":true},"transactionId":3}}"#
    );
}

#[test]
fn read_with_no_flags_is_zero_payload() {
    let msg = ReadConfig::default();
    assert_eq!(
        msg.encode().unwrap(),
        r#"{"event":{"eventType":"deviceConfigRead","payload":{},"transactionId":0}}"#
    );
}

#[test]
fn read_roundtrip_preserves_flags() {
    let mut msg = ReadConfig::from_keys(["recloseDelay", "buzzerVolume", "googleSmartTapEnabled"]);
    msg.transaction_id = 11;
    let doc = msg.encode().unwrap();
    assert_eq!(ReadConfig::decode(&doc).unwrap(), msg);
}

#[test]
fn update_emits_only_set_properties() {
    let msg = UpdateConfig {
        reclose_delay: Some(0),
        buzzer_volume: Some(BuzzerVolume::Medium),
        ..UpdateConfig::default()
    };
    assert_eq!(
        msg.encode().unwrap(),
        r#"{"event":{"eventType":"deviceConfigUpdate","payload":{"recloseDelay":0,"buzzerVolume":"medium"},"transactionId":0}}"#
    );
}

#[test]
fn unset_update_properties_survive_a_roundtrip() {
    let msg = UpdateConfig {
        transaction_id: 2,
        tx_power: Some(8),
        status_update_interval: Some(600),
        installed_relay_module_ids: Some(vec![1, 2, 3]),
        google_smart_tap_enabled: Some(false),
        ..UpdateConfig::default()
    };
    let decoded = UpdateConfig::decode(&msg.encode().unwrap()).unwrap();
    assert_eq!(decoded, msg);
    // A set zero/false is distinguishable from absent.
    assert_eq!(decoded.google_smart_tap_enabled, Some(false));
    assert_eq!(decoded.reclose_delay, None);
}

#[test]
fn response_decodes_typed_enums() {
    let doc = r#"{"short_addr":"0x1234","ext_addr":"0x0011223344556677","rssi":-60,"eventType":"deviceConfigResponse","payload":{"status":"readOK","txPower":8,"deviceType":"FullCloudLock","deviceRole":"Master","recloseDelay":5},"transactionId":3}"#;
    let msg = ConfigResponse::decode(doc).unwrap();
    assert_eq!(msg.transaction_id, 3);
    assert_eq!(msg.meta.rssi, Rssi::new(-60).unwrap());
    assert_eq!(msg.status, ConfigResponseStatus::ReadOk);
    assert_eq!(msg.device_type, Some(DeviceType::FullCloudLock));
    assert_eq!(msg.device_role, Some(DeviceRole::Master));
    assert_eq!(msg.reclose_delay, Some(5));
    assert_eq!(msg.buzzer_volume, None);
}

#[test]
fn response_encodes_flat() {
    let msg = ConfigResponse {
        meta: DeviceMeta {
            short_addr: "0x1234".into(),
            ext_addr: "0xaa".into(),
            rssi: Rssi::new(-60).unwrap(),
        },
        transaction_id: 3,
        status: ConfigResponseStatus::UpdateOk,
        tx_power: None,
        device_type: None,
        device_role: None,
        front_breakout: None,
        back_breakout: None,
        reclose_delay: None,
        status_msg_flags: None,
        status_update_interval: None,
        installed_relay_module_ids: None,
        external_relay_mode: None,
        slave_fw_address: None,
        buzzer_volume: None,
        emv_co_key_version: None,
        emv_co_collector_id: None,
        google_smart_tap_enabled: None,
    };
    assert_eq!(
        msg.encode().unwrap(),
        r#"{"short_addr":"0x1234","ext_addr":"0xaa","rssi":-60,"eventType":"deviceConfigResponse","payload":{"status":"updateOK"},"transactionId":3}"#
    );
}

#[test]
fn response_rejects_unknown_status() {
    let doc = r#"{"short_addr":"0x1","ext_addr":"0x2","rssi":-60,"eventType":"deviceConfigResponse","payload":{"status":"mostlyOK"},"transactionId":3}"#;
    let err = ConfigResponse::decode(doc).unwrap_err();
    match err {
        WireError::MalformedPayload(msg) => assert!(msg.contains("mostlyOK"), "{msg}"),
        other => panic!("unexpected error: {other:?}"),
    }
}
