//! Network, serial, counter, and miscellaneous messages.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use lockwire_core::protocol::enums::WireEnum;
use lockwire_core::protocol::envelope::DeviceMeta;
use lockwire_core::values::Rssi;
use lockwire_messages::locate::LocateRequest;
use lockwire_messages::network::{
    Device, GetNetworkInfo, GetNetworkInfoResponse, NetworkAction, RemoveDeviceRequest,
    RemoveDeviceResponse, SmartObjects, UpdateNetworkState,
};
use lockwire_messages::passthrough::{PassThrough, PassThroughData};
use lockwire_messages::serial::{
    SerialConnectionAction, SerialConnectionRequest, SerialConnectionResponse,
};
use lockwire_messages::time_sync::TimeSync;
use lockwire_messages::transaction_id::{
    TransactionIdAction, TransactionIdRequest, TransactionIdResponse,
};
use lockwire_messages::{Event, Response};

#[test]
fn zero_payload_requests_render_identically() {
    assert_eq!(
        GetNetworkInfo { transaction_id: 2 }.encode().unwrap(),
        r#"{"event":{"eventType":"getNwkInfoReq","payload":{},"transactionId":2}}"#
    );
    assert_eq!(
        LocateRequest { transaction_id: 3 }.encode().unwrap(),
        r#"{"event":{"eventType":"locateReq","payload":{},"transactionId":3}}"#
    );
    assert_eq!(
        TimeSync { transaction_id: 4 }.encode().unwrap(),
        r#"{"event":{"eventType":"timeSync","payload":{},"transactionId":4}}"#
    );
}

#[test]
fn update_network_state_roundtrip() {
    let msg = UpdateNetworkState {
        transaction_id: 5,
        action: NetworkAction::Open,
        duration: 60_000_000_000,
    };
    let doc = msg.encode().unwrap();
    assert_eq!(
        doc,
        r#"{"event":{"eventType":"updateNetworkState","payload":{"action":"open","duration":60000000000},"transactionId":5}}"#
    );
    assert_eq!(UpdateNetworkState::decode(&doc).unwrap(), msg);
    assert!(NetworkAction::decode("reopen").is_err());
}

#[test]
fn remove_device_request_uses_ext_address() {
    let msg = RemoveDeviceRequest {
        transaction_id: 6,
        ext_address: "0x0011223344556677".into(),
    };
    assert_eq!(
        msg.encode().unwrap(),
        r#"{"event":{"eventType":"removeDeviceReq","payload":{"extAddress":"0x0011223344556677"},"transactionId":6}}"#
    );
}

#[test]
fn remove_device_response_omits_empty_fields() {
    let msg = RemoveDeviceResponse {
        ext_addr: "0x0011223344556677".into(),
        remove_device_addr: String::new(),
        error: String::new(),
    };
    assert_eq!(
        serde_json::to_string(&msg).unwrap(),
        r#"{"ext_addr":"0x0011223344556677"}"#
    );

    let doc = r#"{"ext_addr":"0x0011223344556677","removeDeviceAddr":"0x1234","error":"timeout"}"#;
    let back: RemoveDeviceResponse = serde_json::from_str(doc).unwrap();
    assert_eq!(back.remove_device_addr, "0x1234");
    assert_eq!(back.error, "timeout");
}

#[test]
fn network_info_report_is_a_plain_document() {
    let report = GetNetworkInfoResponse {
        name: "gw-1".into(),
        channels: 11,
        pan_id: "0xbeef".into(),
        short_addr: "0x0000".into(),
        ext_addr: "0x0011223344556677".into(),
        security_enabled: 1,
        mode: "coordinator".into(),
        state: "up".into(),
        fw_version: "3.1.0".into(),
        devices: vec![Device {
            name: "lock-7".into(),
            active: "true".into(),
            short_addr: "0x1234".into(),
            ext_addr: "0x8899aabbccddeeff".into(),
            topic: "locks/7".into(),
            smart_objects: SmartObjects {},
        }],
    };
    let doc = serde_json::to_string(&report).unwrap();
    let back: GetNetworkInfoResponse = serde_json::from_str(&doc).unwrap();
    assert_eq!(back, report);
}

#[test]
fn serial_request_keeps_the_historical_field_name() {
    let msg = SerialConnectionRequest {
        transaction_id: 7,
        action: SerialConnectionAction::Start,
    };
    assert_eq!(
        msg.encode().unwrap(),
        r#"{"event":{"eventType":"serialConnectionReq","payload":{"transactionIdAction":"start"},"transactionId":7}}"#
    );
}

#[test]
fn serial_response_has_no_correlation_id() {
    let msg = SerialConnectionResponse {
        meta: DeviceMeta {
            short_addr: "0x1234".into(),
            ext_addr: "0xaa".into(),
            rssi: Rssi::new(-33).unwrap(),
        },
        status: 1,
    };
    let doc = msg.encode().unwrap();
    assert_eq!(
        doc,
        r#"{"short_addr":"0x1234","ext_addr":"0xaa","rssi":-33,"eventType":"serialConnectionRsp","payload":{"status":1},"transactionId":0}"#
    );
    assert_eq!(SerialConnectionResponse::decode(&doc).unwrap(), msg);
}

#[test]
fn counter_request_always_sends_zero_id() {
    let msg = TransactionIdRequest {
        action: TransactionIdAction::Reset,
    };
    assert_eq!(
        msg.encode().unwrap(),
        r#"{"event":{"eventType":"transactionIdReq","payload":{"action":"reset"},"transactionId":0}}"#
    );
}

#[test]
fn counter_response_roundtrip() {
    let msg = TransactionIdResponse {
        meta: DeviceMeta {
            short_addr: "0x1234".into(),
            ext_addr: "0xaa".into(),
            rssi: Rssi::new(-33).unwrap(),
        },
        device_transaction_id: 1234,
    };
    assert_eq!(TransactionIdResponse::decode(&msg.encode().unwrap()).unwrap(), msg);
}

#[test]
fn passthrough_document_roundtrip() {
    let doc = r#"{"event":{"eventType":"passThrough","payload":{"commandId":9,"data":[{"type":"hex","data":"deadbeef"},{"data":"plain"}]},"status":0,"transactionId":77}}"#;
    let msg: PassThrough = serde_json::from_str(doc).unwrap();
    assert_eq!(msg.event.event_type, "passThrough");
    assert_eq!(msg.event.transaction_id, 77);
    assert_eq!(
        msg.event.payload.data,
        vec![
            PassThroughData {
                kind: Some("hex".into()),
                data: "deadbeef".into(),
            },
            PassThroughData {
                kind: None,
                data: "plain".into(),
            },
        ]
    );
    let back: PassThrough = serde_json::from_str(&serde_json::to_string(&msg).unwrap()).unwrap();
    assert_eq!(back, msg);
}
