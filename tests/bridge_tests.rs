use motionmidirs::bridge::{MotionBridge, X_CC, Y_CC, Z_CC};
use motionmidirs::midi::MockCcSender;
use std::sync::{Arc, Mutex};

fn bridge_with_log() -> (MotionBridge, Arc<Mutex<Vec<(u8, u8)>>>) {
    let sender = MockCcSender::new();
    let log = sender.sent();
    (MotionBridge::new(Box::new(sender)), log)
}

#[test]
fn emits_cc_for_deltas_at_or_above_threshold() {
    let (mut bridge, log) = bridge_with_log();

    bridge.handle_message(br#"{"x":3,"y":0,"z":10}"#);

    // x moved by 3 and z by 10; y stayed put
    assert_eq!(*log.lock().unwrap(), vec![(X_CC, 3), (Z_CC, 10)]);
    assert_eq!(bridge.last_sent(), [3, 0, 10]);
}

#[test]
fn sub_threshold_change_is_suppressed() {
    let (mut bridge, log) = bridge_with_log();

    bridge.handle_message(br#"{"x":3,"y":0,"z":10}"#);
    log.lock().unwrap().clear();

    bridge.handle_message(br#"{"x":4,"y":0,"z":10}"#);

    assert!(log.lock().unwrap().is_empty());
    assert_eq!(bridge.last_sent(), [3, 0, 10]);
}

#[test]
fn exact_threshold_delta_emits() {
    let (mut bridge, log) = bridge_with_log();

    bridge.handle_message(br#"{"y":2}"#);

    assert_eq!(*log.lock().unwrap(), vec![(Y_CC, 2)]);
    assert_eq!(bridge.last_sent(), [0, 2, 0]);
}

#[test]
fn missing_fields_default_to_zero() {
    let (mut bridge, log) = bridge_with_log();

    bridge.handle_message(br#"{"x":5}"#);

    assert_eq!(*log.lock().unwrap(), vec![(X_CC, 5)]);
    assert_eq!(bridge.last_sent(), [5, 0, 0]);
}

#[test]
fn malformed_payload_is_dropped() {
    let (mut bridge, log) = bridge_with_log();

    bridge.handle_message(b"not json");

    assert!(log.lock().unwrap().is_empty());
    assert_eq!(bridge.last_sent(), [0, 0, 0]);
}

#[test]
fn non_numeric_field_drops_whole_message() {
    let (mut bridge, log) = bridge_with_log();

    bridge.handle_message(br#"{"x":"fast","y":9}"#);

    assert!(log.lock().unwrap().is_empty());
    assert_eq!(bridge.last_sent(), [0, 0, 0]);
}

#[test]
fn state_survives_malformed_payload() {
    let (mut bridge, log) = bridge_with_log();

    bridge.handle_message(br#"{"x":3,"y":0,"z":10}"#);
    bridge.handle_message(b"{{{");

    assert_eq!(*log.lock().unwrap(), vec![(X_CC, 3), (Z_CC, 10)]);
    assert_eq!(bridge.last_sent(), [3, 0, 10]);
}

#[test]
fn values_above_cc_range_pass_through() {
    let (mut bridge, log) = bridge_with_log();

    bridge.handle_message(br#"{"x":200}"#);

    assert_eq!(*log.lock().unwrap(), vec![(X_CC, 200)]);
}

#[test]
fn send_failure_drops_rest_of_message() {
    let sender = MockCcSender::failing();
    let mut bridge = MotionBridge::new(Box::new(sender));

    bridge.handle_message(br#"{"x":10,"y":0,"z":9}"#);

    // the x send failed, so nothing was recorded as sent
    assert_eq!(bridge.last_sent(), [0, 0, 0]);
}
