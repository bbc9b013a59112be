use motionmidirs::midi::{CcSender, ControlChange, DebugCcSender, MidiError, MockCcSender};
use std::error::Error;

#[test]
fn control_change_encodes_to_three_bytes() {
    let event = ControlChange {
        channel: 0,
        controller: 20,
        value: 100,
    };
    assert_eq!(event.to_bytes(), [0xB0, 20, 100]);
}

#[test]
fn channel_is_masked_into_status_byte() {
    let event = ControlChange {
        channel: 5,
        controller: 21,
        value: 64,
    };
    assert_eq!(event.to_bytes(), [0xB5, 21, 64]);

    let event = ControlChange {
        channel: 0x1F,
        controller: 22,
        value: 1,
    };
    assert_eq!(event.to_bytes(), [0xBF, 22, 1]);
}

#[test]
fn midi_error_display() {
    let send_error = MidiError::SendError("Failed to send".to_string());
    let conn_error = MidiError::ConnectionError("Failed to connect".to_string());

    assert_eq!(send_error.to_string(), "MIDI send error: Failed to send");
    assert_eq!(
        conn_error.to_string(),
        "MIDI connection error: Failed to connect"
    );
}

#[test]
fn midi_error_as_error() {
    let error = MidiError::SendError("test error".to_string());
    let _: &dyn Error = &error;
}

#[test]
fn debug_sender_never_fails() {
    let mut sender = DebugCcSender::new();
    assert!(sender.send_cc(20, 100).is_ok());
    assert!(sender.send_cc(22, 200).is_ok());
}

#[test]
fn mock_sender_records_messages() {
    let mut sender = MockCcSender::new();
    let log = sender.sent();

    sender.send_cc(20, 3).unwrap();
    sender.send_cc(22, 10).unwrap();

    assert_eq!(*log.lock().unwrap(), vec![(20, 3), (22, 10)]);
}

#[test]
fn failing_mock_sender_errors() {
    let mut sender = MockCcSender::failing();
    let log = sender.sent();

    let result = sender.send_cc(20, 3);
    assert!(result.is_err());
    if let Err(MidiError::SendError(msg)) = result {
        assert_eq!(msg, "mock send failure");
    } else {
        panic!("Expected SendError");
    }
    assert!(log.lock().unwrap().is_empty());
}
