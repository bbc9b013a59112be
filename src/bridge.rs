use crate::midi::CcSender;
use log::{error, info};
use serde::Deserialize;
use std::error::Error;

/// MIDI CC numbers for the X, Y, Z axes
pub const X_CC: u8 = 20;
pub const Y_CC: u8 = 21;
pub const Z_CC: u8 = 22;

/// Minimum change from the last sent value before a new CC goes out
pub const MIDI_THRESHOLD: i32 = 2;

/// One inbound motion reading. Absent fields default to 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MotionSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

struct AxisState {
    controller: u8,
    last_sent: i32,
}

/// Maps motion samples onto debounced Control Change messages through the
/// sender bound at startup.
pub struct MotionBridge {
    axes: [AxisState; 3],
    sender: Box<dyn CcSender>,
}

impl MotionBridge {
    pub fn new(sender: Box<dyn CcSender>) -> Self {
        MotionBridge {
            axes: [
                AxisState {
                    controller: X_CC,
                    last_sent: 0,
                },
                AxisState {
                    controller: Y_CC,
                    last_sent: 0,
                },
                AxisState {
                    controller: Z_CC,
                    last_sent: 0,
                },
            ],
            sender,
        }
    }

    /// Handles one raw broker payload. Any failure while parsing or sending
    /// is logged and the rest of the message dropped; state keeps whatever
    /// was already applied.
    pub fn handle_message(&mut self, payload: &[u8]) {
        if let Err(e) = self.process(payload) {
            error!("Error processing message: {}", e);
        }
    }

    fn process(&mut self, payload: &[u8]) -> Result<(), Box<dyn Error>> {
        let sample: MotionSample = serde_json::from_slice(payload)?;
        info!("Received: X={}, Y={}, Z={}", sample.x, sample.y, sample.z);

        let values = [sample.x as i32, sample.y as i32, sample.z as i32];
        for (axis, new) in self.axes.iter_mut().zip(values) {
            if (new - axis.last_sent).abs() >= MIDI_THRESHOLD {
                self.sender.send_cc(axis.controller, new as u8)?;
                axis.last_sent = new;
                info!("Sent MIDI CC {}: {}", axis.controller, new);
            }
        }

        Ok(())
    }

    /// Last values sent per axis, in X, Y, Z order.
    pub fn last_sent(&self) -> [i32; 3] {
        [
            self.axes[0].last_sent,
            self.axes[1].last_sent,
            self.axes[2].last_sent,
        ]
    }
}
