use crate::midi::{CcSender, Result};
use log::info;

/// Last-resort sender that only logs the would-be message, so the program
/// keeps running without any MIDI hardware attached.
#[derive(Debug, Default)]
pub struct DebugCcSender;

impl DebugCcSender {
    pub fn new() -> Self {
        DebugCcSender
    }
}

impl CcSender for DebugCcSender {
    fn send_cc(&mut self, controller: u8, value: u8) -> Result<()> {
        info!("Would send MIDI CC {}: {}", controller, value);
        Ok(())
    }
}
