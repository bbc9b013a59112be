use crate::midi::{CcSender, MidiError, Result};
use std::sync::{Arc, Mutex};

/// Records every (controller, value) pair instead of touching hardware.
#[derive(Default)]
pub struct MockCcSender {
    log: Arc<Mutex<Vec<(u8, u8)>>>,
    fail_sends: bool,
}

impl MockCcSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender whose every `send_cc` fails, for exercising error paths.
    pub fn failing() -> Self {
        MockCcSender {
            log: Arc::new(Mutex::new(Vec::new())),
            fail_sends: true,
        }
    }

    /// Handle onto the recorded messages, usable after the sender has been
    /// boxed and moved into a bridge.
    pub fn sent(&self) -> Arc<Mutex<Vec<(u8, u8)>>> {
        self.log.clone()
    }
}

impl CcSender for MockCcSender {
    fn send_cc(&mut self, controller: u8, value: u8) -> Result<()> {
        if self.fail_sends {
            return Err(MidiError::SendError("mock send failure".to_string()));
        }
        self.log.lock().unwrap().push((controller, value));
        Ok(())
    }
}
