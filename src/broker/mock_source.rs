use crate::broker::{BrokerError, MotionSource, Result};
use std::collections::VecDeque;
use std::time::Duration;

/// Scripted in-memory source for exercising the loop without a broker.
#[derive(Default)]
pub struct MockMotionSource {
    queued: VecDeque<Vec<u8>>,
    fail_pumps: usize,
    pub subscriptions: Vec<String>,
    pub reconnects: usize,
}

impl MockMotionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_payload(&mut self, payload: &[u8]) {
        self.queued.push_back(payload.to_vec());
    }

    /// Makes the next pump call fail with a connection error.
    pub fn fail_next_pump(&mut self) {
        self.fail_pumps += 1;
    }
}

impl MotionSource for MockMotionSource {
    fn subscribe(&mut self, topic: &str) -> Result<()> {
        self.subscriptions.push(topic.to_string());
        Ok(())
    }

    fn pump(&mut self, _timeout: Duration, handler: &mut dyn FnMut(&[u8])) -> Result<()> {
        if self.fail_pumps > 0 {
            self.fail_pumps -= 1;
            return Err(BrokerError::ConnectionError(
                "mock connection failure".to_string(),
            ));
        }
        while let Some(payload) = self.queued.pop_front() {
            handler(&payload);
        }
        Ok(())
    }

    fn reconnect(&mut self) -> Result<()> {
        self.reconnects += 1;
        Ok(())
    }
}
