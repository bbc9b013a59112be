// event_loop.rs

use crate::bridge::MotionBridge;
use crate::broker::MotionSource;
use log::error;
use std::time::Duration;

/// How long each pump call may block before control returns to the loop.
pub const PUMP_SLICE: Duration = Duration::from_millis(100);

/// Drives the bridge from the broker: pump, dispatch, recover, repeat.
pub struct BridgeLoop<S: MotionSource> {
    source: S,
    bridge: MotionBridge,
    topic: String,
}

impl<S: MotionSource> BridgeLoop<S> {
    pub fn new(source: S, bridge: MotionBridge, topic: &str) -> Self {
        BridgeLoop {
            source,
            bridge,
            topic: topic.to_string(),
        }
    }

    /// Runs the receive loop for the lifetime of the process.
    pub fn run(&mut self) {
        loop {
            self.pump_once();
        }
    }

    /// One pump cycle. Messages are dispatched synchronously into the
    /// bridge; a connectivity error is answered with reconnect plus
    /// re-subscribe before the loop resumes.
    pub fn pump_once(&mut self) {
        let BridgeLoop {
            source,
            bridge,
            topic,
        } = self;

        if let Err(e) = source.pump(PUMP_SLICE, &mut |payload| bridge.handle_message(payload)) {
            error!("Failed to get data, retrying: {}", e);
            if let Err(e) = source.reconnect() {
                error!("Reconnect failed: {}", e);
                return;
            }
            if let Err(e) = source.subscribe(topic) {
                error!("Re-subscribe failed: {}", e);
            }
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn bridge(&self) -> &MotionBridge {
        &self.bridge
    }
}
