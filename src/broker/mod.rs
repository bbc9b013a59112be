//! Broker-side plumbing for the motion feed
//!
//! The main components are:
//! - [`MotionSource`] trait for pumping inbound motion payloads
//! - [`RumqttSource`] for a real MQTT broker via rumqttc
//! - [`MockMotionSource`] for testing

mod source;
pub mod mock_source;
pub mod rumqtt_source;

pub use mock_source::MockMotionSource;
pub use rumqtt_source::RumqttSource;
pub use source::{BrokerError, MotionSource, Result};
