use std::error::Error;
use std::fmt;
use std::time::Duration;

/// Custom error type for broker operations
#[derive(Debug)]
pub enum BrokerError {
    /// Error when registering a subscription
    SubscribeError(String),
    /// Error in the underlying connection while pumping
    ConnectionError(String),
}

impl fmt::Display for BrokerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrokerError::SubscribeError(msg) => write!(f, "broker subscribe error: {}", msg),
            BrokerError::ConnectionError(msg) => write!(f, "broker connection error: {}", msg),
        }
    }
}

impl Error for BrokerError {}

/// Result type for broker operations
pub type Result<T> = std::result::Result<T, BrokerError>;

/// Trait defining the interface to the pub/sub feed of motion samples
pub trait MotionSource {
    /// Registers interest in a topic
    fn subscribe(&mut self, topic: &str) -> Result<()>;

    /// Processes pending inbound messages for at most `timeout`, invoking
    /// `handler` once per payload
    fn pump(&mut self, timeout: Duration, handler: &mut dyn FnMut(&[u8])) -> Result<()>;

    /// Tears down and re-establishes the broker session
    fn reconnect(&mut self) -> Result<()>;
}
