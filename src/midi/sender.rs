use std::error::Error;
use std::fmt;

/// Custom error type for MIDI operations
#[derive(Debug)]
pub enum MidiError {
    /// Error when writing to the output port
    SendError(String),
    /// Error when opening or binding an output port
    ConnectionError(String),
}

impl fmt::Display for MidiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MidiError::SendError(msg) => write!(f, "MIDI send error: {}", msg),
            MidiError::ConnectionError(msg) => write!(f, "MIDI connection error: {}", msg),
        }
    }
}

impl Error for MidiError {}

impl From<midir::InitError> for MidiError {
    fn from(e: midir::InitError) -> Self {
        MidiError::ConnectionError(e.to_string())
    }
}

impl From<midir::ConnectError<midir::MidiOutput>> for MidiError {
    fn from(e: midir::ConnectError<midir::MidiOutput>) -> Self {
        MidiError::ConnectionError(e.to_string())
    }
}

impl From<midir::SendError> for MidiError {
    fn from(e: midir::SendError) -> Self {
        MidiError::SendError(e.to_string())
    }
}

/// Result type for MIDI operations
pub type Result<T> = std::result::Result<T, MidiError>;

/// A Control Change event: controller number plus a 0-127 value on one
/// channel. Encodes to the standard three-byte wire form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlChange {
    pub channel: u8,
    pub controller: u8,
    pub value: u8,
}

impl ControlChange {
    pub fn to_bytes(&self) -> [u8; 3] {
        [0xB0 | (self.channel & 0x0F), self.controller, self.value]
    }
}

/// Trait defining the interface for Control Change senders
pub trait CcSender {
    /// Emits one Control Change message with the given controller and value
    fn send_cc(&mut self, controller: u8, value: u8) -> Result<()>;
}
