//! MIDI output for the motion receiver
//!
//! This module provides the Control Change transport, including:
//! - The [`CcSender`] trait and the [`ControlChange`] event type
//! - [`StructuredCcSender`] and [`RawPortCcSender`] for real ports via midir
//! - [`DebugCcSender`] as the no-hardware fallback
//! - [`MockCcSender`] for testing
//!
//! [`bind_transport`] runs the startup probes that pick one of the three
//! real implementations.

mod debug_sender;
mod sender;
pub mod midir_sender;
pub mod mock_sender;

pub use debug_sender::DebugCcSender;
pub use midir_sender::{list_output_ports, RawPortCcSender, StructuredCcSender};
pub use mock_sender::MockCcSender;
pub use sender::{CcSender, ControlChange, MidiError, Result};

use log::{info, warn};

/// Probes the transport methods in priority order and binds the first one
/// that comes up: structured encoder, then raw port writes, then the debug
/// sender. The debug sender cannot fail, so a working sender is always
/// returned. The binding is made once; there is no switching after startup.
pub fn bind_transport(port_hint: Option<&str>) -> Box<dyn CcSender> {
    match StructuredCcSender::new(port_hint) {
        Ok(sender) => {
            info!("Using structured MIDI encoder");
            println!("Using structured MIDI encoder");
            return Box::new(sender);
        }
        Err(e) => warn!("Structured MIDI unavailable: {}", e),
    }

    match RawPortCcSender::new(port_hint) {
        Ok(sender) => {
            info!("Using direct USB MIDI");
            println!("Using direct USB MIDI");
            return Box::new(sender);
        }
        Err(e) => warn!("MIDI setup failed: {}", e),
    }

    info!("Using debug MIDI (not sending actual MIDI)");
    println!("Using debug MIDI (not sending actual MIDI)");
    Box::new(DebugCcSender::new())
}
