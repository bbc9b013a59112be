use crate::midi::{CcSender, ControlChange, MidiError, Result};
use log::info;
use midir::{MidiOutput, MidiOutputConnection};

/// Port the class-compliant USB MIDI endpoint shows up on.
pub const DEFAULT_PORT_INDEX: usize = 1;

/// Output channel for all emitted Control Changes.
pub const OUT_CHANNEL: u8 = 0;

fn open_output(client_name: &str, port_hint: Option<&str>) -> Result<MidiOutputConnection> {
    let midi_out = MidiOutput::new(client_name)?;
    let ports = midi_out.ports();

    let port = match port_hint {
        Some(name) => ports
            .iter()
            .find(|p| midi_out.port_name(p).unwrap_or_default().contains(name))
            .ok_or_else(|| {
                MidiError::ConnectionError(format!("MIDI output '{}' not found", name))
            })?,
        None => ports.get(DEFAULT_PORT_INDEX).ok_or_else(|| {
            MidiError::ConnectionError(format!(
                "no MIDI output at port index {}",
                DEFAULT_PORT_INDEX
            ))
        })?,
    };

    let port_name = midi_out.port_name(port).unwrap_or_default();
    info!("Connecting to MIDI output port: {}", port_name);

    Ok(midi_out.connect(port, "motionmidirs-output")?)
}

/// Sender backed by the structured [`ControlChange`] encoder.
pub struct StructuredCcSender {
    connection: MidiOutputConnection,
    channel: u8,
}

impl StructuredCcSender {
    pub fn new(port_hint: Option<&str>) -> Result<Self> {
        Ok(StructuredCcSender {
            connection: open_output("motionmidirs", port_hint)?,
            channel: OUT_CHANNEL,
        })
    }
}

impl CcSender for StructuredCcSender {
    fn send_cc(&mut self, controller: u8, value: u8) -> Result<()> {
        let event = ControlChange {
            channel: self.channel,
            controller,
            value,
        };
        self.connection.send(&event.to_bytes())?;
        Ok(())
    }
}

/// Sender that writes the raw three-byte Control Change form straight to
/// the port, channel 0 baked into the status byte.
pub struct RawPortCcSender {
    connection: MidiOutputConnection,
}

impl RawPortCcSender {
    pub fn new(port_hint: Option<&str>) -> Result<Self> {
        Ok(RawPortCcSender {
            connection: open_output("motionmidirs", port_hint)?,
        })
    }
}

impl CcSender for RawPortCcSender {
    fn send_cc(&mut self, controller: u8, value: u8) -> Result<()> {
        self.connection.send(&[0xB0, controller, value])?;
        Ok(())
    }
}

/// Names of all MIDI output ports currently visible.
pub fn list_output_ports() -> Vec<String> {
    let mut ports = Vec::new();

    if let Ok(midi_out) = MidiOutput::new("motionmidirs-list") {
        for port in midi_out.ports() {
            if let Ok(name) = midi_out.port_name(&port) {
                ports.push(name);
            }
        }
    }

    ports
}
