// config.rs

use config::{Config, ConfigError, Environment, File};
use log::debug;
use serde::Deserialize;

/// Topic the motion sender publishes on.
pub const MOTION_TOPIC: &str = "motion/data";

/// Broker connection settings, loaded from an optional `settings` file plus
/// MOTIONMIDI_* environment overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub mqtt_host: String,
    pub mqtt_port: u16,
    pub mqtt_clientid: String,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let cfg = Config::builder()
            .set_default("mqtt_host", "localhost")?
            .set_default("mqtt_port", 1883_i64)?
            .set_default("mqtt_clientid", "motionmidi")?
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::with_prefix("MOTIONMIDI"))
            .build()?;

        let settings: Settings = cfg.try_deserialize()?;
        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    /// Identity this process registers with the broker.
    pub fn receiver_client_id(&self) -> String {
        format!("{}_receiver", self.mqtt_clientid)
    }
}
