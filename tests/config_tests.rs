use motionmidirs::config::{Settings, MOTION_TOPIC};

#[test]
fn receiver_client_id_is_suffixed() {
    let settings = Settings {
        mqtt_host: "localhost".to_string(),
        mqtt_port: 1883,
        mqtt_clientid: "itsybitsy".to_string(),
    };
    assert_eq!(settings.receiver_client_id(), "itsybitsy_receiver");
}

#[test]
fn motion_topic_is_fixed() {
    assert_eq!(MOTION_TOPIC, "motion/data");
}

#[test]
fn defaults_apply_without_settings_file() {
    let settings = Settings::load().expect("defaults should load");
    assert_eq!(settings.mqtt_host, "localhost");
    assert_eq!(settings.mqtt_port, 1883);
    assert_eq!(settings.mqtt_clientid, "motionmidi");
}
