use clap::Parser;
use motionmidirs::{
    bridge::MotionBridge,
    broker::{MotionSource, RumqttSource},
    cli::Args,
    config::{Settings, MOTION_TOPIC},
    event_loop::BridgeLoop,
    midi,
};

fn main() {
    initialize_logging();
    let args = Args::parse();

    if args.device_list {
        list_available_ports();
        return;
    }

    let settings = load_settings();

    let sender = midi::bind_transport(args.bind_to_port.as_deref());
    let bridge = MotionBridge::new(sender);

    let mut source = RumqttSource::connect(
        &settings.receiver_client_id(),
        &settings.mqtt_host,
        settings.mqtt_port,
    );
    if let Err(e) = source.subscribe(MOTION_TOPIC) {
        let error_msg = format!("Error subscribing to {}: {}", MOTION_TOPIC, e);
        log::error!("{}", error_msg);
        eprintln!("{}", error_msg);
        std::process::exit(1);
    }

    log::info!("Receiver initialized - waiting for MQTT messages...");
    println!("Receiver initialized - waiting for MQTT messages...");

    let mut receiver = BridgeLoop::new(source, bridge, MOTION_TOPIC);
    receiver.run();
}

fn initialize_logging() {
    motionmidirs::logging::init_logger().expect("Logger initialization failed");
    log::info!("Application starting");
}

fn load_settings() -> Settings {
    match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            let error_msg = format!("Error loading settings: {}", e);
            log::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

fn list_available_ports() {
    println!("Available MIDI output ports:");
    for port in midi::list_output_ports() {
        println!("  - {}", port);
    }
}
