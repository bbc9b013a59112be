use crate::broker::{BrokerError, MotionSource, Result};
use log::{debug, info};
use rumqttc::{Client, Connection, Event, MqttOptions, Packet, QoS, RecvTimeoutError};
use std::time::{Duration, Instant};

// Request queue capacity for the synchronous client
const CHANNEL_CAPACITY: usize = 10;

pub struct RumqttSource {
    options: MqttOptions,
    client: Client,
    connection: Connection,
}

impl RumqttSource {
    pub fn connect(client_id: &str, host: &str, port: u16) -> Self {
        let mut options = MqttOptions::new(client_id, host, port);
        options.set_keep_alive(Duration::from_secs(30));

        info!("MQTT client '{}' connecting to {}:{}", client_id, host, port);
        let (client, connection) = Client::new(options.clone(), CHANNEL_CAPACITY);

        RumqttSource {
            options,
            client,
            connection,
        }
    }
}

impl MotionSource for RumqttSource {
    fn subscribe(&mut self, topic: &str) -> Result<()> {
        self.client
            .subscribe(topic, QoS::AtMostOnce)
            .map_err(|e| BrokerError::SubscribeError(e.to_string()))?;
        info!("Subscribed to {}", topic);
        Ok(())
    }

    fn pump(&mut self, timeout: Duration, handler: &mut dyn FnMut(&[u8])) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(());
            }

            match self.connection.recv_timeout(remaining) {
                Ok(Ok(Event::Incoming(Packet::Publish(publish)))) => {
                    debug!(
                        "Publish on {} ({} bytes)",
                        publish.topic,
                        publish.payload.len()
                    );
                    handler(&publish.payload);
                }
                // acks, pings, outgoing notifications
                Ok(Ok(_)) => {}
                Ok(Err(e)) => return Err(BrokerError::ConnectionError(e.to_string())),
                Err(RecvTimeoutError::Timeout) => return Ok(()),
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(BrokerError::ConnectionError(
                        "event loop channel closed".to_string(),
                    ))
                }
            }
        }
    }

    fn reconnect(&mut self) -> Result<()> {
        info!("Reconnecting MQTT client '{}'", self.options.client_id());
        let (client, connection) = Client::new(self.options.clone(), CHANNEL_CAPACITY);
        self.client = client;
        self.connection = connection;
        Ok(())
    }
}
