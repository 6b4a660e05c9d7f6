//! Contains value types shared by every MQTT control packet.

mod qos;

pub use qos::{InvalidQoS, QoS};
