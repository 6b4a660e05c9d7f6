#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]

mod fmt;

pub mod header;
pub mod types;

pub use header::{FixedHeader, FixedHeaderBuilder, PacketType};
pub use types::QoS;
