//! The fixed header present at the start of every MQTT control packet.
//!
//! ```text
//!   bit     7   6   5   4   3   2   1   0
//!  byte 1  |  packet type  |dup|  qos  |ret|
//!  byte 2.. remaining length (variable byte integer)
//! ```

mod builder;
mod err;
mod packet_type;

use core::fmt::{self, Display};

use crate::{
    fmt::trace,
    types::{InvalidQoS, QoS},
};

pub use builder::FixedHeaderBuilder;
pub use err::{DecodeError, MissingField, ReservedPacketType};
pub use packet_type::PacketType;

const DUP_FLAG: u8 = 0b1000;
const QOS_MASK: u8 = 0b0110;
const QOS_SHIFT: u8 = 1;
const RETAIN_FLAG: u8 = 0b0001;

/// An immutable, decoded MQTT fixed header.
///
/// The remaining length is carried as an already decoded value. Whether the flags are
/// legal for the packet type (e.g. `dup` only for PUBLISH with QoS > 0) is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedHeader {
    message_type: PacketType,
    is_dup: bool,
    qos_level: QoS,
    is_retain: bool,
    remaining_length: u32,
}

impl FixedHeader {
    pub const fn new(
        message_type: PacketType,
        is_dup: bool,
        qos_level: QoS,
        is_retain: bool,
        remaining_length: u32,
    ) -> Self {
        Self {
            message_type,
            is_dup,
            qos_level,
            is_retain,
            remaining_length,
        }
    }

    /// Returns a builder with no fields set.
    pub const fn builder() -> FixedHeaderBuilder {
        FixedHeaderBuilder::new()
    }

    /// Decodes the first byte of a fixed header and combines it with the already decoded
    /// remaining length.
    pub fn from_type_and_flags(
        type_and_flags: u8,
        remaining_length: u32,
    ) -> Result<Self, DecodeError> {
        trace!(
            "decoding fixed header 0x{:02x} with remaining length {}",
            type_and_flags,
            remaining_length
        );

        let message_type = PacketType::from_type_and_flags(type_and_flags)?;
        let qos_bits = (type_and_flags & QOS_MASK) >> QOS_SHIFT;
        let qos_level = QoS::from_value(qos_bits.into())?;

        Ok(Self {
            message_type,
            is_dup: type_and_flags & DUP_FLAG != 0,
            qos_level,
            is_retain: type_and_flags & RETAIN_FLAG != 0,
            remaining_length,
        })
    }

    /// Encodes the packet type and flags into the first byte of the fixed header.
    ///
    /// Fails if the QoS level is [`QoS::Failure`], which cannot be represented in the flags.
    pub fn type_and_flags(&self) -> Result<u8, InvalidQoS> {
        let mut byte = self.message_type.value() << 4;
        byte |= self.qos_level.into_bits(QOS_SHIFT)?;
        if self.is_dup {
            byte |= DUP_FLAG;
        }
        if self.is_retain {
            byte |= RETAIN_FLAG;
        }

        Ok(byte)
    }

    pub const fn message_type(&self) -> PacketType {
        self.message_type
    }

    pub const fn is_dup(&self) -> bool {
        self.is_dup
    }

    pub const fn qos_level(&self) -> QoS {
        self.qos_level
    }

    pub const fn is_retain(&self) -> bool {
        self.is_retain
    }

    /// The number of bytes following the fixed header, i.e. variable header and payload.
    pub const fn remaining_length(&self) -> u32 {
        self.remaining_length
    }
}

impl Display for FixedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FixedHeader[message_type={}, is_dup={}, qos_level={}, is_retain={}, remaining_length={}]",
            self.message_type, self.is_dup, self.qos_level, self.is_retain, self.remaining_length
        )
    }
}
