use core::{
    error::Error,
    fmt::{self, Display},
};

use crate::fmt::warning;

/// MQTT's Quality of Service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QoS {
    /// Quality of Service Level 0. Publications with this level are only sent once.
    AtMostOnce,
    /// Quality of Service Level 1. Publications with this level are sent until a PUBACK indicates that it was received.
    AtLeastOnce,
    /// Quality of Service Level 2. Publications with this level are followed by a handshake assuring it is received once.
    ExactlyOnce,
    /// Returned in a SUBACK in place of a granted level if the subscription was rejected.
    /// Never part of a PUBLISH packet.
    Failure,
}

/// Returned if an integer is not the wire value of any [`QoS`]. Carries the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidQoS(pub i32);

impl Display for InvalidQoS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid QoS: {}", self.0)
    }
}
impl Error for InvalidQoS {}

impl QoS {
    /// Returns the value of this level on the wire.
    pub const fn value(self) -> u8 {
        match self {
            Self::AtMostOnce => 0x00,
            Self::AtLeastOnce => 0x01,
            Self::ExactlyOnce => 0x02,
            Self::Failure => 0x80,
        }
    }

    /// Looks up the level for a wire value. Only 0, 1, 2 and 0x80 are accepted.
    ///
    /// Takes an `i32` so that wider values are rejected as they are instead of being
    /// truncated to a byte first.
    pub fn from_value(value: i32) -> Result<Self, InvalidQoS> {
        match value {
            0x00 => Ok(Self::AtMostOnce),
            0x01 => Ok(Self::AtLeastOnce),
            0x02 => Ok(Self::ExactlyOnce),
            0x80 => Ok(Self::Failure),
            _ => {
                warning!("rejecting invalid QoS value {}", value);
                Err(InvalidQoS(value))
            }
        }
    }

    /// Shifts the 2-bit representation of a publishable level into place.
    ///
    /// `Failure` has no 2-bit representation.
    pub(crate) const fn into_bits(self, left_shift: u8) -> Result<u8, InvalidQoS> {
        match self {
            Self::Failure => Err(InvalidQoS(self.value() as i32)),
            _ => Ok(self.value() << left_shift),
        }
    }
}

impl TryFrom<u8> for QoS {
    type Error = InvalidQoS;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value.into())
    }
}
impl TryFrom<i32> for QoS {
    type Error = InvalidQoS;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}
impl From<QoS> for u8 {
    fn from(value: QoS) -> Self {
        value.value()
    }
}

impl Display for QoS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AtMostOnce => "AT_MOST_ONCE",
            Self::AtLeastOnce => "AT_LEAST_ONCE",
            Self::ExactlyOnce => "EXACTLY_ONCE",
            Self::Failure => "FAILURE",
        };
        f.write_str(name)
    }
}
