use core::{
    error::Error,
    fmt::{self, Display},
};

use crate::types::InvalidQoS;

/// Returned if a packet type number is reserved. Carries the offending number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReservedPacketType(pub u8);

impl Display for ReservedPacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reserved packet type: {}", self.0)
    }
}
impl Error for ReservedPacketType {}

/// Returned by `FixedHeaderBuilder::build` if a required field has not been set.
/// Carries the name of the field.
///
/// This indicates a bug in the code building the header rather than malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MissingField(pub &'static str);

impl Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing required field: {}", self.0)
    }
}
impl Error for MissingField {}

/// Returned if the first byte of a fixed header cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// The upper nibble holds a reserved packet type.
    ReservedPacketType(ReservedPacketType),

    /// The QoS bits of the flags nibble are `0b11`.
    InvalidQoS(InvalidQoS),
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservedPacketType(e) => Display::fmt(e, f),
            Self::InvalidQoS(e) => Display::fmt(e, f),
        }
    }
}
impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ReservedPacketType(e) => Some(e),
            Self::InvalidQoS(e) => Some(e),
        }
    }
}

impl From<ReservedPacketType> for DecodeError {
    fn from(e: ReservedPacketType) -> Self {
        Self::ReservedPacketType(e)
    }
}
impl From<InvalidQoS> for DecodeError {
    fn from(e: InvalidQoS) -> Self {
        Self::InvalidQoS(e)
    }
}
