use crate::{
    fmt::error,
    header::{FixedHeader, MissingField, PacketType},
    types::QoS,
};

/// Collects the fields of a [`FixedHeader`] for an outgoing packet.
///
/// The packet type and the quality of service have to be set before calling
/// [`FixedHeaderBuilder::build`]. The flags default to `false` and the remaining length to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedHeaderBuilder {
    message_type: Option<PacketType>,
    is_dup: bool,
    qos_level: Option<QoS>,
    is_retain: bool,
    remaining_length: u32,
}

impl FixedHeaderBuilder {
    /// Creates a builder without packet type and quality of service.
    pub const fn new() -> Self {
        Self {
            message_type: None,
            is_dup: false,
            qos_level: None,
            is_retain: false,
            remaining_length: 0,
        }
    }

    /// Sets the packet type. Required.
    pub const fn message_type(mut self, message_type: PacketType) -> Self {
        self.message_type = Some(message_type);
        self
    }

    /// Sets the dup flag, marking the packet as a redelivery. Only meaningful for
    /// PUBLISH packets with a quality of service greater than 0.
    pub const fn dup(mut self, is_dup: bool) -> Self {
        self.is_dup = is_dup;
        self
    }

    /// Sets the quality of service. Required.
    ///
    /// [`QoS::Failure`] is accepted here but cannot be encoded into the first byte.
    pub const fn qos_level(mut self, qos_level: QoS) -> Self {
        self.qos_level = Some(qos_level);
        self
    }

    /// Sets the retain flag. If set on a PUBLISH packet, the server stores the message
    /// for future subscribers of the topic.
    pub const fn retain(mut self, is_retain: bool) -> Self {
        self.is_retain = is_retain;
        self
    }

    /// Sets the already computed number of bytes following the fixed header.
    pub const fn remaining_length(mut self, remaining_length: u32) -> Self {
        self.remaining_length = remaining_length;
        self
    }

    /// Fails with the name of the first required field that has not been set.
    ///
    /// ```
    /// use mqtt_fixed_header::{FixedHeaderBuilder, PacketType, QoS, header::MissingField};
    ///
    /// let builder = FixedHeaderBuilder::new().message_type(PacketType::Publish);
    /// assert_eq!(builder.build(), Err(MissingField("qos_level")));
    ///
    /// let header = builder.qos_level(QoS::AtMostOnce).retain(true).build();
    /// assert!(header.is_ok_and(|h| h.is_retain() && !h.is_dup()));
    /// ```
    pub fn build(self) -> Result<FixedHeader, MissingField> {
        let Some(message_type) = self.message_type else {
            error!("fixed header built without a message type");
            return Err(MissingField("message_type"));
        };
        let Some(qos_level) = self.qos_level else {
            error!("fixed header built without a QoS level");
            return Err(MissingField("qos_level"));
        };

        Ok(FixedHeader::new(
            message_type,
            self.is_dup,
            qos_level,
            self.is_retain,
            self.remaining_length,
        ))
    }
}
