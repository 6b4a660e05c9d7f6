use mqtt_fixed_header::{
    FixedHeader, PacketType, QoS,
    header::{DecodeError, MissingField},
    types::InvalidQoS,
};
use tokio_test::{assert_err, assert_ok};

const PACKET_TYPES: [PacketType; 14] = [
    PacketType::Connect,
    PacketType::Connack,
    PacketType::Publish,
    PacketType::Puback,
    PacketType::Pubrec,
    PacketType::Pubrel,
    PacketType::Pubcomp,
    PacketType::Subscribe,
    PacketType::Suback,
    PacketType::Unsubscribe,
    PacketType::Unsuback,
    PacketType::Pingreq,
    PacketType::Pingresp,
    PacketType::Disconnect,
];

const LEVELS: [QoS; 4] = [
    QoS::AtMostOnce,
    QoS::AtLeastOnce,
    QoS::ExactlyOnce,
    QoS::Failure,
];

#[test_log::test]
fn qos_lookup() {
    let qos = assert_ok!(QoS::from_value(1));
    assert_eq!(qos, QoS::AtLeastOnce);
    assert_eq!(qos.value(), 1);

    let e = assert_err!(QoS::from_value(3));
    assert_eq!(e, InvalidQoS(3));
}

#[test_log::test]
fn qos_lookup_keeps_wide_values() {
    let wide: u32 = 0x180;
    let e = assert_err!(QoS::from_value(assert_ok!(i32::try_from(wide))));
    assert_eq!(e, InvalidQoS(0x180));

    let e = assert_err!(QoS::try_from(-2i32));
    assert_eq!(e, InvalidQoS(-2));
}

#[test_log::test]
fn publish_header_reads_back() {
    let header = assert_ok!(
        FixedHeader::builder()
            .message_type(PacketType::Publish)
            .dup(true)
            .qos_level(QoS::AtLeastOnce)
            .retain(false)
            .remaining_length(10)
            .build()
    );

    assert_eq!(header.message_type(), PacketType::Publish);
    assert!(header.is_dup());
    assert_eq!(header.qos_level(), QoS::AtLeastOnce);
    assert!(!header.is_retain());
    assert_eq!(header.remaining_length(), 10);
}

#[test_log::test]
fn every_combination_is_preserved() {
    for message_type in PACKET_TYPES {
        for qos_level in LEVELS {
            for (is_dup, is_retain) in [(false, false), (false, true), (true, false), (true, true)] {
                for remaining_length in [0, 127, 268_435_455] {
                    let built = assert_ok!(
                        FixedHeader::builder()
                            .remaining_length(remaining_length)
                            .retain(is_retain)
                            .qos_level(qos_level)
                            .dup(is_dup)
                            .message_type(message_type)
                            .build()
                    );
                    let header = FixedHeader::new(
                        message_type,
                        is_dup,
                        qos_level,
                        is_retain,
                        remaining_length,
                    );

                    assert_eq!(built, header);
                    assert_eq!(header.message_type(), message_type);
                    assert_eq!(header.is_dup(), is_dup);
                    assert_eq!(header.qos_level(), qos_level);
                    assert_eq!(header.is_retain(), is_retain);
                    assert_eq!(header.remaining_length(), remaining_length);
                }
            }
        }
    }
}

#[test_log::test]
fn required_fields() {
    assert_eq!(
        FixedHeader::builder().qos_level(QoS::AtMostOnce).build(),
        Err(MissingField("message_type"))
    );
    assert_eq!(
        FixedHeader::builder()
            .message_type(PacketType::Connect)
            .build(),
        Err(MissingField("qos_level"))
    );
}

#[test_log::test]
fn decoder_propagates_invalid_qos() {
    fn decode(first_byte: u8, remaining_length: u32) -> Result<QoS, DecodeError> {
        let header = FixedHeader::from_type_and_flags(first_byte, remaining_length)?;
        Ok(header.qos_level())
    }

    assert_eq!(decode(0x34, 0), Ok(QoS::ExactlyOnce));
    assert_eq!(decode(0x36, 0), Err(DecodeError::InvalidQoS(InvalidQoS(3))));
}

#[test_log::test]
fn diagnostics_mention_every_field() {
    let header = FixedHeader::new(PacketType::Subscribe, false, QoS::AtLeastOnce, false, 7);
    let text = header.to_string();

    for part in [
        "message_type=SUBSCRIBE",
        "is_dup=false",
        "qos_level=AT_LEAST_ONCE",
        "is_retain=false",
        "remaining_length=7",
    ] {
        assert!(text.contains(part), "{text} does not contain {part}");
    }
}
