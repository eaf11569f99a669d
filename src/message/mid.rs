//! Message class/id identification
use crate::constants::Constants;

/// [MessageId] identifies the supported message kinds from the
/// class and id bytes of the frame header.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum MessageId {
    /// UBX-RXM-RAWX: multi GNSS raw measurement epoch
    RawMeasurement,
    /// UBX-RXM-SFRBX: broadcast navigation subframe
    RawSubframe,
    /// Unknown / unsupported message
    #[default]
    Unknown,
}

impl From<(u8, u8)> for MessageId {
    fn from((class, id): (u8, u8)) -> Self {
        if class != Constants::RXM_CLASS {
            return Self::Unknown;
        }
        match id {
            Constants::RXM_RAWX_ID => Self::RawMeasurement,
            Constants::RXM_SFRBX_ID => Self::RawSubframe,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod test {
    use super::MessageId;

    #[test]
    fn class_id_pairs() {
        assert_eq!(MessageId::from((0x02, 0x15)), MessageId::RawMeasurement);
        assert_eq!(MessageId::from((0x02, 0x13)), MessageId::RawSubframe);
        assert_eq!(MessageId::from((0x02, 0x14)), MessageId::Unknown);
        assert_eq!(MessageId::from((0x01, 0x15)), MessageId::Unknown);
        assert_eq!(MessageId::from((0x05, 0x01)), MessageId::Unknown);
    }
}
