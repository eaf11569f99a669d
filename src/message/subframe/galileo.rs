//! Galileo I/NAV pages
use crate::bits::get_bits;
use crate::collect::SubframeCollector;
use crate::decoder::{DecodeResult, Skip};
use crate::sv::Sv;
use crate::utils::Utils;
use crate::Error;

/// Copies eight receiver words big endian into a 32 byte page pair,
/// verifies the even/odd page markers and stores the leading 16 bytes
/// by word type. Word types beyond 6 are ignored.
pub(crate) fn decode(
    payload: &[u8],
    sv: Sv,
    collector: &mut SubframeCollector,
) -> Result<DecodeResult, Error> {
    if payload.len() < 44 {
        return Err(Error::NotEnoughBytes {
            need: 44,
            avail: payload.len(),
        });
    }

    let mut buf = [0; 32];
    for i in 0..8 {
        let word = Utils::read_u32(payload, 8 + i * 4)?;
        buf[i * 4..(i + 1) * 4].copy_from_slice(&word.to_be_bytes());
    }

    // nominal pages: even part first, odd part second
    if get_bits(&buf, 0, 1) != 0 || get_bits(&buf, 128, 1) != 1 {
        return Err(Error::PageMismatch { sv });
    }

    let word_type = get_bits(&buf, 2, 6) as u8;
    if word_type > 6 {
        return Ok(DecodeResult::Skip(Skip::PageType(word_type)));
    }

    let event = collector.feed_inav(sv, word_type, &buf[..16])?;
    Ok(DecodeResult::Nav { sv, event })
}

#[cfg(test)]
mod test {
    use super::decode;
    use crate::collect::{NavEvent, SubframeCollector};
    use crate::constellation::Constellation;
    use crate::decoder::{DecodeResult, Skip};
    use crate::sv::Sv;
    use crate::Error;

    fn words(word_type: u32) -> [u32; 9] {
        let mut words = [0; 9];
        // byte 0 of the even part: marker bit 0, type at bits 2..8
        words[0] = (word_type & 0x3f) << 24;
        // odd part marker: MSB of word 4
        words[4] = 0x8000_0000;
        for (i, word) in words.iter_mut().enumerate() {
            if ![0, 4].contains(&i) {
                *word = 0x0a0b_0c00 + i as u32;
            }
        }
        // the receiver emits 9 words, the trailing one is not used
        words[8] = 0xdead_beef;
        words
    }

    fn payload(words: &[u32; 9]) -> Vec<u8> {
        let mut payload = vec![2, 11, 0, 0, 9, 0, 3, 0];
        for word in words {
            payload.extend_from_slice(&word.to_le_bytes());
        }
        payload
    }

    #[test]
    fn word_type_5_completes_ephemeris() {
        let mut collector = SubframeCollector::new();
        let sv = Sv::new(Constellation::Galileo, 11);

        match decode(&payload(&words(0)), sv, &mut collector).unwrap() {
            DecodeResult::Nav { event, .. } => assert_eq!(event, NavEvent::Stored),
            other => panic!("unexpected result: {:?}", other),
        }

        match decode(&payload(&words(5)), sv, &mut collector).unwrap() {
            DecodeResult::Nav {
                event: NavEvent::Ephemeris { data },
                ..
            } => {
                assert_eq!(data.len(), 128);
                // big endian copy of the even part leads the slot
                assert_eq!(&data[5 * 16..5 * 16 + 4], &[5, 0, 0, 0]);
                assert_eq!(&data[5 * 16 + 4..5 * 16 + 8], &[0x0a, 0x0b, 0x0c, 1]);
            },
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn oversized_word_types_skipped() {
        let mut collector = SubframeCollector::new();
        let sv = Sv::new(Constellation::Galileo, 2);

        assert_eq!(
            decode(&payload(&words(63)), sv, &mut collector),
            Ok(DecodeResult::Skip(Skip::PageType(63)))
        );
        assert_eq!(
            decode(&payload(&words(7)), sv, &mut collector),
            Ok(DecodeResult::Skip(Skip::PageType(7)))
        );
        assert!(collector.is_empty());
    }

    #[test]
    fn page_marker_mismatch_rejected() {
        let mut collector = SubframeCollector::new();
        let sv = Sv::new(Constellation::Galileo, 2);

        // odd part marker cleared
        let mut bad = words(5);
        bad[4] = 0;
        assert_eq!(
            decode(&payload(&bad), sv, &mut collector),
            Err(Error::PageMismatch { sv })
        );

        // even part marker set
        let mut bad = words(5);
        bad[0] |= 0x8000_0000;
        assert_eq!(
            decode(&payload(&bad), sv, &mut collector),
            Err(Error::PageMismatch { sv })
        );
    }

    #[test]
    fn short_payload_rejected() {
        let mut collector = SubframeCollector::new();
        let sv = Sv::new(Constellation::Galileo, 2);
        assert_eq!(
            decode(&payload(&words(5))[..40], sv, &mut collector),
            Err(Error::NotEnoughBytes { need: 44, avail: 40 })
        );
    }
}
