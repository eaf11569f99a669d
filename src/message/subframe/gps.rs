//! GPS / QZSS LNAV subframes
use crate::bits::{get_bits, set_bits};
use crate::collect::SubframeCollector;
use crate::constants::Constants;
use crate::decoder::DecodeResult;
use crate::sv::Sv;
use crate::utils::Utils;
use crate::Error;

/// Repacks ten receiver words into the 30 byte broadcast subframe
/// (24 payload bits per word, parity stripped) and stores it by its
/// in-band subframe id.
pub(crate) fn decode(
    payload: &[u8],
    sv: Sv,
    collector: &mut SubframeCollector,
) -> Result<DecodeResult, Error> {
    if payload.len() < 48 {
        return Err(Error::NotEnoughBytes {
            need: 48,
            avail: payload.len(),
        });
    }

    if Utils::read_u32(payload, 8)? >> 24 == Constants::PREAMB_CNAV {
        return Err(Error::UnsupportedSubframe { sv });
    }

    let mut buf = [0; 30];
    for i in 0..10 {
        let word = Utils::read_u32(payload, 8 + i * 4)?;
        set_bits(&mut buf, i * 24, 24, word >> 6);
    }

    let id = get_bits(&buf, 43, 3) as u8;
    let event = collector.feed_lnav(sv, id, &buf)?;
    Ok(DecodeResult::Nav { sv, event })
}
