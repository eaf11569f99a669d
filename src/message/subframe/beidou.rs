//! BeiDou D1/D2 subframes
use crate::bits::{get_bits, set_bits};
use crate::collect::SubframeCollector;
use crate::decoder::DecodeResult;
use crate::sv::Sv;
use crate::utils::Utils;
use crate::Error;

/// Repacks ten receiver words into the 38 byte broadcast subframe
/// (30 payload bits per word) and stores it by its in-band id.
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

    let mut buf = [0; 38];
    for i in 0..10 {
        let word = Utils::read_u32(payload, 8 + i * 4)?;
        set_bits(&mut buf, i * 30, 30, word);
    }

    let id = get_bits(&buf, 15, 3) as u8;
    let event = collector.feed_d1d2(sv, id, &buf)?;
    Ok(DecodeResult::Nav { sv, event })
}
