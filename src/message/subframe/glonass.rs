//! GLONASS navigation strings
use crate::collect::SubframeCollector;
use crate::decoder::DecodeResult;
use crate::sv::Sv;
use crate::utils::Utils;
use crate::Error;

/// Reverses the byte order of each receiver word into the string
/// working buffer; string level decoding is fully external, so the
/// captured string is signalled right away together with the
/// vehicle's frequency slot number.
pub(crate) fn decode(
    payload: &[u8],
    sv: Sv,
    collector: &mut SubframeCollector,
) -> Result<DecodeResult, Error> {
    if payload.len() < 24 {
        return Err(Error::NotEnoughBytes {
            need: 24,
            avail: payload.len(),
        });
    }

    let frequency = Utils::read_u8(payload, 3)?;

    let mut buf = [0; 64];
    for i in 0..4 {
        for j in 0..4 {
            buf[i * 4 + j] = payload[8 + i * 4 + (3 - j)];
        }
    }

    let event = collector.feed_string(sv, frequency, &buf)?;
    Ok(DecodeResult::Nav { sv, event })
}
