//! UBX-RXM-SFRBX: broadcast navigation subframes
mod beidou;
mod galileo;
mod glonass;
mod gps;
mod sbas;

pub use sbas::SbasMessage;

use hifitime::Epoch;
use log::trace;

use crate::collect::SubframeCollector;
use crate::constants::Constants;
use crate::constellation::Constellation;
use crate::decoder::{DecodeResult, Skip};
use crate::sv::Sv;
use crate::utils::Utils;
use crate::Error;

/// Resolves the transmitting vehicle and routes the payload to its
/// constellation's subframe decoder.
pub(crate) fn decode(
    payload: &[u8],
    time: Option<Epoch>,
    collector: &mut SubframeCollector,
) -> Result<DecodeResult, Error> {
    let gnss_id = Utils::read_u8(payload, 0)?;
    let sv_id = Utils::read_u8(payload, 1)?;

    let mut constellation =
        Constellation::from_ubx(gnss_id).ok_or(Error::UnknownSystem(gnss_id))?;

    let mut prn = sv_id as u16;
    if constellation == Constellation::QZSS {
        prn += Constants::QZSS_PRN_OFFSET;
        // the L1S signal variant carries SBAS style pages
        if payload.len() == Constants::QZSS_L1S_PAYLOAD_LEN {
            constellation = Constellation::SBAS;
            prn -= Constants::QZSS_L1S_PRN_SHIFT;
        }
    }

    if constellation == Constellation::Glonass && prn == Constants::GLO_PRN_UNKNOWN {
        trace!("glonass: vehicle not identified yet, skipping");
        return Ok(DecodeResult::Skip(Skip::UnknownGlonassSv));
    }

    let sv = Sv::new(constellation, prn as u8);
    if sv.index().is_none() {
        return Err(Error::InvalidPrn { constellation, prn });
    }

    match constellation {
        Constellation::GPS | Constellation::QZSS => gps::decode(payload, sv, collector),
        Constellation::Galileo => galileo::decode(payload, sv, collector),
        Constellation::BeiDou => beidou::decode(payload, sv, collector),
        Constellation::Glonass => glonass::decode(payload, sv, collector),
        Constellation::SBAS => sbas::decode(payload, sv, time),
    }
}
