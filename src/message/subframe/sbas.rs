//! SBAS pages
use hifitime::Epoch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::Constants;
use crate::collect::NavEvent;
use crate::decoder::DecodeResult;
use crate::sv::Sv;
use crate::utils::Utils;
use crate::Error;

/// A self contained SBAS page: pages are never accumulated, each
/// message hands one [SbasMessage] to the caller.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SbasMessage {
    /// Transmitting vehicle PRN
    pub prn: u8,
    /// Reception time of week [s], from the session time;
    /// zero when the session time was never announced
    pub tow_s: u32,
    /// Reception week number, from the session time
    pub week: u32,
    /// 29 byte message body
    pub message: [u8; 29],
}

/// Copies eight receiver words big endian and emits a fresh
/// [SbasMessage]. Reception time comes from the caller supplied
/// session time, not from the page itself.
pub(crate) fn decode(payload: &[u8], sv: Sv, time: Option<Epoch>) -> Result<DecodeResult, Error> {
    if payload.len() < 40 {
        return Err(Error::NotEnoughBytes {
            need: 40,
            avail: payload.len(),
        });
    }

    let mut buf = [0; 32];
    for i in 0..8 {
        let word = Utils::read_u32(payload, 8 + i * 4)?;
        buf[i * 4..(i + 1) * 4].copy_from_slice(&word.to_be_bytes());
    }

    let (week, tow_s) = match time {
        Some(epoch) => {
            let seconds = epoch.to_gpst_seconds();
            (
                (seconds / Constants::WEEK_SECONDS) as u32,
                (seconds % Constants::WEEK_SECONDS) as u32,
            )
        },
        None => (0, 0),
    };

    let mut message = [0; 29];
    message.copy_from_slice(&buf[..29]);

    Ok(DecodeResult::Nav {
        sv,
        event: NavEvent::Sbas(SbasMessage {
            prn: sv.prn,
            tow_s,
            week,
            message,
        }),
    })
}
