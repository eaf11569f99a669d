//! UBX-RXM-RAWX: raw measurement epochs
use hifitime::Epoch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::Constants;
use crate::utils::Utils;
use crate::Error;

/// One raw measurement from a single tracked signal.
/// Fields the receiver flagged as untrustworthy are zeroed,
/// never omitted: the record keeps its transmission slot.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawxMeas {
    /// Pseudorange [m], zero when invalid
    pub pseudorange_m: f64,
    /// Carrier phase [cycles], zero when invalid
    pub carrier_phase_cycles: f64,
    /// Doppler shift [Hz]
    pub doppler_hz: f32,
    /// Receiver reported GNSS identifier
    pub gnss_id: u8,
    /// In-constellation satellite id
    pub sv_id: u8,
    /// Signal id
    pub sig_id: u8,
    /// Frequency id (GLONASS slot +7)
    pub freq_id: u8,
    /// Carrier lock time [ms]
    pub lock_time_ms: u16,
    /// Carrier to noise ratio [dBHz]
    pub cn0_dbhz: u8,
    /// Carrier phase standard deviation code (0..=15)
    pub cp_stddev: u8,
    /// Raw tracking status bitmask
    pub trk_status: u8,
}

impl RawxMeas {
    /// Decodes one 32 byte measurement record, applying the
    /// tracking status validity gates.
    fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut pseudorange_m = Utils::read_f64(buf, 0)?;
        let mut carrier_phase_cycles = Utils::read_f64(buf, 8)?;
        let doppler_hz = Utils::read_f32(buf, 16)?;
        let gnss_id = Utils::read_u8(buf, 20)?;
        let sv_id = Utils::read_u8(buf, 21)?;
        let sig_id = Utils::read_u8(buf, 22)?;
        let freq_id = Utils::read_u8(buf, 23)?;
        let lock_time_ms = Utils::read_u16(buf, 24)?;
        let cn0_dbhz = Utils::read_u8(buf, 26)?;
        let cp_stddev = Utils::read_u8(buf, 28)? & 0x0f;
        let trk_status = Utils::read_u8(buf, 30)?;

        if trk_status & 0x01 == 0 {
            pseudorange_m = 0.0;
        }
        if trk_status & 0x02 == 0
            || carrier_phase_cycles == Constants::CPHASE_INVALID
            || cp_stddev > Constants::MAX_CPSTD
        {
            carrier_phase_cycles = 0.0;
        }

        Ok(Self {
            pseudorange_m,
            carrier_phase_cycles,
            doppler_hz,
            gnss_id,
            sv_id,
            sig_id,
            freq_id,
            lock_time_ms,
            cn0_dbhz,
            cp_stddev,
            trk_status,
        })
    }
}

/// A complete raw measurement epoch: receiver time of week and all
/// per signal measurements of that epoch, in transmission order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawxEpoch {
    /// Epoch resolved once from (week, tow), shared by all
    /// measurements of this epoch
    pub epoch: Epoch,
    /// Receiver time of week [s]
    pub tow_s: f64,
    /// GPS week number (never zero)
    pub week: u16,
    /// Message version
    pub version: u8,
    /// Measurements, in transmission order
    pub meas: Vec<RawxMeas>,
}

impl RawxEpoch {
    /// [RawxEpoch] decoding attempt from a message payload.
    /// A short buffer or a null week number rejects the entire epoch.
    pub fn decode(payload: &[u8]) -> Result<Self, Error> {
        let tow_s = Utils::read_f64(payload, 0)?;
        let week = Utils::read_u16(payload, 8)?;
        let count = Utils::read_u8(payload, 11)? as usize;
        let version = Utils::read_u8(payload, 13)?;

        let need = Constants::RAWX_HEADER_LEN + count * Constants::RAWX_RECORD_LEN;
        if payload.len() < need {
            return Err(Error::NotEnoughBytes {
                need,
                avail: payload.len(),
            });
        }
        if week == 0 {
            return Err(Error::NullWeek);
        }

        let epoch = Epoch::from_gpst_seconds(week as f64 * Constants::WEEK_SECONDS + tow_s);

        let mut meas = Vec::with_capacity(count);
        for i in 0..count {
            let offset = Constants::RAWX_HEADER_LEN + i * Constants::RAWX_RECORD_LEN;
            meas.push(RawxMeas::decode(
                &payload[offset..offset + Constants::RAWX_RECORD_LEN],
            )?);
        }

        Ok(Self {
            epoch,
            tow_s,
            week,
            version,
            meas,
        })
    }
}
