//! Session decoder
use hifitime::Epoch;
use log::trace;

use crate::collect::{NavEvent, SubframeCollector};
use crate::constants::Constants;
use crate::message::{subframe, MessageId, RawxEpoch};
use crate::sv::Sv;
use crate::utils::Utils;
use crate::Error;

/// Everything one message decoding attempt may produce.
/// Errors travel separately, through [crate::Error].
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeResult {
    /// A raw measurement epoch
    Epoch(RawxEpoch),
    /// A navigation data fragment for one vehicle, with the
    /// completion signal its storage produced
    Nav { sv: Sv, event: NavEvent },
    /// Message understood but deliberately not processed
    Skip(Skip),
}

/// Skip reasons: not failures, surrounding processing goes on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Skip {
    /// GLONASS fragment from a vehicle the receiver has not
    /// identified yet (PRN sentinel 255)
    UnknownGlonassSv,
    /// Galileo word type outside the handled range
    PageType(u8),
}

/// [Decoder] owns all state of one receiver session: feed it every
/// framed message in arrival order. Process concurrent sessions with
/// one [Decoder] each, there is no internal locking.
///
/// ```
/// use ubx_rxm::prelude::{DecodeResult, Decoder};
///
/// let mut decoder = Decoder::new();
///
/// // UBX-RXM-RAWX capture
/// let frame = [
///     0xb5, 0x62, 0x02, 0x15, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x38, 0x3f, 0x08, 0x41, 0x2d,
///     0x09, 0x12, 0x00, 0x01, 0x01, 0x00, 0x00,
/// ];
///
/// match decoder.decode(&frame) {
///     Ok(DecodeResult::Epoch(epoch)) => {
///         assert_eq!(epoch.week, 2349);
///     },
///     _ => panic!("decoding failed"),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    /// Session time, refreshed by each measurement epoch
    time: Option<Epoch>,
    /// Per satellite navigation data
    collector: SubframeCollector,
}

impl Decoder {
    /// Builds a new [Decoder] with no session time announced yet:
    /// SBAS pages decoded before the first measurement epoch (or
    /// [Self::set_time] call) carry null reception times.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a [Decoder] with an initial session time
    pub fn with_time(epoch: Epoch) -> Self {
        Self {
            time: Some(epoch),
            collector: SubframeCollector::new(),
        }
    }

    /// Announces the current session time
    pub fn set_time(&mut self, epoch: Epoch) {
        self.time = Some(epoch);
    }

    /// Latest session time, if any was announced or decoded
    pub fn time(&self) -> Option<Epoch> {
        self.time
    }

    /// Read access to the collected navigation data
    pub fn collector(&self) -> &SubframeCollector {
        &self.collector
    }

    /// Mutable access, for configuration and satellite eviction
    pub fn collector_mut(&mut self) -> &mut SubframeCollector {
        &mut self.collector
    }

    /// Decoding attempt of one complete frame: 6 byte header, payload,
    /// trailing checksum. Sync marker and checksum are the transport
    /// layer's concern and are not validated here.
    pub fn decode(&mut self, frame: &[u8]) -> Result<DecodeResult, Error> {
        let class = Utils::read_u8(frame, 2)?;
        let id = Utils::read_u8(frame, 3)?;
        let length = Utils::read_u16(frame, 4)? as usize;

        let need = Constants::FRAME_HEADER_LEN + length;
        if frame.len() < need {
            return Err(Error::NotEnoughBytes {
                need,
                avail: frame.len(),
            });
        }
        let payload = &frame[Constants::FRAME_HEADER_LEN..need];

        match MessageId::from((class, id)) {
            MessageId::RawMeasurement => {
                let epoch = RawxEpoch::decode(payload)?;
                trace!("rawx: {} measurements @ {}", epoch.meas.len(), epoch.epoch);
                self.time = Some(epoch.epoch);
                Ok(DecodeResult::Epoch(epoch))
            },
            MessageId::RawSubframe => subframe::decode(payload, self.time, &mut self.collector),
            MessageId::Unknown => Err(Error::UnknownMessage),
        }
    }
}
