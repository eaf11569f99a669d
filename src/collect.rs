//! Per satellite subframe collection.
use std::collections::HashMap;

use log::{debug, trace};

use crate::message::SbasMessage;
use crate::sv::Sv;
use crate::Error;

/// Subframe buffer geometry: all five navigation framings share the
/// same collection scheme and only differ by these constants.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Layout {
    /// Slot length (bytes)
    pub slot_len: usize,
    /// Number of slots
    pub slots: usize,
    /// Lowest valid in-band slot id
    pub first_id: u8,
    /// Highest valid in-band slot id
    pub last_id: u8,
}

impl Layout {
    /// GPS / QZSS LNAV: five 30 byte subframes, ids 1..=5
    pub(crate) const LNAV: Layout = Layout {
        slot_len: 30,
        slots: 5,
        first_id: 1,
        last_id: 5,
    };

    /// Galileo I/NAV: eight 16 byte word slots, word types 0..=6
    pub(crate) const INAV: Layout = Layout {
        slot_len: 16,
        slots: 8,
        first_id: 0,
        last_id: 6,
    };

    /// BeiDou D1/D2: five 38 byte subframes, ids 1..=5
    pub(crate) const D1D2: Layout = Layout {
        slot_len: 38,
        slots: 5,
        first_id: 1,
        last_id: 5,
    };

    /// GLONASS: one 64 byte string working buffer
    pub(crate) const STRING: Layout = Layout {
        slot_len: 64,
        slots: 1,
        first_id: 1,
        last_id: 1,
    };

    const fn size(&self) -> usize {
        self.slot_len * self.slots
    }
}

/// Signals whether a stored fragment completed anything
/// worth handing to a downstream parameter decoder.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    /// Fragment stored, nothing complete yet
    Stored,
    /// Ephemeris subframes captured: snapshot of the satellite's
    /// buffer, ready for the downstream ephemeris decoder
    Ephemeris { data: Vec<u8> },
    /// Ionosphere / UTC page captured: snapshot of the satellite's
    /// buffer, ready for the downstream ionosphere & UTC decoder
    IonoUtc { data: Vec<u8> },
    /// BeiDou subframe captured (content decoding is fully external)
    Subframe { data: Vec<u8> },
    /// GLONASS navigation string captured, with the frequency
    /// slot number the receiver reported for this vehicle
    GloString { frequency: u8, data: Vec<u8> },
    /// Self contained SBAS page
    Sbas(SbasMessage),
}

/// One persistent buffer per satellite, partitioned into the
/// fixed slots of its constellation's [Layout]. Absent entry means
/// nothing collected; `filled` tracks which slots hold data.
#[derive(Debug, Clone, PartialEq)]
struct SubframeBuffer {
    data: Vec<u8>,
    filled: u8,
}

impl SubframeBuffer {
    fn empty(size: usize) -> Self {
        Self {
            data: vec![0; size],
            filled: 0,
        }
    }

    fn zero_slot(&mut self, layout: Layout, id: u8) {
        let slot = (id - layout.first_id) as usize;
        let offset = slot * layout.slot_len;
        self.data[offset..offset + layout.slot_len].fill(0);
        self.filled &= !(1 << slot);
    }
}

/// Session scoped navigation data collection: one buffer per
/// satellite, created lazily on the first valid fragment and kept
/// until [SubframeCollector::reset] or [SubframeCollector::clear].
/// Fragments must be fed in receiver arrival order.
#[derive(Debug, Clone)]
pub struct SubframeCollector {
    buffers: HashMap<Sv, SubframeBuffer>,
    /// BeiDou subframe ids that signal downstream readiness
    bds_triggers: u8,
}

impl Default for SubframeCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl SubframeCollector {
    /// Builds a new empty [SubframeCollector].
    /// By default every stored BeiDou subframe (ids 1..=5) signals
    /// readiness; restrict with [Self::bds_trigger_ids].
    pub fn new() -> Self {
        Self {
            buffers: HashMap::new(),
            bds_triggers: 0b1_1111,
        }
    }

    /// Selects which BeiDou subframe ids signal
    /// [NavEvent::Subframe] once stored.
    pub fn bds_trigger_ids(&mut self, ids: &[u8]) {
        self.bds_triggers = ids
            .iter()
            .filter(|id| (1..=5).contains(*id))
            .fold(0, |mask, id| mask | (1 << (id - 1)));
    }

    /// Number of satellites currently tracked
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    /// Returns true if nothing has been collected yet
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    /// Bitmask of the slots currently holding data for this vehicle,
    /// None if nothing was ever collected for it
    pub fn filled_slots(&self, sv: Sv) -> Option<u8> {
        self.buffers.get(&sv).map(|buffer| buffer.filled)
    }

    /// Drops all state collected for one vehicle; to be invoked on
    /// loss of track. Returns true if state existed.
    pub fn reset(&mut self, sv: Sv) -> bool {
        let existed = self.buffers.remove(&sv).is_some();
        if existed {
            debug!("{}: subframe state dropped", sv);
        }
        existed
    }

    /// Drops all satellites
    pub fn clear(&mut self) {
        self.buffers.clear();
    }

    /// Validates the slot id and copies the fragment in place,
    /// creating the zeroed buffer on first use. Rejecting an invalid
    /// id leaves existing state untouched.
    fn store(
        &mut self,
        sv: Sv,
        layout: Layout,
        id: u8,
        frag: &[u8],
    ) -> Result<&mut SubframeBuffer, Error> {
        debug_assert_eq!(frag.len(), layout.slot_len);

        if id < layout.first_id || id > layout.last_id {
            return Err(Error::InvalidSubframeId { sv, id });
        }

        let buffer = self
            .buffers
            .entry(sv)
            .or_insert_with(|| SubframeBuffer::empty(layout.size()));

        let slot = (id - layout.first_id) as usize;
        let offset = slot * layout.slot_len;
        buffer.data[offset..offset + layout.slot_len].copy_from_slice(frag);
        buffer.filled |= 1 << slot;

        trace!("{}: subframe {} stored", sv, id);
        Ok(buffer)
    }

    /// Feeds one GPS / QZSS LNAV subframe.
    /// Subframe 3 completes the ephemeris set; subframes 4 and 5 carry
    /// ionosphere / UTC pages transmitted in several variants through
    /// the same slot, so their slot is wiped right after hand off.
    pub(crate) fn feed_lnav(&mut self, sv: Sv, id: u8, frag: &[u8]) -> Result<NavEvent, Error> {
        let buffer = self.store(sv, Layout::LNAV, id, frag)?;
        match id {
            3 => {
                debug!("{}: ephemeris subframes ready", sv);
                Ok(NavEvent::Ephemeris {
                    data: buffer.data.clone(),
                })
            },
            4 | 5 => {
                let data = buffer.data.clone();
                buffer.zero_slot(Layout::LNAV, id);
                debug!("{}: ionosphere/UTC page ready", sv);
                Ok(NavEvent::IonoUtc { data })
            },
            _ => Ok(NavEvent::Stored),
        }
    }

    /// Feeds one Galileo I/NAV word (types 0..=6).
    /// Word type 5 completes the ephemeris set.
    pub(crate) fn feed_inav(&mut self, sv: Sv, word_type: u8, frag: &[u8]) -> Result<NavEvent, Error> {
        let buffer = self.store(sv, Layout::INAV, word_type, frag)?;
        if word_type == 5 {
            debug!("{}: ephemeris words ready", sv);
            Ok(NavEvent::Ephemeris {
                data: buffer.data.clone(),
            })
        } else {
            Ok(NavEvent::Stored)
        }
    }

    /// Feeds one BeiDou D1/D2 subframe. Ids selected by
    /// [Self::bds_trigger_ids] signal readiness for the downstream
    /// parameter decoder.
    pub(crate) fn feed_d1d2(&mut self, sv: Sv, id: u8, frag: &[u8]) -> Result<NavEvent, Error> {
        let triggers = self.bds_triggers;
        let buffer = self.store(sv, Layout::D1D2, id, frag)?;
        if triggers & (1 << (id - 1)) != 0 {
            debug!("{}: subframe {} ready", sv, id);
            Ok(NavEvent::Subframe {
                data: buffer.data.clone(),
            })
        } else {
            Ok(NavEvent::Stored)
        }
    }

    /// Feeds one GLONASS navigation string; always ready, string
    /// level decoding is fully external.
    pub(crate) fn feed_string(&mut self, sv: Sv, frequency: u8, frag: &[u8]) -> Result<NavEvent, Error> {
        let buffer = self.store(sv, Layout::STRING, Layout::STRING.first_id, frag)?;
        Ok(NavEvent::GloString {
            frequency,
            data: buffer.data.clone(),
        })
    }
}
