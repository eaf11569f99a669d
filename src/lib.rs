//! UBX-RXM: u-blox raw measurement and navigation subframe decoding
use thiserror::Error;

mod bits;
mod collect;
mod constellation;
mod decoder;
mod message;
mod sv;

pub(crate) mod constants;
pub(crate) mod utils;

use constellation::Constellation;
use sv::Sv;

pub mod prelude {
    pub use crate::collect::{NavEvent, SubframeCollector};
    pub use crate::constellation::Constellation;
    pub use crate::decoder::{DecodeResult, Decoder, Skip};
    pub use crate::message::{RawxEpoch, RawxMeas, SbasMessage};
    pub use crate::sv::Sv;
    pub use crate::Error;
    // re-export
    pub use hifitime::Epoch;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("buffer too short: {need} bytes needed, {avail} available")]
    NotEnoughBytes { need: usize, avail: usize },
    #[error("unknown message")]
    UnknownMessage,
    #[error("unknown GNSS system #{0}")]
    UnknownSystem(u8),
    #[error("PRN {prn} out of range for {constellation}")]
    InvalidPrn {
        constellation: Constellation,
        prn: u16,
    },
    #[error("{sv}: subframe id {id} out of range")]
    InvalidSubframeId { sv: Sv, id: u8 },
    #[error("{sv}: CNAV subframes are not supported")]
    UnsupportedSubframe { sv: Sv },
    #[error("{sv}: even/odd page mismatch")]
    PageMismatch { sv: Sv },
    #[error("null GPS week")]
    NullWeek,
}
