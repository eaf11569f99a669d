//! UBX message payloads
mod mid;
mod rawx;

pub(crate) mod subframe;

pub use rawx::{RawxEpoch, RawxMeas};
pub use subframe::SbasMessage;

pub(crate) use mid::MessageId;
