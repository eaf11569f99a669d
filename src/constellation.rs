//! GNSS constellations
use hifitime::TimeScale;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Describes the `GNSS` constellations this decoder understands.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Constellation {
    /// `GPS` american constellation
    #[default]
    GPS,
    /// `Glonass` russian constellation
    Glonass,
    /// `BeiDou` chinese constellation
    BeiDou,
    /// `QZSS` japanese constellation
    QZSS,
    /// `Galileo` european constellation
    Galileo,
    /// SBAS is used to describe augmentation vehicles
    /// without much more information
    SBAS,
}

impl Constellation {
    /// Maps a receiver reported GNSS identifier to a [Constellation].
    /// Returns None for identifiers this decoder does not understand
    /// (NavIC / IMES and reserved values).
    pub fn from_ubx(gnss_id: u8) -> Option<Self> {
        match gnss_id {
            0 => Some(Self::GPS),
            1 => Some(Self::SBAS),
            2 => Some(Self::Galileo),
            3 => Some(Self::Glonass),
            5 => Some(Self::QZSS),
            6 => Some(Self::BeiDou),
            _ => None,
        }
    }

    /// Returns true if Self is an augmentation system
    pub fn is_sbas(&self) -> bool {
        *self == Constellation::SBAS
    }

    /// Returns associated time scale
    pub fn timescale(&self) -> TimeScale {
        match self {
            Self::GPS | Self::QZSS | Self::SBAS => TimeScale::GPST,
            Self::Galileo => TimeScale::GST,
            Self::BeiDou => TimeScale::BDT,
            Self::Glonass => TimeScale::UTC,
        }
    }
}

impl std::fmt::Display for Constellation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::GPS => write!(f, "GPS"),
            Self::Glonass => write!(f, "Glonass"),
            Self::BeiDou => write!(f, "BeiDou"),
            Self::QZSS => write!(f, "QZSS"),
            Self::Galileo => write!(f, "Galileo"),
            Self::SBAS => write!(f, "SBAS"),
        }
    }
}

impl std::fmt::UpperHex for Constellation {
    /*
     * Prints self as single RINEX letter
     */
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::GPS => write!(f, "G"),
            Self::Glonass => write!(f, "R"),
            Self::BeiDou => write!(f, "C"),
            Self::QZSS => write!(f, "J"),
            Self::Galileo => write!(f, "E"),
            Self::SBAS => write!(f, "S"),
        }
    }
}
