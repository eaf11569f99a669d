pub struct Constants {}

impl Constants {
    /// UBX frame sync char #1. The transport layer locates and verifies
    /// it; this crate only documents it.
    pub const UBX_SYNC1: u8 = 0xB5;

    /// UBX frame sync char #2
    pub const UBX_SYNC2: u8 = 0x62;

    /// Length of the fixed frame header (sync, class, id, length)
    pub const FRAME_HEADER_LEN: usize = 6;

    /// UBX-RXM message class
    pub const RXM_CLASS: u8 = 0x02;

    /// UBX-RXM-RAWX message id
    pub const RXM_RAWX_ID: u8 = 0x15;

    /// UBX-RXM-SFRBX message id
    pub const RXM_SFRBX_ID: u8 = 0x13;

    /// RXM-RAWX payload header length
    pub const RAWX_HEADER_LEN: usize = 16;

    /// RXM-RAWX per measurement record length
    pub const RAWX_RECORD_LEN: usize = 32;

    /// Carrier phase standard deviation code above which
    /// the phase observation cannot be trusted
    pub const MAX_CPSTD: u8 = 10;

    /// Reserved carrier phase value flagging an invalid observation
    pub const CPHASE_INVALID: f64 = -0.5;

    /// GPS L2/L5 CNAV preamble: such subframes are not handled
    pub const PREAMB_CNAV: u32 = 0x8B;

    /// GLONASS "satellite not identified yet" PRN sentinel
    pub const GLO_PRN_UNKNOWN: u16 = 255;

    /// Offset between QZSS in-constellation numbering and PRN
    pub const QZSS_PRN_OFFSET: u16 = 192;

    /// RXM-SFRBX payload length of a QZSS L1S transmission,
    /// which reclassifies the message as SBAS
    pub const QZSS_L1S_PAYLOAD_LEN: usize = 52;

    /// PRN reduction applied when reclassifying a QZSS L1S page
    pub const QZSS_L1S_PRN_SHIFT: u16 = 10;

    /// Seconds per GPS week
    pub const WEEK_SECONDS: f64 = 604_800.0;
}
