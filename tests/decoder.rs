use ubx_rxm::prelude::{DecodeResult, Decoder, Epoch, Error, NavEvent, Sv};
use ubx_rxm::prelude::{Constellation, Skip};

/// UBX-RXM-RAWX capture: 2 BeiDou measurements, week 2349
const RAWX_FRAME: &str = "b5620215500000000000383f08412d0912020101dc69cf6232cfe69e72414418\
96f4b0e4984177ae00c50618000900000f0a0f0d01001bba495701a67541b7dc\
66ea7fe69c41202284c5060d000500000b0b0f0d01008872";

/// UBX-RXM-SFRBX capture: SBAS vehicle 128, 9 data words
const SFRBX_FRAME: &str = "b56202132c0001800000092602700001fc9a67b21000200000e9000014c00000\
0000000000000000000000bc501b000000002726";

fn hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

#[test]
fn rawx_capture() {
    let mut decoder = Decoder::new();
    let frame = hex(RAWX_FRAME);

    let epoch = match decoder.decode(&frame).unwrap() {
        DecodeResult::Epoch(epoch) => epoch,
        other => panic!("unexpected result: {:?}", other),
    };

    assert_eq!(epoch.tow_s, 198_631.0);
    assert_eq!(epoch.week, 2349);
    assert_eq!(epoch.version, 1);
    assert_eq!(epoch.meas.len(), 2);
    assert_eq!(
        epoch.epoch,
        Epoch::from_gpst_seconds(2349.0 * 604_800.0 + 198_631.0)
    );

    // both measurements track code only (trkStat bit 0):
    // pseudorange populated, carrier phase forced to zero
    // whatever the std-dev field says
    for meas in &epoch.meas {
        assert_eq!(meas.trk_status, 0x01);
        assert!(meas.pseudorange_m > 0.0);
        assert_eq!(meas.carrier_phase_cycles, 0.0);
        assert_eq!(meas.gnss_id, 6);
        assert_eq!(meas.sig_id, 0);
        assert_eq!(meas.lock_time_ms, 0);
        assert_eq!(meas.cp_stddev, 15);
    }

    assert_eq!(epoch.meas[0].sv_id, 24);
    assert_eq!(epoch.meas[0].freq_id, 9);
    assert_eq!(epoch.meas[0].cn0_dbhz, 15);

    assert_eq!(epoch.meas[1].sv_id, 13);
    assert_eq!(epoch.meas[1].freq_id, 5);
    assert_eq!(epoch.meas[1].cn0_dbhz, 11);

    // session time now set for the navigation path
    assert_eq!(decoder.time(), Some(epoch.epoch));
}

#[test]
fn rawx_record_table_past_buffer_end() {
    let mut decoder = Decoder::new();
    let mut frame = hex(RAWX_FRAME);

    // three records declared, two present: reject, no observations
    frame[6 + 11] = 3;
    match decoder.decode(&frame) {
        Err(Error::NotEnoughBytes { need, avail }) => {
            assert_eq!(need, 16 + 3 * 32);
            assert_eq!(avail, 80);
        },
        other => panic!("expected length error, got {:?}", other),
    }
}

#[test]
fn sfrbx_sbas_capture() {
    // gnss id 1 + vehicle 128: dispatches to the SBAS path, not GPS
    let mut decoder = Decoder::new();
    decoder.set_time(Epoch::from_gpst_seconds(2349.0 * 604_800.0 + 198_631.0));

    let frame = hex(SFRBX_FRAME);
    match decoder.decode(&frame).unwrap() {
        DecodeResult::Nav { sv, event } => {
            assert_eq!(sv, Sv::new(Constellation::SBAS, 128));
            assert_eq!(sv.index(), Some(128));
            match event {
                NavEvent::Sbas(msg) => {
                    assert_eq!(msg.prn, 128);
                    assert_eq!(msg.week, 2349);
                    assert_eq!(msg.tow_s, 198_631);
                    assert_eq!(
                        msg.message,
                        [
                            154, 252, 1, 0, 0, 16, 178, 103, 233, 0, 0, 32, 192, 20, 0, 0, 0, 0, 0,
                            0, 0, 0, 0, 0, 0, 0, 0, 0, 27,
                        ]
                    );
                },
                other => panic!("expected SBAS page, got {:?}", other),
            }
        },
        other => panic!("unexpected result: {:?}", other),
    }

    // SBAS pages are self contained: nothing accumulates
    assert!(decoder.collector().is_empty());
}

fn sfrbx_frame(payload: &[u8]) -> Vec<u8> {
    let mut frame = vec![0xb5, 0x62, 0x02, 0x13];
    frame.extend_from_slice(&(payload.len() as u16).to_le_bytes());
    frame.extend_from_slice(payload);
    frame.extend_from_slice(&[0, 0]);
    frame
}

fn gps_payload(sv_id: u8, subframe_id: u32) -> Vec<u8> {
    let mut words = [0_u32; 10];
    words[0] = 0x22c0_0000;
    words[1] = subframe_id << 8;
    for (i, word) in words.iter_mut().enumerate().skip(2) {
        *word = (0x10_0000 + i as u32) << 6;
    }
    let mut payload = vec![0, sv_id, 0, 0, 10, 0, 2, 0];
    for word in words {
        payload.extend_from_slice(&word.to_le_bytes());
    }
    payload
}

#[test]
fn gps_ephemeris_flow() {
    let mut decoder = Decoder::new();
    let sv = Sv::new(Constellation::GPS, 5);

    for id in [1, 2] {
        match decoder.decode(&sfrbx_frame(&gps_payload(5, id))).unwrap() {
            DecodeResult::Nav { sv: got, event } => {
                assert_eq!(got, sv);
                assert_eq!(event, NavEvent::Stored);
            },
            other => panic!("unexpected result: {:?}", other),
        }
    }

    match decoder.decode(&sfrbx_frame(&gps_payload(5, 3))).unwrap() {
        DecodeResult::Nav {
            event: NavEvent::Ephemeris { data },
            ..
        } => {
            assert_eq!(data.len(), 150);
            for slot in 0..3 {
                assert_eq!(data[slot * 30], 0x8b);
            }
        },
        other => panic!("unexpected result: {:?}", other),
    }

    // ionosphere/UTC page: hand off, then the slot is wiped
    match decoder.decode(&sfrbx_frame(&gps_payload(5, 4))).unwrap() {
        DecodeResult::Nav {
            event: NavEvent::IonoUtc { data },
            ..
        } => assert_eq!(data[90], 0x8b),
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(decoder.collector().filled_slots(sv), Some(0b00111));

    // one bad fragment rejects only itself
    let mut bad = gps_payload(5, 3);
    bad[8..12].copy_from_slice(&0x8b00_0000_u32.to_le_bytes());
    assert_eq!(
        decoder.decode(&sfrbx_frame(&bad)),
        Err(Error::UnsupportedSubframe { sv })
    );
    assert_eq!(decoder.collector().filled_slots(sv), Some(0b00111));
}

#[test]
fn galileo_word_types_beyond_range_skipped() {
    let mut decoder = Decoder::new();

    let mut words = [0_u32; 9];
    words[0] = 63 << 24;
    words[4] = 0x8000_0000;

    let mut payload = vec![2, 11, 0, 0, 9, 0, 3, 0];
    for word in words {
        payload.extend_from_slice(&word.to_le_bytes());
    }

    assert_eq!(
        decoder.decode(&sfrbx_frame(&payload)),
        Ok(DecodeResult::Skip(Skip::PageType(63)))
    );
    assert!(decoder.collector().is_empty());
}

#[test]
fn satellite_eviction() {
    let mut decoder = Decoder::new();
    let sv = Sv::new(Constellation::GPS, 5);

    decoder.decode(&sfrbx_frame(&gps_payload(5, 1))).unwrap();
    assert_eq!(decoder.collector().len(), 1);

    // caller drops the vehicle on loss of track
    assert!(decoder.collector_mut().reset(sv));
    assert!(decoder.collector().is_empty());
}
