#[path = "../common/mod.rs"]
mod common;

use std::time::{Duration, Instant};

use libbana::card::MockCardReader;
use libbana::constants::ACK_FRAME;
use libbana::prelude::*;
use libbana::test_support::{exchange, mock_reader, request_frame};

#[test]
fn status_query_answer_is_bit_exact() {
    common::init_logging();
    let mut reader = mock_reader(MockCardReader::new());
    reader.feed_slice_at(&common::fixtures::status_request(), Instant::now());
    assert_eq!(
        reader.sink().frames,
        vec![common::fixtures::status_response()]
    );
}

#[test]
fn garbage_before_preamble_yields_one_dispatch() {
    let mut reader = mock_reader(MockCardReader::new());
    let mut stream = vec![0x3c, 0xa7];
    stream.extend_from_slice(&request_frame(0x0C, &[]));
    reader.feed_slice_at(&stream, Instant::now());
    assert_eq!(
        reader.sink().frames,
        vec![common::fixtures::status_response()]
    );
}

#[test]
fn wake_tone_alone_does_nothing() {
    let mut reader = mock_reader(MockCardReader::new());
    let t0 = Instant::now();
    assert!(reader.feed_at(0x55, t0));
    assert_eq!(reader.pending(), 0);
    assert!(reader.sink().bytes.is_empty());
    assert!(!reader.is_active_at(t0));
}

#[test]
fn gap_abandons_frame() {
    let mut reader = mock_reader(MockCardReader::new());
    let t0 = Instant::now();
    let wire = request_frame(0x0C, &[]);
    reader.feed_slice_at(&wire[..7], t0);
    reader.feed_slice_at(&wire[7..], t0 + Duration::from_millis(150));
    assert!(reader.sink().bytes.is_empty());
    assert!(!reader.is_active_at(t0));

    // next attempt within timing goes through
    reader.feed_slice_at(&wire, t0 + Duration::from_millis(200));
    assert_eq!(reader.sink().frames.len(), 1);
}

#[test]
fn host_ack_is_ignored() {
    let mut reader = mock_reader(MockCardReader::new());
    reader.feed_slice_at(&ACK_FRAME, Instant::now());
    assert!(reader.sink().bytes.is_empty());
}

#[test]
fn unknown_opcode_gets_bare_ack() {
    let mut reader = mock_reader(MockCardReader::new());
    let frames = exchange(&mut reader, 0x02, &[]);
    assert_eq!(frames, vec![ACK_FRAME.to_vec()]);
}

#[test]
fn corrupt_checksum_is_still_answered() {
    let mut reader = mock_reader(MockCardReader::new());
    let mut wire = request_frame(0x0C, &[]);
    let idx = wire.len() - 2;
    wire[idx] = wire[idx].wrapping_add(3);
    reader.feed_slice_at(&wire, Instant::now());
    assert_eq!(
        reader.sink().frames,
        vec![common::fixtures::status_response()]
    );
}

#[test]
fn init_sequence_like_a_host() {
    let mut reader = mock_reader(MockCardReader::new());

    let fw = exchange(&mut reader, 0x06, &[0x00, 0x1c]);
    assert_eq!(
        Frame::decode(&fw[0]).unwrap().payload,
        libbana::constants::FIRMWARE_CAPABILITY.to_vec()
    );

    for op in [0x18u8, 0x12] {
        let f = Frame::decode(&exchange(&mut reader, op, &[0x01])[0]).unwrap();
        assert_eq!(f.direction, 0xD5);
        assert_eq!(f.opcode, op + 1);
    }

    let rf = exchange(&mut reader, 0x32, &[0x01, 0x00]);
    assert!(Frame::decode(&rf[0]).unwrap().payload.is_empty());
    assert!(!reader.card().rf_field);
    assert!(reader.is_active());
}

#[test]
fn io_sink_streams_to_writer() {
    let mut reader = Reader::new(MockCardReader::new(), IoSink::new(Vec::new()));
    reader.feed_slice_at(&request_frame(0x0C, &[]), Instant::now());
    let (_, sink) = reader.into_parts();
    assert_eq!(sink.into_inner(), common::fixtures::status_response());
}

#[test]
fn closure_sink_receives_bytes() {
    let mut out: Vec<u8> = Vec::new();
    {
        let sink = FnSink(|b: u8| out.push(b));
        let mut reader = ReaderBuilder::new().debug(true).build(MockCardReader::new(), sink);
        reader.feed_slice_at(&request_frame(0x0C, &[]), Instant::now());
    }
    assert_eq!(out, common::fixtures::status_response());
}
