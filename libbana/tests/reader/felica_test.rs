#[path = "../common/mod.rs"]
mod common;

use std::time::Instant;

use libbana::prelude::*;
use libbana::test_support::{exchange, felica_card, mock_reader, request_frame};

use common::fixtures::{
    SAMPLE_IDM, SAMPLE_PMM, SAMPLE_SERVICE, SAMPLE_SYSTEM_CODE, felica_read_payload, sample_block,
};

fn reader_with_blocks() -> Reader<MockCardReader, MockSink> {
    let mut card = felica_card(SAMPLE_IDM, SAMPLE_PMM, SAMPLE_SYSTEM_CODE);
    card.put_felica_block(SAMPLE_SERVICE, 0x8000, sample_block(0x10));
    card.put_felica_block(SAMPLE_SERVICE, 0x8001, sample_block(0x20));
    card.put_felica_block(SAMPLE_SERVICE, 0x8082, sample_block(0x30));
    mock_reader(card)
}

#[test]
fn two_block_read_layout() {
    let mut reader = reader_with_blocks();
    let frames = exchange(&mut reader, 0xA0, &felica_read_payload(&[0x8000, 0x8001]));
    assert_eq!(frames.len(), 1);

    let f = Frame::decode(&frames[0]).unwrap();
    assert_eq!(f.opcode, 0xA1);
    assert_eq!(f.payload.len(), 3 + 8 + 2 + 1 + 32);
    assert_eq!(f.payload[0], 0x00);
    assert_eq!(f.payload[1], 45);
    assert_eq!(f.payload[2], 0x07);
    assert_eq!(&f.payload[3..11], &SAMPLE_IDM);
    assert_eq!(&f.payload[11..13], &[0x00, 0x00]);
    assert_eq!(f.payload[13], 2);
    assert_eq!(&f.payload[14..30], sample_block(0x10).as_bytes());
    assert_eq!(&f.payload[30..46], sample_block(0x20).as_bytes());
}

#[test]
fn read_clamps_to_four_blocks() {
    let mut reader = reader_with_blocks();
    let blocks = [0x8000, 0x8001, 0x8082, 0x8003, 0x8004];
    let frames = exchange(&mut reader, 0xA0, &felica_read_payload(&blocks));
    let f = Frame::decode(&frames[0]).unwrap();
    assert_eq!(f.payload[13], 4);
    assert_eq!(f.payload.len(), 14 + 64);
    // 0x8003 is missing on the card: zero slot, no error flag
    assert_eq!(&f.payload[62..78], &[0u8; 16]);
    assert_eq!(f.payload[0], 0x00);
}

#[test]
fn unsupported_sub_command_is_unanswered() {
    let mut reader = reader_with_blocks();
    let t0 = Instant::now();
    reader.feed_slice_at(&request_frame(0xA0, &[0x00, 0x00, 0x0a, 0x0c, 0x01]), t0);
    assert!(reader.sink().bytes.is_empty());
    assert!(reader.is_active_at(t0));
}

#[test]
fn block_order_follows_request() -> anyhow::Result<()> {
    let mut reader = reader_with_blocks();
    let frames = exchange(&mut reader, 0xA0, &felica_read_payload(&[0x8082, 0x8000]));
    let f = Frame::decode(&frames[0])?;
    assert_eq!(&f.payload[14..30], sample_block(0x30).as_bytes());
    assert_eq!(&f.payload[30..46], sample_block(0x10).as_bytes());
    Ok(())
}
