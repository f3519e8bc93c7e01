#[path = "../common/mod.rs"]
mod common;

use libbana::constants::ACK_FRAME;
use libbana::prelude::*;
use libbana::test_support::{exchange, mifare_card, mock_reader};

use common::fixtures::{SAMPLE_UID, mifare_auth_payload, sample_block};

fn payload(frames: &[Vec<u8>]) -> Vec<u8> {
    assert_eq!(frames.len(), 1);
    Frame::decode_reply(&frames[0]).unwrap().payload
}

#[test]
fn read_without_card_reports_failure_status() {
    let mut reader = mock_reader(MockCardReader::new());
    let frames = exchange(&mut reader, 0x40, &[0x01, 0x30, 0x04]);
    assert_eq!(payload(&frames), vec![0x14]);
}

#[test]
fn auth_then_read() {
    let mut card = mifare_card(SAMPLE_UID);
    card.accepted_key = Some(MifareKey::from_bytes([0x60, 0x90, 0xd0, 0x06, 0x32, 0xf5]));
    card.put_mifare_block(1, sample_block(0x7e));
    let mut reader = mock_reader(card);

    let auth = mifare_auth_payload(0x61, 1, [0x60, 0x90, 0xd0, 0x06, 0x32, 0xf5], SAMPLE_UID);
    assert_eq!(payload(&exchange(&mut reader, 0x40, &auth)), vec![0x00]);

    let read = payload(&exchange(&mut reader, 0x40, &[0x01, 0x30, 0x01]));
    assert_eq!(read.len(), 17);
    assert_eq!(read[0], 0x00);
    assert_eq!(&read[1..], sample_block(0x7e).as_bytes());
}

#[test]
fn wrong_key_fails_auth() {
    let mut card = mifare_card(SAMPLE_UID);
    card.accepted_key = Some(MifareKey::from_bytes([0xff; 6]));
    let mut reader = mock_reader(card);

    let auth = mifare_auth_payload(0x60, 2, [0x00; 6], SAMPLE_UID);
    assert_eq!(payload(&exchange(&mut reader, 0x40, &auth)), vec![0x01]);
}

#[test]
fn unknown_mifare_sub_opcode_gets_ack() {
    let mut reader = mock_reader(mifare_card(SAMPLE_UID));
    let frames = exchange(&mut reader, 0x40, &[0x01, 0xA0, 0x04]);
    assert_eq!(frames, vec![ACK_FRAME.to_vec()]);
}

#[test]
fn truncated_auth_record_reports_auth_failure() {
    let mut reader = mock_reader(mifare_card(SAMPLE_UID));
    let frames = exchange(&mut reader, 0x40, &[0x01, 0x60, 0x04, 0xff, 0xff]);
    assert_eq!(payload(&frames), vec![0x01]);
    assert!(reader.card().calls.is_empty());
}
