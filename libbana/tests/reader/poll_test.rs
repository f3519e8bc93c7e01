#[path = "../common/mod.rs"]
mod common;

use libbana::card::{CardCall, MockCardReader};
use libbana::prelude::*;
use libbana::test_support::{exchange, felica_card, mifare_card, mock_reader};

use common::fixtures::{SAMPLE_IDM, SAMPLE_PMM, SAMPLE_SYSTEM_CODE, SAMPLE_UID};

fn poll(reader: &mut Reader<MockCardReader, MockSink>) -> Frame {
    let frames = exchange(reader, 0x4A, &[0x01, 0x00]);
    assert_eq!(frames.len(), 1);
    Frame::decode_reply(&frames[0]).unwrap()
}

#[test]
fn poll_without_card() {
    let mut reader = mock_reader(MockCardReader::new());
    let f = poll(&mut reader);
    assert_eq!(f.opcode, 0x4B);
    assert_eq!(f.payload, vec![0x00, 0x00, 0x00]);
    assert_eq!(
        reader.card().calls,
        vec![CardCall::Detect {
            mifare: true,
            felica: true
        }]
    );
}

#[test]
fn poll_mifare_card() {
    let mut reader = mock_reader(mifare_card(SAMPLE_UID));
    let f = poll(&mut reader);
    let mut expected = vec![0x01, 0x01, 0x00, 0x04, 0x08, 0x04];
    expected.extend_from_slice(&SAMPLE_UID);
    assert_eq!(f.payload, expected);
}

#[test]
fn poll_felica_card() {
    let mut reader = mock_reader(felica_card(SAMPLE_IDM, SAMPLE_PMM, SAMPLE_SYSTEM_CODE));
    let f = poll(&mut reader);
    assert_eq!(f.payload.len(), 22);
    assert_eq!(&f.payload[..4], &[0x01, 0x01, 0x14, 0x01]);
    assert_eq!(&f.payload[4..12], &SAMPLE_IDM);
    assert_eq!(&f.payload[12..20], &SAMPLE_PMM);
    assert_eq!(&f.payload[20..], &SAMPLE_SYSTEM_CODE);
}

#[test]
fn select_and_deselect_reach_card() {
    let mut reader = mock_reader(mifare_card(SAMPLE_UID));
    let sel = exchange(&mut reader, 0x54, &[0x01]);
    assert_eq!(Frame::decode(&sel[0]).unwrap().payload, vec![0x00]);
    let desel = exchange(&mut reader, 0x44, &[0x01]);
    assert_eq!(Frame::decode(&desel[0]).unwrap().payload, vec![0x01, 0x00]);
    assert_eq!(
        reader.card_mut().take_calls(),
        vec![CardCall::Select, CardCall::Deselect]
    );
}
