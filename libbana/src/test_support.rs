//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize request framing and MockCardReader setup so
//! tests across the crate and the tests/ directory share the same logic.
#![allow(dead_code)]

use std::time::Instant;

use crate::card::{DetectedCard, MockCardReader};
use crate::constants::DIR_HOST_TO_DEVICE;
use crate::protocol::Frame;
use crate::reader::Reader;
use crate::transport::MockSink;
use crate::types::{Idm, Pmm, SystemCode, Uid};

/// Encode a host->device request frame.
#[doc(hidden)]
pub fn request_frame(opcode: u8, payload: &[u8]) -> Vec<u8> {
    // payloads used by tests are always far below the frame limit
    Frame::new(DIR_HOST_TO_DEVICE, opcode, payload)
        .encode()
        .unwrap_or_default()
}

/// MockCardReader presenting a Mifare card with the given UID.
#[doc(hidden)]
pub fn mifare_card(uid: [u8; 4]) -> MockCardReader {
    let mut card = MockCardReader::new();
    card.set_card(DetectedCard::Mifare {
        uid: Uid::from_bytes(uid),
    });
    card
}

/// MockCardReader presenting a FeliCa card.
#[doc(hidden)]
pub fn felica_card(idm: [u8; 8], pmm: [u8; 8], system_code: [u8; 2]) -> MockCardReader {
    let mut card = MockCardReader::new();
    card.set_card(DetectedCard::Felica {
        idm: Idm::from_bytes(idm),
        pmm: Pmm::from_bytes(pmm),
        system_code: SystemCode::from_bytes(system_code),
    });
    card
}

/// Reader over a MockCardReader that records output in a MockSink.
#[doc(hidden)]
pub fn mock_reader(card: MockCardReader) -> Reader<MockCardReader, MockSink> {
    Reader::new(card, MockSink::new())
}

/// Feed a complete request to `reader` at a single instant and return
/// the frames it emitted in response.
#[doc(hidden)]
pub fn exchange(
    reader: &mut Reader<MockCardReader, MockSink>,
    opcode: u8,
    payload: &[u8],
) -> Vec<Vec<u8>> {
    reader.feed_slice_at(&request_frame(opcode, payload), Instant::now());
    reader.sink_mut().take_frames()
}
