#[path = "../common/mod.rs"]
mod common;

use libbana::protocol::{dcs, frame_checksum, lcs};

#[test]
fn lcs_and_dcs_examples() {
    assert_eq!(lcs(5), 0xfb);
    assert_eq!(lcs(0), 0x00);
    assert_eq!(dcs(&[0xD5, 0x0D, 0x00, 0x06, 0x00]), 0x18);
    assert_eq!(frame_checksum(0xD5, 0x0D, &[0x00, 0x06, 0x00]), 0x18);
}

#[test]
fn seeded_complement_form() {
    // ~(0xFF + sum) over direction, opcode and payload
    let body = [0xD5u8, 0x4B, 0x01, 0x01, 0x00, 0x04, 0x08, 0x04, 0xde, 0xad, 0xbe, 0xef];
    let seeded = body.iter().fold(0xFFu8, |acc, &b| acc.wrapping_add(b));
    assert_eq!(dcs(&body), !seeded);
}
