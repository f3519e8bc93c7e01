// fixtures.rs: commonly used test payloads and frames

use libbana::types::BlockData;

pub const SAMPLE_UID: [u8; 4] = [0x04, 0x9a, 0x3b, 0x52];
pub const SAMPLE_IDM: [u8; 8] = [0x01, 0x2e, 0x4c, 0xd8, 0x12, 0x34, 0x56, 0x78];
pub const SAMPLE_PMM: [u8; 8] = [0x00, 0xf1, 0x00, 0x00, 0x00, 0x01, 0x43, 0x00];
pub const SAMPLE_SYSTEM_CODE: [u8; 2] = [0x88, 0xb4];
pub const SAMPLE_SERVICE: u16 = 0x000b;

/// Wire bytes the reader must answer a status query with.
pub fn status_response() -> Vec<u8> {
    hex::decode("0000ff05fbd50d0006001800").unwrap()
}

/// Status query as the host sends it.
pub fn status_request() -> Vec<u8> {
    hex::decode("0000ff02fed40c2000").unwrap()
}

/// Mifare auth payload: unknown, cmd, block, key[6], uid[4]
pub fn mifare_auth_payload(cmd: u8, block: u8, key: [u8; 6], uid: [u8; 4]) -> Vec<u8> {
    let mut p = vec![0x01, cmd, block];
    p.extend_from_slice(&key);
    p.extend_from_slice(&uid);
    p
}

/// 0xA0 payload carrying Read Without Encryption for `blocks`.
pub fn felica_read_payload(blocks: &[u16]) -> Vec<u8> {
    let body_len = 1 + 8 + 1 + 2 + 1 + blocks.len() * 2;
    let mut p = vec![0x00, 0x00, body_len as u8, 0x06];
    p.extend_from_slice(&SAMPLE_IDM);
    p.push(0x01);
    p.extend_from_slice(&SAMPLE_SERVICE.to_le_bytes());
    p.push(blocks.len() as u8);
    for b in blocks {
        p.extend_from_slice(&b.to_be_bytes());
    }
    p
}

pub fn sample_block(fill: u8) -> BlockData {
    BlockData::from_bytes([fill; 16])
}
