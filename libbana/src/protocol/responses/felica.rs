// libbana/src/protocol/responses/felica.rs

//! FeliCa read reply.

use crate::constants::felica;
use crate::types::{BlockData, Idm};

/// Encode the 0xA0 Read Without Encryption answer.
/// Layout: status(1) + len(1) + cmd(1) + idm(8) + service(2) + block_count(1) + blocks(N * 16)
///
/// `len` counts itself through the last block byte. The service field is
/// always `00 00`; there is no per-block status.
pub fn encode_felica_read(idm: &Idm, blocks: &[BlockData]) -> Vec<u8> {
    let count = blocks.len();
    let len = 2 + 8 + 2 + 1 + count * 16;

    let mut out = Vec::with_capacity(1 + len);
    out.push(0x00);
    out.push(len as u8);
    out.push(felica::READ_WITHOUT_ENCRYPTION_RESPONSE);
    out.extend_from_slice(idm.as_bytes());
    out.extend_from_slice(&[0x00, 0x00]);
    out.push(count as u8);
    for b in blocks {
        out.extend_from_slice(b.as_bytes());
    }
    out
}
