// libbana/src/protocol/responses/mifare.rs

//! Mifare status and block replies.

use crate::constants::mifare;
use crate::types::BlockData;

/// `00` on success, `01` on failure.
pub fn encode_auth_result(ok: bool) -> Vec<u8> {
    if ok {
        vec![0x00]
    } else {
        vec![mifare::STATUS_AUTH_FAILED]
    }
}

/// status(1) + data(16) on success, a single `14` on failure.
pub fn encode_block_read(block: Option<&BlockData>) -> Vec<u8> {
    match block {
        Some(data) => {
            let mut out = Vec::with_capacity(17);
            out.push(0x00);
            out.extend_from_slice(data.as_bytes());
            out
        }
        None => vec![mifare::STATUS_READ_FAILED],
    }
}
