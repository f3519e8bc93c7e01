// libbana/src/reader/mifare.rs

use log::warn;

use crate::card::CardReader;
use crate::constants::mifare;
use crate::protocol::requests::{MifareCommand, decode_mifare};
use crate::protocol::responses::{Reply, encode_auth_result, encode_block_read};

/// Serve a 0x40 request.
pub(crate) fn handle<C: CardReader + ?Sized>(card: &mut C, payload: &[u8]) -> Reply {
    match decode_mifare(payload) {
        Ok(MifareCommand::Authenticate(auth)) => {
            let ok = card.authenticate(&auth.uid, auth.block, auth.slot, &auth.key);
            Reply::Data(encode_auth_result(ok))
        }
        Ok(MifareCommand::Read(req)) => {
            let block = card.read_block(req.block);
            Reply::Data(encode_block_read(block.as_ref()))
        }
        Ok(MifareCommand::Unknown(cmd)) => {
            warn!("unknown mifare cmd: {:02x}", cmd);
            Reply::Ack
        }
        Err(e) => {
            warn!("malformed mifare request: {}", e);
            truncated_reply(payload.get(1).copied())
        }
    }
}

/// A known sub-opcode with a short record fails with that command's own
/// status; without a sub-opcode only a bare ACK is possible.
fn truncated_reply(cmd: Option<u8>) -> Reply {
    match cmd {
        Some(mifare::AUTH_KEY_A | mifare::AUTH_KEY_B) => Reply::Data(encode_auth_result(false)),
        Some(mifare::READ_BLOCK) => Reply::Data(encode_block_read(None)),
        _ => Reply::Ack,
    }
}
