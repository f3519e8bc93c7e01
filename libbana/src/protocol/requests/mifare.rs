// libbana/src/protocol/requests/mifare.rs

//! Mifare (0x40) request records.

use crate::constants::mifare;
use crate::protocol::parser;
use crate::types::{KeySlot, MifareKey, Uid};
use crate::Result;

/// Authentication record.
/// Layout: unknown(1) + cmd(1) + block(1) + key(6) + uid(4)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthRequest {
    /// Key slot picked by the sub-opcode
    pub slot: KeySlot,
    /// Block whose sector is authenticated
    pub block: u8,
    /// Sector key
    pub key: MifareKey,
    /// UID of the card to authenticate against
    pub uid: Uid,
}

/// Block read record.
/// Layout: unknown(1) + cmd(1) + block(1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadRequest {
    /// Block number
    pub block: u8,
}

/// Decoded 0x40 sub-command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MifareCommand {
    /// Sub-opcode 0x60 or 0x61
    Authenticate(AuthRequest),
    /// Sub-opcode 0x30
    Read(ReadRequest),
    /// Any other sub-opcode
    Unknown(u8),
}

/// Decode the payload of a 0x40 request. The sub-opcode sits at
/// payload[1].
pub fn decode_mifare(payload: &[u8]) -> Result<MifareCommand> {
    let cmd = parser::byte_at(payload, 1)?;
    match cmd {
        mifare::AUTH_KEY_A => Ok(MifareCommand::Authenticate(decode_auth(payload, KeySlot::A)?)),
        mifare::AUTH_KEY_B => Ok(MifareCommand::Authenticate(decode_auth(payload, KeySlot::B)?)),
        mifare::READ_BLOCK => Ok(MifareCommand::Read(decode_read(payload)?)),
        other => Ok(MifareCommand::Unknown(other)),
    }
}

/// Decode a 13-byte authentication record.
pub fn decode_auth(payload: &[u8], slot: KeySlot) -> Result<AuthRequest> {
    const LEN: usize = 1 + 1 + 1 + 6 + 4; // 13
    parser::ensure_len(payload, LEN)?;
    Ok(AuthRequest {
        slot,
        block: parser::byte_at(payload, 2)?,
        key: MifareKey::from_bytes(parser::array_at(payload, 3)?),
        uid: parser::uid_at(payload, 9)?,
    })
}

/// Decode a block read record.
pub fn decode_read(payload: &[u8]) -> Result<ReadRequest> {
    Ok(ReadRequest {
        block: parser::byte_at(payload, 2)?,
    })
}
