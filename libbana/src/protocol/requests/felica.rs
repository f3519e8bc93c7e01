// libbana/src/protocol/requests/felica.rs

//! FeliCa (0xA0) request records.

use crate::constants::felica;
use crate::protocol::parser;
use crate::types::{Idm, ServiceCode};
use crate::Result;

/// Offset of the FeliCa body inside a 0xA0 payload, after
/// timeout(2) + len(1) + cmd(1).
const BODY_OFFSET: usize = 4;

/// Read Without Encryption request, as tunnelled through 0xA0.
/// Layout after the header: idm(8) + service_count(1) + service(2, LE)
/// + block_count(1) + blocks(N * 2, BE)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FelicaReadRequest {
    /// Target card
    pub idm: Idm,
    /// The single service read from
    pub service: ServiceCode,
    /// Block numbers, already clamped to `MAX_READ_BLOCKS`.
    pub blocks: Vec<u16>,
}

/// Decoded 0xA0 sub-command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FelicaCommand {
    /// Sub-command 0x06
    ReadWithoutEncryption(FelicaReadRequest),
    /// Anything else; left unanswered.
    Unknown {
        /// Sub-command byte
        cmd: u8,
        /// Length byte that preceded it
        len: u8,
    },
}

/// Decode the payload of a 0xA0 request.
pub fn decode_felica(payload: &[u8]) -> Result<FelicaCommand> {
    let len = parser::byte_at(payload, 2)?;
    let cmd = parser::byte_at(payload, 3)?;
    if cmd != felica::READ_WITHOUT_ENCRYPTION {
        return Ok(FelicaCommand::Unknown { cmd, len });
    }
    decode_read(&payload[BODY_OFFSET..]).map(FelicaCommand::ReadWithoutEncryption)
}

fn decode_read(body: &[u8]) -> Result<FelicaReadRequest> {
    const HEADER_LEN: usize = 8 + 1 + 2 + 1; // 12
    parser::ensure_len(body, HEADER_LEN)?;

    let idm = parser::idm_at(body, 0)?;
    // service count at 8 is always 1 for this reader
    let service = ServiceCode::from_le_bytes(parser::array_at(body, 9)?);
    let count = (parser::byte_at(body, 11)? as usize).min(felica::MAX_READ_BLOCKS);

    let blocks = (0..count)
        .map(|i| parser::be_u16_at(body, HEADER_LEN + i * 2))
        .collect::<Result<Vec<u16>>>()?;

    Ok(FelicaReadRequest {
        idm,
        service,
        blocks,
    })
}
