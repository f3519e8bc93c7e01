// libbana/src/protocol/checksum.rs

//! Length and data checksums.

/// Compute the Length Checksum (LCS): two's complement of the length byte.
/// LCS = (~len) + 1 (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute the Data Checksum (DCS) over `{direction, opcode, payload}`.
///
/// The reader seeds the sum with 0xFF and inverts it:
/// `~(0xFF + sum) == 0x100 - sum (mod 256)`, so this is the plain
/// two's-complement of the byte sum.
pub fn dcs(data: &[u8]) -> u8 {
    let sum = data.iter().fold(0xFFu8, |acc, &b| acc.wrapping_add(b));
    !sum
}

/// DCS for a frame given its parts, without concatenating them.
pub fn frame_checksum(direction: u8, opcode: u8, payload: &[u8]) -> u8 {
    let head = 0xFFu8.wrapping_add(direction).wrapping_add(opcode);
    !payload.iter().fold(head, |acc, &b| acc.wrapping_add(b))
}
