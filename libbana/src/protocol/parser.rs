// libbana/src/protocol/parser.rs

//! Bounds-checked readers over request payloads.

use crate::types::{Idm, Uid};
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a big-endian u16 at given index, with bounds checking.
pub fn be_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    ensure_len(data, idx + 2)?;
    Ok(u16::from_be_bytes([data[idx], data[idx + 1]]))
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Copy `N` bytes at `idx` into an array, with bounds checking.
pub fn array_at<const N: usize>(data: &[u8], idx: usize) -> Result<[u8; N]> {
    let mut arr = [0u8; N];
    arr.copy_from_slice(slice_at(data, idx, N)?);
    Ok(arr)
}

/// Parse an IDm (8 bytes) at `start`.
pub fn idm_at(data: &[u8], start: usize) -> Result<Idm> {
    array_at(data, start).map(Idm::from_bytes)
}

/// Parse a Mifare UID (4 bytes) at `start`.
pub fn uid_at(data: &[u8], start: usize) -> Result<Uid> {
    array_at(data, start).map(Uid::from_bytes)
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}
