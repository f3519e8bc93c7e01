// libbana/src/protocol/frame.rs

//! Frame encoding and decoding.

use crate::constants::{
    DIR_DEVICE_TO_HOST, DIRECTION_OFFSET, FRAME_OVERHEAD, LCS_OFFSET, LEN_OFFSET, OPCODE_OFFSET,
    PAYLOAD_OFFSET, POSTAMBLE, PREAMBLE,
};
use crate::protocol::checksum::{frame_checksum, lcs};
use crate::{Error, Result};

/// Largest payload a frame can carry: the length byte also covers
/// direction and opcode.
pub const MAX_PAYLOAD_LEN: usize = 255 - 2;

/// Reader wire frame.
/// Format: [Preamble(3)] [Len(1)] [LCS(1)] [Dir(1)] [Opcode(1)] [Payload(n)] [DCS(1)] [Postamble(1)]
/// Len counts Dir + Opcode + Payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// 0xD4 host->device, 0xD5 device->host
    pub direction: u8,
    /// Command code; a reply carries the request's code plus one
    pub opcode: u8,
    /// Command-specific bytes
    pub payload: Vec<u8>,
}

impl Frame {
    /// Build a frame, copying `payload`.
    pub fn new(direction: u8, opcode: u8, payload: &[u8]) -> Self {
        Self {
            direction,
            opcode,
            payload: payload.to_vec(),
        }
    }

    /// Value of the length byte for this frame.
    pub fn len_byte(&self) -> Result<u8> {
        if self.payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_PAYLOAD_LEN,
                actual: self.payload.len(),
            });
        }
        Ok((self.payload.len() + 2) as u8)
    }

    /// Encode into a full wire frame
    pub fn encode(&self) -> Result<Vec<u8>> {
        let len = self.len_byte()?;
        let mut out = Vec::with_capacity(FRAME_OVERHEAD + len as usize);
        out.extend_from_slice(&PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.push(self.direction);
        out.push(self.opcode);
        out.extend_from_slice(&self.payload);
        out.push(frame_checksum(self.direction, self.opcode, &self.payload));
        out.push(POSTAMBLE);
        Ok(out)
    }

    /// Decode a full wire frame, validating every checksum. The reader
    /// itself never calls this on inbound traffic; it is the host-side
    /// view used to verify responses.
    pub fn decode(frame: &[u8]) -> Result<Self> {
        // Smallest data frame: overhead + direction + opcode
        let min = FRAME_OVERHEAD + 2;
        if frame.len() < min {
            return Err(Error::InvalidLength {
                expected: min,
                actual: frame.len(),
            });
        }

        if frame[..3] != PREAMBLE {
            return Err(Error::FrameFormat("invalid preamble".into()));
        }

        let len = frame[LEN_OFFSET];
        let lcs_actual = frame[LCS_OFFSET];
        let lcs_expected = lcs(len);
        if lcs_actual != lcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: lcs_expected,
                actual: lcs_actual,
            });
        }

        let required_len = FRAME_OVERHEAD + len as usize;
        if frame.len() != required_len || len < 2 {
            return Err(Error::InvalidLength {
                expected: required_len.max(min),
                actual: frame.len(),
            });
        }

        let body_end = DIRECTION_OFFSET + len as usize;
        let direction = frame[DIRECTION_OFFSET];
        let opcode = frame[OPCODE_OFFSET];
        let payload = &frame[PAYLOAD_OFFSET..body_end];

        let dcs_actual = frame[body_end];
        let dcs_expected = frame_checksum(direction, opcode, payload);
        if dcs_actual != dcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: dcs_expected,
                actual: dcs_actual,
            });
        }

        if frame[body_end + 1] != POSTAMBLE {
            return Err(Error::FrameFormat("invalid postamble".into()));
        }

        Ok(Self::new(direction, opcode, payload))
    }

    /// Decode a frame emitted by the reader, additionally requiring the
    /// device-to-host direction byte.
    pub fn decode_reply(frame: &[u8]) -> Result<Self> {
        let decoded = Self::decode(frame)?;
        if decoded.direction != DIR_DEVICE_TO_HOST {
            return Err(Error::UnexpectedDirection {
                expected: DIR_DEVICE_TO_HOST,
                actual: decoded.direction,
            });
        }
        Ok(decoded)
    }
}

/// Borrowed view over an accumulated request frame.
///
/// Framing trusts the length byte only: the view is built from exactly
/// `len + 7` bytes and never checks LCS, DCS or the postamble. With a
/// length of 1 the opcode offset lands on the DCS byte and the payload
/// is empty.
#[derive(Debug, Clone, Copy)]
pub struct RawFrame<'a> {
    raw: &'a [u8],
}

impl<'a> RawFrame<'a> {
    /// Wrap a buffer of at least `FRAME_OVERHEAD + 1` bytes whose length
    /// byte accounts for the whole buffer.
    pub fn new(raw: &'a [u8]) -> Result<Self> {
        if raw.len() <= FRAME_OVERHEAD || raw.len() != FRAME_OVERHEAD + raw[LEN_OFFSET] as usize {
            return Err(Error::InvalidLength {
                expected: raw
                    .get(LEN_OFFSET)
                    .map_or(FRAME_OVERHEAD + 1, |&l| FRAME_OVERHEAD + l as usize),
                actual: raw.len(),
            });
        }
        Ok(Self { raw })
    }

    /// Length byte as received.
    pub fn len_byte(&self) -> u8 {
        self.raw[LEN_OFFSET]
    }

    /// Direction byte as received.
    pub fn direction(&self) -> u8 {
        self.raw[DIRECTION_OFFSET]
    }

    /// Byte at the opcode offset.
    pub fn opcode(&self) -> u8 {
        self.raw[OPCODE_OFFSET]
    }

    /// Bytes between the opcode and the DCS.
    pub fn payload(&self) -> &'a [u8] {
        let end = DIRECTION_OFFSET + self.len_byte() as usize;
        if end <= PAYLOAD_OFFSET {
            return &[];
        }
        &self.raw[PAYLOAD_OFFSET..end]
    }

    /// The whole frame, preamble through postamble.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.raw
    }
}
