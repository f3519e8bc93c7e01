// libbana/src/error.rs

//! Crate error type.

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// Input shorter (or longer) than the record requires.
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length
        expected: usize,
        /// Length seen
        actual: usize,
    },

    /// LCS or DCS does not match the frame contents.
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        /// Checksum computed from the frame
        expected: u8,
        /// Checksum carried by the frame
        actual: u8,
    },

    /// Bad preamble or postamble.
    #[error("frame format error: {0}")]
    FrameFormat(String),

    /// Frame flows the wrong way.
    #[error("unexpected direction byte: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedDirection {
        /// Direction byte required
        expected: u8,
        /// Direction byte seen
        actual: u8,
    },

    /// Output writer failed.
    #[error("sink i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
