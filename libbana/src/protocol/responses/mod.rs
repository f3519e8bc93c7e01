// libbana/src/protocol/responses/mod.rs

//! Reply payload encoding.

pub mod felica;
pub mod mifare;
pub mod polling;

pub use felica::encode_felica_read;
pub use mifare::{encode_auth_result, encode_block_read};
pub use polling::encode_card_report;

/// What a handled request sends back. Per-family payload encoders live
/// in `protocol::responses::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Full response frame with opcode = request opcode + 1.
    Data(Vec<u8>),
    /// Bare ACK frame.
    Ack,
    /// Nothing is sent.
    Silent,
}

impl Reply {
    /// Response frame with no payload.
    pub fn empty() -> Self {
        Self::Data(Vec::new())
    }

    /// Response frame carrying `payload`.
    pub fn data(payload: &[u8]) -> Self {
        Self::Data(payload.to_vec())
    }
}
