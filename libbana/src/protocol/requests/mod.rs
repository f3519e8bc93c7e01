// libbana/src/protocol/requests/mod.rs

//! Request decoding.

pub mod felica;
pub mod mifare;

pub use felica::{FelicaCommand, FelicaReadRequest, decode_felica};
pub use mifare::{AuthRequest, MifareCommand, ReadRequest, decode_mifare};

use crate::constants::opcode;

/// Top-level request opcode. Per-family payload decoders live in
/// `protocol::requests::<family>.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// 0x18
    SamConfig,
    /// 0x12
    SetParameters,
    /// 0x0E
    SetGpio,
    /// 0x08
    RfOff,
    /// 0x06
    GetFirmware,
    /// 0x32
    RfConfig,
    /// 0x0C
    GetStatus,
    /// 0x4A
    Poll,
    /// 0x40
    Mifare,
    /// 0x44
    Deselect,
    /// 0xA0
    Felica,
    /// 0x52
    Release,
    /// 0x54
    Select,
    /// Anything else; answered with a bare ACK.
    Unknown(u8),
}

impl Opcode {
    /// Classify a wire opcode.
    pub fn from_u8(code: u8) -> Self {
        match code {
            opcode::SAM_CONFIG => Self::SamConfig,
            opcode::SET_PARAMETERS => Self::SetParameters,
            opcode::SET_GPIO => Self::SetGpio,
            opcode::RF_OFF => Self::RfOff,
            opcode::GET_FIRMWARE => Self::GetFirmware,
            opcode::RF_CONFIG => Self::RfConfig,
            opcode::GET_STATUS => Self::GetStatus,
            opcode::POLL => Self::Poll,
            opcode::MIFARE => Self::Mifare,
            opcode::DESELECT => Self::Deselect,
            opcode::FELICA => Self::Felica,
            opcode::RELEASE => Self::Release,
            opcode::SELECT => Self::Select,
            other => Self::Unknown(other),
        }
    }

    /// Wire value of the opcode.
    pub fn code(&self) -> u8 {
        match self {
            Self::SamConfig => opcode::SAM_CONFIG,
            Self::SetParameters => opcode::SET_PARAMETERS,
            Self::SetGpio => opcode::SET_GPIO,
            Self::RfOff => opcode::RF_OFF,
            Self::GetFirmware => opcode::GET_FIRMWARE,
            Self::RfConfig => opcode::RF_CONFIG,
            Self::GetStatus => opcode::GET_STATUS,
            Self::Poll => opcode::POLL,
            Self::Mifare => opcode::MIFARE,
            Self::Deselect => opcode::DESELECT,
            Self::Felica => opcode::FELICA,
            Self::Release => opcode::RELEASE,
            Self::Select => opcode::SELECT,
            Self::Unknown(code) => *code,
        }
    }

    /// Opcode carried by the reply to this request.
    pub fn response_code(&self) -> u8 {
        self.code().wrapping_add(1)
    }
}
