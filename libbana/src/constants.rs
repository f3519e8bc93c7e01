// libbana/src/constants.rs
//! Wire protocol constants for the emulated reader.

use std::time::Duration;

/// Frame preamble: 0x00 0x00 0xFF
pub const PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// Frame postamble: 0x00
pub const POSTAMBLE: u8 = 0x00;

/// Bytes a frame carries besides `{direction, opcode, payload}`:
/// preamble(3) + len(1) + lcs(1) + dcs(1) + postamble(1)
pub const FRAME_OVERHEAD: usize = 7;

/// Offset of the length byte inside a wire frame
pub const LEN_OFFSET: usize = 3;
/// Offset of the length checksum inside a wire frame
pub const LCS_OFFSET: usize = 4;
/// Offset of the direction byte inside a wire frame
pub const DIRECTION_OFFSET: usize = 5;
/// Offset of the opcode inside a wire frame
pub const OPCODE_OFFSET: usize = 6;
/// Offset of the first payload byte inside a wire frame
pub const PAYLOAD_OFFSET: usize = 7;

/// Acknowledge frame sent for traffic the reader does not understand.
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Capacity of the request accumulation buffer. A frame longer than
/// this can never complete and is dropped by the overflow reset.
pub const MAX_FRAME_LEN: usize = 128;

/// Line wake tone the host sends ahead of traffic.
pub const WAKE_TONE: u8 = 0x55;

/// Direction byte of host->device requests
pub const DIR_HOST_TO_DEVICE: u8 = 0xD4;
/// Direction byte of device->host responses
pub const DIR_DEVICE_TO_HOST: u8 = 0xD5;

/// Default inter-byte gap after which a partial frame is abandoned.
pub const DEFAULT_INTER_BYTE_TIMEOUT: Duration = Duration::from_millis(100);

/// Default time the interface stays "active" after a handled frame.
pub const DEFAULT_ACTIVITY_WINDOW: Duration = Duration::from_secs(10);

/// Top-level request opcodes
#[allow(missing_docs)]
pub mod opcode {
    pub const GET_FIRMWARE: u8 = 0x06;
    pub const RF_OFF: u8 = 0x08;
    pub const GET_STATUS: u8 = 0x0C;
    pub const SET_GPIO: u8 = 0x0E;
    pub const SET_PARAMETERS: u8 = 0x12;
    pub const SAM_CONFIG: u8 = 0x18;
    pub const RF_CONFIG: u8 = 0x32;
    pub const MIFARE: u8 = 0x40;
    pub const DESELECT: u8 = 0x44;
    pub const POLL: u8 = 0x4A;
    pub const RELEASE: u8 = 0x52;
    pub const SELECT: u8 = 0x54;
    pub const FELICA: u8 = 0xA0;
}

/// Mifare sub-opcodes (payload byte 1 of a 0x40 request)
pub mod mifare {
    /// Authenticate with key A
    pub const AUTH_KEY_A: u8 = 0x60;
    /// Authenticate with key B
    pub const AUTH_KEY_B: u8 = 0x61;
    /// Read one 16-byte block
    pub const READ_BLOCK: u8 = 0x30;

    /// Response status for a failed authentication
    pub const STATUS_AUTH_FAILED: u8 = 0x01;
    /// Response status for a failed block read
    pub const STATUS_READ_FAILED: u8 = 0x14;
}

/// FeliCa sub-commands carried by a 0xA0 request
pub mod felica {
    /// Read Without Encryption request
    pub const READ_WITHOUT_ENCRYPTION: u8 = 0x06;
    /// Read Without Encryption response code
    pub const READ_WITHOUT_ENCRYPTION_RESPONSE: u8 = 0x07;

    /// Most blocks a single read request is served for
    pub const MAX_READ_BLOCKS: usize = 4;
}

/// Capability string answered to a firmware query with payload[1] == 0x1C
pub const FIRMWARE_CAPABILITY: [u8; 8] = [0xFF, 0x3F, 0x0E, 0xF1, 0xFF, 0x3F, 0x0E, 0xF1];

/// Selector in payload[1] of a firmware query that asks for the capability string
pub const FIRMWARE_CAPABILITY_SELECTOR: u8 = 0x1C;

/// Firmware identity string answered to every other firmware query
pub const FIRMWARE_IDENTITY: [u8; 11] = [
    0xDC, 0xF4, 0x3F, 0x11, 0x4D, 0x85, 0x61, 0xF1, 0x26, 0x6A, 0x87,
];

/// Fixed status query answer
pub const STATUS_REPORT: [u8; 3] = [0x00, 0x06, 0x00];

/// Answer to release/deselect
pub const RELEASE_ACK: [u8; 2] = [0x01, 0x00];

/// Card report constants for InListPassiveTarget-style poll answers
#[allow(missing_docs)]
pub mod report {
    pub const MIFARE_ATQA: [u8; 2] = [0x00, 0x04];
    pub const MIFARE_SAK: u8 = 0x08;
    pub const MIFARE_UNKNOWN: u8 = 0x04;
    pub const FELICA_ATQA: [u8; 2] = [0x14, 0x01];
}
