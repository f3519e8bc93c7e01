// libbana/src/types.rs

//! Strongly typed card identifiers, keys and blocks.

use std::fmt;

use derive_more::From;

use crate::Error;
use crate::utils::Hex;

/// Fixed-size identifier or data block carried verbatim on the wire.
macro_rules! byte_array_newtype {
    ($(#[$meta:meta])* $name:ident, $n:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
        pub struct $name([u8; $n]);

        impl $name {
            /// Wrap raw bytes.
            pub const fn from_bytes(bytes: [u8; $n]) -> Self {
                Self(bytes)
            }

            /// Raw bytes, in wire order.
            pub fn as_bytes(&self) -> &[u8; $n] {
                &self.0
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = Error;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                <[u8; $n]>::try_from(bytes)
                    .map(Self)
                    .map_err(|_| Error::InvalidLength {
                        expected: $n,
                        actual: bytes.len(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&Hex(&self.0), f)
            }
        }
    };
}

byte_array_newtype!(
    /// Type-A card UID as reported by the poll.
    Uid,
    4
);
byte_array_newtype!(
    /// FeliCa manufacture ID.
    Idm,
    8
);
byte_array_newtype!(
    /// FeliCa manufacture parameter.
    Pmm,
    8
);
byte_array_newtype!(
    /// One 16-byte card block, Mifare or FeliCa.
    BlockData,
    16
);
byte_array_newtype!(
    /// Mifare sector key.
    MifareKey,
    6
);

impl BlockData {
    /// Slot content sent back for a block the card failed to read.
    pub const EMPTY: Self = Self([0u8; 16]);
}

/// FeliCa system code, kept in the byte order the card reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemCode([u8; 2]);

impl SystemCode {
    /// Wrap the two bytes as reported by the card.
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// Raw bytes, in card order.
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// Numeric value, reading the bytes big-endian.
    pub fn as_u16(&self) -> u16 {
        u16::from_be_bytes(self.0)
    }
}

/// FeliCa service code. The host sends it little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
pub struct ServiceCode(u16);

impl ServiceCode {
    /// Wrap a numeric service code.
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Decode the little-endian wire form.
    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    /// Numeric value.
    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

/// Mifare key slot selected by the auth sub-opcode. `slot as u8` is the
/// key index the transceiver expects.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySlot {
    /// Sub-opcode 0x60.
    A = 0,
    /// Sub-opcode 0x61.
    B = 1,
}
