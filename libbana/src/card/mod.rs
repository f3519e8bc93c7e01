// libbana/src/card/mod.rs

//! Card abstraction consumed by the reader: whatever NFC transceiver
//! driver sits underneath implements [`CardReader`].

use crate::types::{BlockData, Idm, KeySlot, MifareKey, Pmm, ServiceCode, SystemCode, Uid};

pub mod mock;
pub use mock::{CardCall, MockCardReader};

/// Result of a detect/poll operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedCard {
    /// Nothing in the field.
    None,
    /// Type-A card.
    Mifare {
        /// 4-byte UID
        uid: Uid,
    },
    /// FeliCa card.
    Felica {
        /// Manufacture ID
        idm: Idm,
        /// Manufacture parameter
        pmm: Pmm,
        /// System code the card answered with
        system_code: SystemCode,
    },
}

impl DetectedCard {
    /// True unless [`DetectedCard::None`].
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Short human-readable identity for logs.
    pub fn describe(&self) -> String {
        match self {
            Self::None => "no card".to_string(),
            Self::Mifare { uid } => format!("mifare uid={}", uid),
            Self::Felica {
                idm, system_code, ..
            } => format!(
                "felica idm={} syscode={:04x}",
                idm,
                system_code.as_u16()
            ),
        }
    }
}

/// Transceiver capabilities the protocol engine relies on. All calls are
/// synchronous and may block on RF I/O; results are taken as
/// authoritative and never cached.
pub trait CardReader {
    /// Poll for a card of the requested families.
    fn detect(&mut self, want_mifare: bool, want_felica: bool) -> DetectedCard;

    /// Authenticate a Mifare sector with the given key slot.
    fn authenticate(&mut self, uid: &Uid, block: u8, slot: KeySlot, key: &MifareKey) -> bool;

    /// Read a 16-byte Mifare block.
    fn read_block(&mut self, block: u8) -> Option<BlockData>;

    /// Read a 16-byte FeliCa block without encryption.
    fn felica_read(&mut self, service: ServiceCode, block: u16) -> Option<BlockData>;

    /// Switch the RF field. Default implementation does nothing.
    fn set_rf_field(&mut self, _enabled: bool) {}

    /// Select the last detected card. Default implementation does nothing.
    fn select(&mut self) {}

    /// Deselect the current card. Default implementation does nothing.
    fn deselect(&mut self) {}
}

impl<T: CardReader + ?Sized> CardReader for &mut T {
    fn detect(&mut self, want_mifare: bool, want_felica: bool) -> DetectedCard {
        (**self).detect(want_mifare, want_felica)
    }

    fn authenticate(&mut self, uid: &Uid, block: u8, slot: KeySlot, key: &MifareKey) -> bool {
        (**self).authenticate(uid, block, slot, key)
    }

    fn read_block(&mut self, block: u8) -> Option<BlockData> {
        (**self).read_block(block)
    }

    fn felica_read(&mut self, service: ServiceCode, block: u16) -> Option<BlockData> {
        (**self).felica_read(service, block)
    }

    fn set_rf_field(&mut self, enabled: bool) {
        (**self).set_rf_field(enabled)
    }

    fn select(&mut self) {
        (**self).select()
    }

    fn deselect(&mut self) {
        (**self).deselect()
    }
}

impl<T: CardReader + ?Sized> CardReader for Box<T> {
    fn detect(&mut self, want_mifare: bool, want_felica: bool) -> DetectedCard {
        (**self).detect(want_mifare, want_felica)
    }

    fn authenticate(&mut self, uid: &Uid, block: u8, slot: KeySlot, key: &MifareKey) -> bool {
        (**self).authenticate(uid, block, slot, key)
    }

    fn read_block(&mut self, block: u8) -> Option<BlockData> {
        (**self).read_block(block)
    }

    fn felica_read(&mut self, service: ServiceCode, block: u16) -> Option<BlockData> {
        (**self).felica_read(service, block)
    }

    fn set_rf_field(&mut self, enabled: bool) {
        (**self).set_rf_field(enabled)
    }

    fn select(&mut self) {
        (**self).select()
    }

    fn deselect(&mut self) {
        (**self).deselect()
    }
}
