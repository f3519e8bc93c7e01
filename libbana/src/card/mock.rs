// libbana/src/card/mock.rs

//! In-memory card reader for tests.

use std::collections::HashMap;

use crate::card::{CardReader, DetectedCard};
use crate::types::{BlockData, KeySlot, MifareKey, ServiceCode, Uid};

/// Calls recorded by [`MockCardReader`], in order. Each variant mirrors
/// the [`CardReader`] method of the same name and its arguments.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardCall {
    Detect { mifare: bool, felica: bool },
    Authenticate { uid: Uid, block: u8, slot: KeySlot, key: MifareKey },
    ReadBlock(u8),
    FelicaRead { service: ServiceCode, block: u16 },
    RfField(bool),
    Select,
    Deselect,
}

/// Mock card reader for unit tests. It serves a configured card and
/// block contents and records every call.
#[derive(Debug)]
pub struct MockCardReader {
    /// Card answered to `detect`.
    pub card: DetectedCard,
    /// Key accepted by `authenticate`; `None` accepts any key.
    pub accepted_key: Option<MifareKey>,
    /// Forced to `false` to fail every authentication.
    pub auth_result: bool,
    /// Mifare blocks by number.
    pub mifare_blocks: HashMap<u8, BlockData>,
    /// FeliCa blocks by (service, block).
    pub felica_blocks: HashMap<(u16, u16), BlockData>,
    /// Every call made so far.
    pub calls: Vec<CardCall>,
    /// Last RF field state set, initially on.
    pub rf_field: bool,
}

impl MockCardReader {
    /// Reader with no card in the field.
    pub fn new() -> Self {
        Self {
            card: DetectedCard::None,
            accepted_key: None,
            auth_result: true,
            mifare_blocks: HashMap::new(),
            felica_blocks: HashMap::new(),
            calls: Vec::new(),
            rf_field: true,
        }
    }

    /// Replace the card in the field.
    pub fn set_card(&mut self, card: DetectedCard) {
        self.card = card;
    }

    /// Store a Mifare block.
    pub fn put_mifare_block(&mut self, block: u8, data: BlockData) {
        self.mifare_blocks.insert(block, data);
    }

    /// Store a FeliCa block.
    pub fn put_felica_block(&mut self, service: u16, block: u16, data: BlockData) {
        self.felica_blocks.insert((service, block), data);
    }

    /// Drain the recorded calls.
    pub fn take_calls(&mut self) -> Vec<CardCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Default for MockCardReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CardReader for MockCardReader {
    fn detect(&mut self, want_mifare: bool, want_felica: bool) -> DetectedCard {
        self.calls.push(CardCall::Detect {
            mifare: want_mifare,
            felica: want_felica,
        });
        match self.card {
            DetectedCard::Mifare { .. } if !want_mifare => DetectedCard::None,
            DetectedCard::Felica { .. } if !want_felica => DetectedCard::None,
            card => card,
        }
    }

    fn authenticate(&mut self, uid: &Uid, block: u8, slot: KeySlot, key: &MifareKey) -> bool {
        self.calls.push(CardCall::Authenticate {
            uid: *uid,
            block,
            slot,
            key: *key,
        });
        let present = matches!(self.card, DetectedCard::Mifare { uid: u } if u == *uid);
        let key_ok = self.accepted_key.map_or(true, |k| k == *key);
        present && key_ok && self.auth_result
    }

    fn read_block(&mut self, block: u8) -> Option<BlockData> {
        self.calls.push(CardCall::ReadBlock(block));
        if !matches!(self.card, DetectedCard::Mifare { .. }) {
            return None;
        }
        self.mifare_blocks.get(&block).copied()
    }

    fn felica_read(&mut self, service: ServiceCode, block: u16) -> Option<BlockData> {
        self.calls.push(CardCall::FelicaRead { service, block });
        if !matches!(self.card, DetectedCard::Felica { .. }) {
            return None;
        }
        self.felica_blocks.get(&(service.as_u16(), block)).copied()
    }

    fn set_rf_field(&mut self, enabled: bool) {
        self.calls.push(CardCall::RfField(enabled));
        self.rf_field = enabled;
    }

    fn select(&mut self) {
        self.calls.push(CardCall::Select);
    }

    fn deselect(&mut self) {
        self.calls.push(CardCall::Deselect);
    }
}
