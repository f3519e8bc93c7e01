// libbana/src/protocol/responses/polling.rs

//! Card report for the 0x4A poll.

use crate::card::DetectedCard;
use crate::constants::report;

/// Encode the poll (0x4A) answer. At most one card is reported.
///
/// - no card: `00 00 00`
/// - Mifare: present(1) + count(1) + atqa(2) + sak(1) + unknown(1) + uid(4)
/// - FeliCa: present(1) + count(1) + atqa(2) + idm(8) + pmm(8) + system_code(2)
pub fn encode_card_report(card: &DetectedCard) -> Vec<u8> {
    match card {
        DetectedCard::None => vec![0x00, 0x00, 0x00],
        DetectedCard::Mifare { uid } => {
            let mut out = Vec::with_capacity(10);
            out.extend_from_slice(&[0x01, 0x01]);
            out.extend_from_slice(&report::MIFARE_ATQA);
            out.push(report::MIFARE_SAK);
            out.push(report::MIFARE_UNKNOWN);
            out.extend_from_slice(uid.as_bytes());
            out
        }
        DetectedCard::Felica {
            idm,
            pmm,
            system_code,
        } => {
            let mut out = Vec::with_capacity(22);
            out.extend_from_slice(&[0x01, 0x01]);
            out.extend_from_slice(&report::FELICA_ATQA);
            out.extend_from_slice(idm.as_bytes());
            out.extend_from_slice(pmm.as_bytes());
            out.extend_from_slice(system_code.as_bytes());
            out
        }
    }
}
