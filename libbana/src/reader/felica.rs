// libbana/src/reader/felica.rs

use log::{debug, warn};

use crate::card::CardReader;
use crate::protocol::requests::{FelicaCommand, FelicaReadRequest, decode_felica};
use crate::protocol::responses::{Reply, encode_felica_read};
use crate::types::BlockData;

/// Serve a 0xA0 request. Anything but Read Without Encryption goes
/// unanswered.
pub(crate) fn handle<C: CardReader + ?Sized>(card: &mut C, payload: &[u8]) -> Reply {
    match decode_felica(payload) {
        Ok(FelicaCommand::ReadWithoutEncryption(req)) => read(card, &req),
        Ok(FelicaCommand::Unknown { cmd, len }) => {
            warn!("bad felica cmd: {:02x} {}", cmd, len);
            Reply::Silent
        }
        Err(e) => {
            warn!("malformed felica request: {}", e);
            Reply::Silent
        }
    }
}

fn read<C: CardReader + ?Sized>(card: &mut C, req: &FelicaReadRequest) -> Reply {
    // A failed block keeps an all-zero slot; the host gets no error flag.
    let blocks: Vec<BlockData> = req
        .blocks
        .iter()
        .map(|&block| {
            debug!("felica read [{:04x} {:04x}]", req.service.as_u16(), block);
            card.felica_read(req.service, block).unwrap_or_else(|| {
                debug!("felica read [{:04x} {:04x}]: ERR", req.service.as_u16(), block);
                BlockData::EMPTY
            })
        })
        .collect();

    Reply::Data(encode_felica_read(&req.idm, &blocks))
}
