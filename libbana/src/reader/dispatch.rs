// libbana/src/reader/dispatch.rs

use log::{debug, warn};

use crate::card::CardReader;
use crate::constants::{
    FIRMWARE_CAPABILITY, FIRMWARE_CAPABILITY_SELECTOR, FIRMWARE_IDENTITY, RELEASE_ACK,
    STATUS_REPORT,
};
use crate::protocol::codec;
use crate::protocol::responses::{Reply, encode_card_report};
use crate::protocol::{Opcode, RawFrame};
use crate::transport::ByteSink;
use crate::utils::Hex;

/// Handles one complete request frame: picks the behavior by opcode,
/// talks to the card reader and writes at most one reply to the sink.
pub(crate) struct Dispatcher<'a, C: ?Sized, S: ?Sized> {
    pub card: &'a mut C,
    pub sink: &'a mut S,
    pub debug: bool,
}

impl<C: CardReader + ?Sized, S: ByteSink + ?Sized> Dispatcher<'_, C, S> {
    pub fn handle(&mut self, frame: RawFrame<'_>) {
        let code = frame.opcode();
        let payload = frame.payload();
        let opcode = Opcode::from_u8(code);
        debug!(">> {:02x} {:#}", code, Hex(payload));

        let reply = match opcode {
            Opcode::SamConfig | Opcode::SetParameters => Reply::empty(),
            Opcode::SetGpio => {
                match payload.first() {
                    Some(0x08) => debug!("gpio: line 0x08"),
                    Some(0x01) => debug!("gpio: line 0x01"),
                    other => debug!("gpio: {:02x?}", other),
                }
                Reply::empty()
            }
            Opcode::RfOff => {
                self.card.set_rf_field(false);
                Reply::data(&[0x00])
            }
            Opcode::GetFirmware => {
                if payload.get(1) == Some(&FIRMWARE_CAPABILITY_SELECTOR) {
                    Reply::data(&FIRMWARE_CAPABILITY)
                } else {
                    Reply::data(&FIRMWARE_IDENTITY)
                }
            }
            Opcode::RfConfig => {
                let off = payload.starts_with(&[0x01, 0x00]);
                self.card.set_rf_field(!off);
                Reply::empty()
            }
            Opcode::GetStatus => Reply::data(&STATUS_REPORT),
            Opcode::Poll => self.poll(),
            Opcode::Mifare => super::mifare::handle(&mut *self.card, payload),
            Opcode::Deselect => {
                self.card.deselect();
                Reply::data(&RELEASE_ACK)
            }
            Opcode::Felica => super::felica::handle(&mut *self.card, payload),
            Opcode::Release => Reply::data(&RELEASE_ACK),
            Opcode::Select => Reply::data(&[0x00]),
            Opcode::Unknown(code) => {
                warn!("unknown cmd: {:02x}", code);
                Reply::Ack
            }
        };

        self.send(opcode, &reply);

        // the host sees the answer before the card is selected
        if opcode == Opcode::Select {
            self.card.select();
        }
    }

    fn poll(&mut self) -> Reply {
        let card = self.card.detect(true, true);
        if self.debug {
            debug!("poll: {}", card.describe());
        }
        Reply::Data(encode_card_report(&card))
    }

    fn send(&mut self, request: Opcode, reply: &Reply) {
        match codec::encode_reply(request, reply) {
            Ok(Some(bytes)) => {
                self.sink.put_all(&bytes);
                self.sink.flush();
                if self.debug {
                    match reply {
                        Reply::Data(payload) => debug!(
                            "<< {:02x} {:#}",
                            request.response_code(),
                            Hex(payload)
                        ),
                        _ => debug!("<< ack"),
                    }
                }
            }
            Ok(None) => {}
            Err(e) => warn!("cannot encode reply to {:02x}: {}", request.code(), e),
        }
    }
}
