// libbana/src/protocol/codec.rs

//! Reply encoding.

use crate::constants::{ACK_FRAME, DIR_DEVICE_TO_HOST};
use crate::Result;

use super::Frame;
use super::requests::Opcode;
use super::responses::Reply;

/// Encode a response payload into a full device->host wire frame
/// answering `request`.
pub fn encode_response_frame(request: Opcode, payload: &[u8]) -> Result<Vec<u8>> {
    Frame::new(DIR_DEVICE_TO_HOST, request.response_code(), payload).encode()
}

/// Encode a reply into the bytes to send; `None` for a silent reply.
pub fn encode_reply(request: Opcode, reply: &Reply) -> Result<Option<Vec<u8>>> {
    match reply {
        Reply::Data(payload) => encode_response_frame(request, payload).map(Some),
        Reply::Ack => Ok(Some(ACK_FRAME.to_vec())),
        Reply::Silent => Ok(None),
    }
}
