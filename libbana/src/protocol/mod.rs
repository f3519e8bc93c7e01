// libbana/src/protocol/mod.rs

//! Wire protocol: framing, checksums, request decoding and reply encoding.

pub mod checksum;
pub mod codec;
pub mod frame;
pub mod parser;
pub mod requests;
pub mod responses;
pub mod sync;

pub use checksum::{dcs, frame_checksum, lcs};
pub use frame::{Frame, RawFrame};
pub use requests::{FelicaCommand, FelicaReadRequest, MifareCommand, Opcode};
pub use responses::Reply;
pub use sync::FrameSync;
