// libbana/src/prelude.rs

//! Commonly used types, for glob import.

pub use crate::activity::Activity;
pub use crate::card::{CardReader, DetectedCard, MockCardReader};
pub use crate::config::ReaderConfig;
pub use crate::protocol::{Frame, FrameSync, Opcode, RawFrame, Reply};
pub use crate::reader::{Reader, ReaderBuilder};
pub use crate::transport::{ByteSink, FnSink, IoSink, MockSink, NullSink};
pub use crate::utils::Hex;
pub use crate::{
    BlockData, Error, Idm, KeySlot, MifareKey, Pmm, Result, ServiceCode, SystemCode, Uid,
};
