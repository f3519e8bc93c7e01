// libbana/src/lib.rs

//! libbana
//!
//! Emulates the serial protocol of the Bandai Namco arcade NFC reader so
//! a microcontroller or host bridge can stand in for it, while the real
//! card I/O goes through any NFC transceiver implementing
//! [`card::CardReader`].
//!
//! ```no_run
//! use libbana::prelude::*;
//!
//! let mut reader = Reader::new(MockCardReader::new(), Vec::<u8>::new());
//! for b in [0x00, 0x00, 0xFF, 0x02, 0xFE, 0xD4, 0x0C, 0x20, 0x00] {
//!     reader.feed(b);
//! }
//! assert!(reader.is_active());
//! ```
#![warn(missing_docs)]

pub mod activity;
pub mod card;
pub mod config;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod reader;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
