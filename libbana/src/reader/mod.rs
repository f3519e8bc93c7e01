// libbana/src/reader/mod.rs

//! The protocol engine and its builder.

pub mod builder;
mod dispatch;
mod felica;
pub mod handle;
mod mifare;

pub use builder::ReaderBuilder;
pub use handle::Reader;
