//! Formatting helpers for log output.

pub mod hex;

pub use hex::Hex;
