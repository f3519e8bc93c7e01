// libbana/src/transport/mod.rs

//! Byte output toward the host.

pub mod mock;
pub mod sink;
pub mod traits;

pub use mock::MockSink;
pub use sink::{FnSink, IoSink, NullSink};
pub use traits::ByteSink;
