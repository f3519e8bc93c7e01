// libbana/src/transport/mock.rs

//! Recording sink for tests.

use crate::transport::traits::ByteSink;

/// Mock sink for unit tests. Records the raw byte stream and splits it
/// into frames at each `flush`.
#[derive(Debug, Default, Clone)]
pub struct MockSink {
    /// Every byte written.
    pub bytes: Vec<u8>,
    /// Bytes grouped per flushed frame.
    pub frames: Vec<Vec<u8>>,
    current: Vec<u8>,
}

impl MockSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently completed frame
    pub fn last_frame(&self) -> Option<&[u8]> {
        self.frames.last().map(|f| f.as_slice())
    }

    /// Drain the recorded frames and bytes.
    pub fn take_frames(&mut self) -> Vec<Vec<u8>> {
        self.bytes.clear();
        std::mem::take(&mut self.frames)
    }
}

impl ByteSink for MockSink {
    fn put(&mut self, byte: u8) {
        self.bytes.push(byte);
        self.current.push(byte);
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.frames.push(std::mem::take(&mut self.current));
        }
    }
}
