// libbana/src/protocol/sync.rs

//! Byte-at-a-time frame synchronizer for inbound host traffic.

use std::time::{Duration, Instant};

use log::trace;

use crate::constants::{FRAME_OVERHEAD, LEN_OFFSET, MAX_FRAME_LEN, PREAMBLE, WAKE_TONE};
use crate::protocol::frame::RawFrame;

/// Accumulates raw bytes until a complete request frame is available.
///
/// Only the preamble and the length byte drive framing. Checksums are
/// not verified; a frame with a good length but a corrupt body is still
/// handed out.
#[derive(Debug, Clone)]
pub struct FrameSync {
    buf: [u8; MAX_FRAME_LEN],
    count: usize,
    last_byte: Option<Instant>,
    inter_byte_timeout: Duration,
}

impl FrameSync {
    /// Empty synchronizer that abandons a partial frame after a gap
    /// longer than `inter_byte_timeout`.
    pub fn new(inter_byte_timeout: Duration) -> Self {
        Self {
            buf: [0u8; MAX_FRAME_LEN],
            count: 0,
            last_byte: None,
            inter_byte_timeout,
        }
    }

    /// Number of bytes accumulated for the in-flight frame.
    pub fn pending(&self) -> usize {
        self.count
    }

    /// Abandon any partial frame.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Accept one byte received at `now`. Returns the completed frame
    /// when this byte finishes one; the accumulator is already reset by
    /// then, so the view stays valid until the next `push`.
    pub fn push(&mut self, byte: u8, now: Instant) -> Option<RawFrame<'_>> {
        #[cfg(feature = "diagnostics")]
        trace!("rx {:02x} (pending {})", byte, self.count);

        if self.count == MAX_FRAME_LEN {
            trace!("frame buffer full, dropping {} bytes", self.count);
            self.count = 0;
        } else if let Some(prev) = self.last_byte {
            if self.count > 0 && now.saturating_duration_since(prev) > self.inter_byte_timeout {
                trace!("stale partial frame, dropping {} bytes", self.count);
                self.count = 0;
            }
        }
        self.last_byte = Some(now);

        self.buf[self.count] = byte;
        self.count += 1;

        if self.count == 1 && self.buf[0] == WAKE_TONE {
            trace!("wake tone");
            self.count = 0;
        }

        if self.count == 3 && self.buf[..3] != PREAMBLE {
            trace!("no preamble, skipping {:02x}", self.buf[0]);
            self.buf.copy_within(1..3, 0);
            self.count = 2;
        }

        if self.count == 6 && self.buf[LEN_OFFSET] == 0 {
            trace!("zero-length frame dropped");
            self.count = 0;
            return None;
        }

        if self.count > LEN_OFFSET
            && self.count == FRAME_OVERHEAD + self.buf[LEN_OFFSET] as usize
        {
            let total = self.count;
            self.count = 0;
            return RawFrame::new(&self.buf[..total]).ok();
        }

        None
    }
}

impl Default for FrameSync {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_INTER_BYTE_TIMEOUT)
    }
}
