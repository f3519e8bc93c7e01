// libbana/src/transport/sink.rs

//! Ready-made byte sinks.

use std::io::Write;

use log::warn;

use crate::transport::traits::ByteSink;

/// Discards everything. Stands in until a real output is wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ByteSink for NullSink {
    fn put(&mut self, _byte: u8) {}
}

/// Adapts a per-byte callback, e.g. a UART `putc`.
pub struct FnSink<F>(pub F);

impl<F: FnMut(u8)> ByteSink for FnSink<F> {
    fn put(&mut self, byte: u8) {
        (self.0)(byte)
    }
}

/// Writes frames to any `std::io::Write` (serial port, pipe, socket).
/// The sink contract is infallible, so I/O errors are logged and the
/// rest of the frame is dropped.
#[derive(Debug)]
pub struct IoSink<W: Write> {
    inner: W,
    failed: bool,
}

impl<W: Write> IoSink<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            failed: false,
        }
    }

    /// The wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn check(&mut self, res: std::io::Result<()>) {
        if let Err(e) = res {
            if !self.failed {
                warn!("byte sink write failed: {}", crate::Error::from(e));
            }
            self.failed = true;
        }
    }
}

impl<W: Write> ByteSink for IoSink<W> {
    fn put(&mut self, byte: u8) {
        self.put_all(&[byte]);
    }

    fn put_all(&mut self, bytes: &[u8]) {
        if self.failed {
            return;
        }
        let res = self.inner.write_all(bytes);
        self.check(res);
    }

    fn flush(&mut self) {
        if !self.failed {
            let res = self.inner.flush();
            self.check(res);
        }
        // next frame gets a fresh attempt
        self.failed = false;
    }
}
