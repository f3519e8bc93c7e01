// libbana/src/transport/traits.rs

//! The [`ByteSink`] trait.

/// Byte output toward the host. The reader writes each response frame
/// through `put`, in order, then calls `flush` once per frame.
///
/// Implementations run on the caller's stack and must not block
/// indefinitely.
pub trait ByteSink {
    /// Emit a single byte
    fn put(&mut self, byte: u8);

    /// Emit a run of bytes. Default implementation forwards to `put`.
    fn put_all(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.put(b);
        }
    }

    /// Called after each complete frame. Default implementation does nothing.
    fn flush(&mut self) {}
}

impl ByteSink for Vec<u8> {
    fn put(&mut self, byte: u8) {
        self.push(byte);
    }

    fn put_all(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn put(&mut self, byte: u8) {
        (**self).put(byte)
    }

    fn put_all(&mut self, bytes: &[u8]) {
        (**self).put_all(bytes)
    }

    fn flush(&mut self) {
        (**self).flush()
    }
}

impl<S: ByteSink + ?Sized> ByteSink for Box<S> {
    fn put(&mut self, byte: u8) {
        (**self).put(byte)
    }

    fn put_all(&mut self, bytes: &[u8]) {
        (**self).put_all(bytes)
    }

    fn flush(&mut self) {
        (**self).flush()
    }
}
