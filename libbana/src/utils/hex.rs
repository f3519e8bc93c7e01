//! Hex formatting for log lines.

use std::fmt;

/// Formats a byte slice as lowercase hex when displayed. `{}` prints
/// `dead`, the alternate form `{:#}` prints `de ad`. Nothing is
/// allocated unless the log line is actually written.
#[derive(Clone, Copy)]
pub struct Hex<'a>(pub &'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spaced = f.alternate();
        for (i, b) in self.0.iter().enumerate() {
            if spaced && i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:#}]", self)
    }
}
