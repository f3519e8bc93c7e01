// libbana/src/config.rs

//! Per-reader settings.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reader tuning knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReaderConfig {
    /// A gap longer than this between two bytes abandons the partial frame.
    pub inter_byte_timeout: Duration,
    /// How long the interface counts as active after a handled frame.
    pub activity_window: Duration,
    /// Dump polled cards and every response at `debug` level.
    pub debug: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            inter_byte_timeout: crate::constants::DEFAULT_INTER_BYTE_TIMEOUT,
            activity_window: crate::constants::DEFAULT_ACTIVITY_WINDOW,
            debug: false,
        }
    }
}
