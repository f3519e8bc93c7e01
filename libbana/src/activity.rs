// libbana/src/activity.rs

//! Tracks whether the host is currently talking to this reader.

use std::time::{Duration, Instant};

/// Activity state: an expiry instant refreshed on every handled frame
/// plus the indicator color exposed to display logic.
#[derive(Debug, Clone)]
pub struct Activity {
    window: Duration,
    expires_at: Option<Instant>,
    led_color: u32,
}

impl Activity {
    /// Idle tracker that stays active for `window` after each frame.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            expires_at: None,
            led_color: 0,
        }
    }

    /// Record a handled frame at `now`.
    pub fn touch(&mut self, now: Instant) {
        self.expires_at = now.checked_add(self.window);
    }

    /// True while `now` is before the expiry instant.
    pub fn is_active(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|t| now < t)
    }

    /// Instant the interface goes idle; `None` before the first frame.
    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }

    /// Indicator color as 0xRRGGBB. Nothing in the protocol sets it, so
    /// it stays 0.
    pub fn led_color(&self) -> u32 {
        self.led_color
    }
}

impl Default for Activity {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_ACTIVITY_WINDOW)
    }
}
