//! Key release fallback for terminals without key-release events.
//!
//! Most terminals only report key presses (and auto-repeats while held).
//! Without release events the Key source would stay held forever after one
//! tap, so hosts that cannot enable keyboard enhancement arm this fallback:
//! it synthesizes a release once no press-class key event has been seen for
//! a short window. Auto-repeat keeps re-arming the window, so a genuinely
//! held key still reads as held.

use std::time::{Duration, Instant};

/// Quiet period after which the key is considered released. Long enough to
/// outlast typical auto-repeat gaps.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

#[derive(Debug, Clone)]
pub struct KeyReleaseFallback {
    timeout: Duration,
    last_press: Option<Instant>,
}

impl KeyReleaseFallback {
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            timeout: Duration::from_millis(timeout_ms),
            last_press: None,
        }
    }

    /// Record a press-class key event at `now`.
    pub fn note_press(&mut self, now: Instant) {
        self.last_press = Some(now);
    }

    /// Poll the fallback; returns true exactly once per quiet period, when
    /// the host should synthesize a key release.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_press {
            Some(last) if now.duration_since(last) >= self.timeout => {
                self.last_press = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for KeyReleaseFallback {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_RELEASE_TIMEOUT_MS)
    }
}
