//! Frame pacing: run one tick, then request the next.
//!
//! The pacer is the only part of the system that knows how "request the
//! next tick" is measured. Hosts ask it how long they may block pumping
//! input (`timeout`), whether a tick is due (`due`), and report loop-body
//! completion (`tick_complete`). Everything else is cadence-agnostic.

use std::time::{Duration, Instant};

use tui_dotjump_types::TICK_MS;

/// Environment variable selecting the cadence strategy (`fixed` | `sync`).
pub const CADENCE_ENV: &str = "DOTJUMP_CADENCE";
/// Environment variable overriding the frame interval in milliseconds.
pub const TICK_MS_ENV: &str = "DOTJUMP_TICK_MS";

/// Cadence strategy for the frame loop.
///
/// Both strategies are functionally interchangeable; they differ only in
/// timing guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Re-arm a constant delay measured from loop-body completion.
    /// Stepwise; drifts under load.
    FixedDelay { delay: Duration },
    /// Follow a fixed deadline lattice anchored at loop start, the way a
    /// repaint-driven host follows its display refresh. Missed deadlines
    /// are skipped, not replayed, so cadence does not drift with body cost.
    DisplaySync { refresh: Duration },
}

impl Cadence {
    /// Read cadence and interval from the environment, defaulting to
    /// fixed-delay at [`TICK_MS`]. Configuration is never fatal.
    pub fn from_env() -> Self {
        let interval = tick_interval_from_env();
        let cadence = match std::env::var(CADENCE_ENV) {
            Ok(value) => match value.to_lowercase().as_str() {
                "sync" | "display-sync" => Cadence::DisplaySync { refresh: interval },
                "fixed" | "fixed-delay" => Cadence::FixedDelay { delay: interval },
                other => {
                    log::warn!("unrecognized {CADENCE_ENV}={other:?}; using fixed-delay");
                    Cadence::FixedDelay { delay: interval }
                }
            },
            Err(_) => Cadence::FixedDelay { delay: interval },
        };
        log::info!("frame cadence: {cadence:?}");
        cadence
    }

    /// The configured frame interval.
    pub fn interval(&self) -> Duration {
        match *self {
            Cadence::FixedDelay { delay } => delay,
            Cadence::DisplaySync { refresh } => refresh,
        }
    }
}

/// Frame interval from the environment, defaulting to [`TICK_MS`].
pub fn tick_interval_from_env() -> Duration {
    let ms = std::env::var(TICK_MS_ENV)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|&ms| ms > 0)
        .unwrap_or(TICK_MS as u64);
    Duration::from_millis(ms)
}

/// Drives the unbounded frame loop: the host pumps input for at most
/// `timeout`, steps the engine when `due`, then reports `tick_complete`.
#[derive(Debug, Clone)]
pub struct FramePacer {
    cadence: Cadence,
    next: Instant,
}

impl FramePacer {
    /// A pacer whose first tick is due immediately.
    pub fn new(cadence: Cadence, now: Instant) -> Self {
        Self { cadence, next: now }
    }

    /// How long the host may block pumping input before the next tick.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Whether a tick is due at `now`.
    pub fn due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Report loop-body completion and arm the next deadline.
    pub fn tick_complete(&mut self, now: Instant) {
        match self.cadence {
            Cadence::FixedDelay { delay } => {
                self.next = now + delay;
            }
            Cadence::DisplaySync { refresh } => {
                self.next += refresh;
                // Skip deadlines the body already blew past; replaying them
                // would burst-step the engine.
                while self.next <= now {
                    self.next += refresh;
                }
            }
        }
    }
}
