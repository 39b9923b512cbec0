//! Terminal input module (bridge-facing).
//!
//! This module is intentionally independent of rendering. It collapses raw
//! input sources (pointer, touch, the designated key) into the single
//! level-triggered signal the scheduler samples once per frame, and maps
//! `crossterm` events onto those sources. No debounce and no edge counting:
//! the signal is pure level logic over per-source held flags.

pub mod fallback;
pub mod map;
pub mod tracker;

pub use tui_dotjump_types as types;

pub use fallback::{KeyReleaseFallback, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{apply_event, is_jump_key, should_quit};
pub use tracker::InputTracker;
