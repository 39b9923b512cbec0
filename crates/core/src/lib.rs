//! Engine module - pure, deterministic, and opaque to the host
//!
//! This crate is the simulation side of the system. It owns every game
//! rule, every pixel color decision and the score; the host sees none of
//! that directly. The contract is deliberately narrow:
//!
//! - The engine's entire state lives in an **opaque byte region** the host
//!   allocates once and passes into every call ([`state_size`] declares the
//!   minimum size; the host's agreed constant is larger).
//! - The engine renders by invoking the host's [`FrameSink`] capability
//!   (`set_cell`, `set_score`) synchronously from inside [`init_game`] and
//!   [`update_game`]; it never touches a display itself.
//! - Input arrives as a single level-triggered boolean per step.
//!
//! There is no I/O, no clock and no allocation here, which keeps the crate
//! deterministic: the same input sequence over a fresh region produces the
//! same callback sequence, every time.
//!
//! # Module Structure
//!
//! - [`state`]: the `repr(C)` plain-old-data state struct and region view
//! - [`logic`]: phase machine, physics, drawing, scoring
//! - [`font`]: 5x5 bitmap font for on-grid text
//! - [`rng`]: LCG over the rng word embedded in the state
//! - [`sink`]: the [`FrameSink`] callback capability

pub mod font;
pub mod logic;
pub mod rng;
pub mod sink;
pub mod state;

pub use logic::{init_game, state_size, update_game};
pub use sink::FrameSink;
pub use state::{GameState, Obstacle, PHASE_GAME_OVER, PHASE_PLAYING, PHASE_TITLE};
