//! Engine bridge module.
//!
//! The control side of the system: owns the opaque engine state region,
//! performs the one-time allocate+initialize handshake, steps the engine
//! once per frame with the sampled input signal, and paces the frame loop.
//!
//! The handshake is deliberately rigid:
//!
//! 1. [`EngineBridge::new`] allocates the fixed-size region. Failure is
//!    fatal to startup and the loop never starts.
//! 2. [`EngineBridge::initialize`] runs exactly once and performs the
//!    engine's first render pass, so the display is populated before the
//!    loop becomes visible.
//! 3. [`EngineBridge::step`] runs once per [`FramePacer`] tick, forwarding
//!    the engine's synchronous render/score callbacks to the host's sink.
//!
//! Cadence (fixed-delay vs display-sync) is configuration; see
//! [`Cadence::from_env`].

pub mod bridge;
pub mod handle;
pub mod scheduler;

pub use tui_dotjump_core as core;
pub use tui_dotjump_types as types;

pub use bridge::EngineBridge;
pub use handle::EngineHandle;
pub use scheduler::{tick_interval_from_env, Cadence, FramePacer, CADENCE_ENV, TICK_MS_ENV};
