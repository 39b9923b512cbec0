//! The allocate/initialize/step handshake with the engine.

use anyhow::Result;

use crate::handle::EngineHandle;
use tui_dotjump_core::{self as core, FrameSink};
use tui_dotjump_types::STATE_REGION_BYTES;

/// Owns the engine handle and drives the three-operation ABI.
///
/// Construction allocates; a failed allocation is fatal to startup and the
/// caller must not start the frame loop (the type makes that structural:
/// without a bridge value there is nothing to step). `initialize` runs
/// exactly once and performs the engine's first render pass; `step` runs
/// once per scheduled frame.
pub struct EngineBridge {
    handle: EngineHandle,
    initialized: bool,
}

impl EngineBridge {
    /// Allocate the engine state region at the agreed size.
    pub fn new() -> Result<Self> {
        Self::with_region_bytes(STATE_REGION_BYTES)
    }

    /// Allocate with an explicit region size (tests exercise failure).
    pub fn with_region_bytes(bytes: usize) -> Result<Self> {
        let handle = EngineHandle::allocate(bytes)?;
        log::info!(
            "engine state region allocated: {} bytes (engine declares {})",
            handle.size_bytes(),
            core::state_size(),
        );
        Ok(Self {
            handle,
            initialized: false,
        })
    }

    /// One-time engine initialization; renders the first frame through
    /// `sink`. A second call is ignored.
    pub fn initialize(&mut self, sink: &mut dyn FrameSink) {
        if self.initialized {
            log::warn!("engine initialize called twice; ignoring");
            return;
        }
        core::init_game(self.handle.region_mut(), sink);
        self.initialized = true;
    }

    /// Advance the engine one frame with the sampled input signal.
    pub fn step(&mut self, signal: bool, sink: &mut dyn FrameSink) {
        debug_assert!(self.initialized, "step before initialize");
        core::update_game(self.handle.region_mut(), signal, sink);
    }

    /// Size of the allocated region in bytes.
    pub fn region_bytes(&self) -> usize {
        self.handle.size_bytes()
    }
}
