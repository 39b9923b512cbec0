//! Engine state layout inside the opaque region.
//!
//! The entire simulation state is one `repr(C)` plain-old-data struct so it
//! can live in the untyped byte region the bridge owns. Every field is
//! 4-byte sized and the screen array is a multiple of 4, so the layout is
//! padding-free and `bytemuck`-viewable.

use bytemuck::{Pod, Zeroable};
use tui_dotjump_types::PIXEL_COUNT;

/// Title screen with scrolling text.
pub const PHASE_TITLE: u32 = 0;
/// Active run.
pub const PHASE_PLAYING: u32 = 1;
/// Game-over screen with final score.
pub const PHASE_GAME_OVER: u32 = 2;

/// Obstacles alive at once.
pub const MAX_OBSTACLES: usize = 2;

/// One scrolling obstacle column pair with a gap.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Obstacle {
    pub x: f32,
    pub gap_y: i32,
    pub gap_size: i32,
    /// 0 until the player has passed this obstacle and been awarded a point.
    pub scored: u32,
}

/// Complete engine state.
///
/// `screen` holds one color code per cell, row-major. The remaining fields
/// drive the phase machine and physics.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct GameState {
    pub screen: [u8; PIXEL_COUNT],
    pub phase: u32,
    pub score: u32,
    pub frame_count: u32,
    pub player_x: i32,
    pub player_y: f32,
    pub player_velocity_y: f32,
    pub text_scroll_offset: f32,
    pub rng_state: u32,
    pub obstacles: [Obstacle; MAX_OBSTACLES],
}

/// Size in bytes the engine requires the opaque state region to hold.
///
/// The bridge allocates at least this much (it uses the generously sized
/// out-of-band constant) before the first `init_game` call.
pub fn state_size() -> usize {
    core::mem::size_of::<GameState>()
}

/// View the opaque region as engine state.
///
/// # Panics
///
/// Panics if the region is shorter than [`state_size`] or not 4-byte
/// aligned. Both are handshake contract violations by the host; the bridge
/// allocates an aligned region of the agreed size before any call lands
/// here.
pub(crate) fn view(region: &mut [u8]) -> &mut GameState {
    let size = state_size();
    bytemuck::from_bytes_mut(&mut region[..size])
}
