//! Shared types module - constants and plain data for the dot-matrix bridge
//!
//! This crate defines the fundamental constants used throughout the
//! application. Everything here is pure data with no external dependencies,
//! so it is usable in any context (engine logic, terminal rendering, tests).
//!
//! # Display Dimensions
//!
//! The display is a fixed dot-matrix grid, never resized or reordered:
//!
//! - **Width**: 16 columns (indexed 0-15)
//! - **Height**: 16 rows (indexed 0-15)
//! - **Cells**: 256, addressed row-major by `(x, y)`
//!
//! # Engine ABI Constants
//!
//! The engine keeps its entire state inside one opaque memory region owned
//! by the bridge. The region size is agreed out of band:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `STATE_REGION_BYTES` | 320 | Opaque engine state region (256 screen bytes + headroom) |
//! | `TICK_MS` | 25 | Default frame interval (~40 FPS) |
//!
//! # Color Codes
//!
//! Cell colors are small integer codes chosen by the engine:
//! 0 Black, 1 Red, 2 Green, 3 Yellow, 4 Blue, 5 Magenta, 6 Cyan, 7 White.

/// Display width in cells (16 columns).
pub const SCREEN_WIDTH: i32 = 16;

/// Display height in cells (16 rows).
pub const SCREEN_HEIGHT: i32 = 16;

/// Total cell count (16x16), row-major.
pub const PIXEL_COUNT: usize = (SCREEN_WIDTH * SCREEN_HEIGHT) as usize;

/// Size of the opaque engine state region in bytes.
///
/// Agreed with the engine out of band; must be at least the engine's
/// declared state size. 256 bytes of screen plus headroom for the rest.
pub const STATE_REGION_BYTES: usize = 320;

/// Default frame interval in milliseconds.
pub const TICK_MS: u32 = 25;

/// Color code palette (engine-chosen cell values).
pub const COLOR_BLACK: u8 = 0;
pub const COLOR_RED: u8 = 1;
pub const COLOR_GREEN: u8 = 2;
pub const COLOR_YELLOW: u8 = 3;
pub const COLOR_BLUE: u8 = 4;
pub const COLOR_MAGENTA: u8 = 5;
pub const COLOR_CYAN: u8 = 6;
pub const COLOR_WHITE: u8 = 7;

/// Number of colors in the palette.
pub const COLOR_COUNT: u8 = 8;

/// A raw input source contributing to the single level-triggered signal.
///
/// Sources are tracked independently: the signal stays true while at least
/// one source is held, so releasing one of several held sources does not
/// drop it. Terminal hosts report touch input as pointer events, but the
/// classes stay distinct so hosts that do distinguish them cannot
/// cross-release each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Pointer,
    Touch,
    Key,
}

impl InputSource {
    /// Convert to a lowercase string (for diagnostics).
    pub fn as_str(&self) -> &'static str {
        match self {
            InputSource::Pointer => "pointer",
            InputSource::Touch => "touch",
            InputSource::Key => "key",
        }
    }
}
