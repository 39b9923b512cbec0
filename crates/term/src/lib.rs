//! Terminal display module.
//!
//! Renders the engine's dot-matrix output into a terminal. The layering
//! mirrors the data flow: the engine calls into a [`RenderSink`], which
//! routes cell requests through the diffed [`PixelGrid`] and score reports
//! through the undiffed [`ScoreSink`], and both draw onto a [`Surface`].
//! The real surface is [`TerminalSurface`] (crossterm); tests substitute a
//! recording one.
//!
//! Goals:
//! - Keep diffing observable and unit-testable (it is the renderer's core
//!   algorithm, not an implementation detail of terminal I/O)
//! - One buffered flush per frame
//! - No allocation on the per-frame path

pub mod grid;
pub mod palette;
pub mod score;
pub mod sink;
pub mod surface;

pub use tui_dotjump_core as core;
pub use tui_dotjump_types as types;

pub use grid::PixelGrid;
pub use palette::{color_rgb, Rgb};
pub use score::ScoreSink;
pub use sink::RenderSink;
pub use surface::{Surface, TerminalSurface};
