//! Glue between the engine's callback capability and the display parts.

use crate::grid::PixelGrid;
use crate::score::ScoreSink;
use crate::surface::Surface;
use tui_dotjump_core::FrameSink;

/// The [`FrameSink`] implementation handed to the engine.
///
/// Routes cell requests through the diffed grid and score reports through
/// the undiffed score sink, all against one display surface. Borrows its
/// parts for the duration of a single `initialize`/`step` call; the host
/// owns them across frames.
pub struct RenderSink<'a> {
    grid: &'a mut PixelGrid,
    score: &'a mut ScoreSink,
    surface: &'a mut dyn Surface,
}

impl<'a> RenderSink<'a> {
    pub fn new(
        grid: &'a mut PixelGrid,
        score: &'a mut ScoreSink,
        surface: &'a mut dyn Surface,
    ) -> Self {
        Self {
            grid,
            score,
            surface,
        }
    }
}

impl FrameSink for RenderSink<'_> {
    fn set_cell(&mut self, x: i32, y: i32, color: u8) {
        self.grid.set_cell(x, y, color, &mut *self.surface);
    }

    fn set_score(&mut self, value: u32) {
        self.score.set_score(value, &mut *self.surface);
    }
}
