//! The callback capability the engine renders through.

/// Host-provided display capability.
///
/// The bridge passes an implementation into [`crate::init_game`] and every
/// [`crate::update_game`] call; the engine invokes it synchronously, zero or
/// more times per step, before returning. The engine pushes the full frame
/// every step and leaves change detection to the host's renderer.
pub trait FrameSink {
    /// Request cell `(x, y)` to show `color`.
    ///
    /// Coordinates may be out of range when the simulation runs partially
    /// off-grid; the host drops those silently.
    fn set_cell(&mut self, x: i32, y: i32, color: u8);

    /// Report the current score for display.
    fn set_score(&mut self, value: u32);
}
