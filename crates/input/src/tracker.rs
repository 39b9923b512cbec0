//! Level-triggered input signal tracker.
//!
//! Collapses several raw input sources into one boolean: the signal is true
//! while at least one source is held and false only once every source has
//! released. Held/released is tracked per source rather than with a
//! counter, so unmatched release events cannot wedge the signal.

use tui_dotjump_types::InputSource;

/// Per-source held state behind the single input signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputTracker {
    pointer_held: bool,
    touch_held: bool,
    key_held: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A press-class event from `source`.
    ///
    /// Idempotent while the source is already held (auto-repeat, drag).
    pub fn press(&mut self, source: InputSource) {
        *self.slot(source) = true;
    }

    /// A release-class event from `source`.
    ///
    /// A release for a source that was never pressed is a no-op.
    pub fn release(&mut self, source: InputSource) {
        *self.slot(source) = false;
    }

    /// Implicit release of every source.
    ///
    /// Used when the host surface loses focus and pending release events
    /// may never be delivered.
    pub fn release_all(&mut self) {
        self.pointer_held = false;
        self.touch_held = false;
        self.key_held = false;
    }

    /// The collapsed level-triggered signal.
    pub fn signal(&self) -> bool {
        self.pointer_held || self.touch_held || self.key_held
    }

    pub fn is_held(&self, source: InputSource) -> bool {
        match source {
            InputSource::Pointer => self.pointer_held,
            InputSource::Touch => self.touch_held,
            InputSource::Key => self.key_held,
        }
    }

    fn slot(&mut self, source: InputSource) -> &mut bool {
        match source {
            InputSource::Pointer => &mut self.pointer_held,
            InputSource::Touch => &mut self.touch_held,
            InputSource::Key => &mut self.key_held,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_tracks_a_single_source() {
        let mut t = InputTracker::new();
        assert!(!t.signal());

        t.press(InputSource::Key);
        assert!(t.signal());

        t.release(InputSource::Key);
        assert!(!t.signal());
    }

    #[test]
    fn releasing_one_of_several_held_sources_keeps_the_signal() {
        let mut t = InputTracker::new();
        t.press(InputSource::Key);
        t.press(InputSource::Pointer);
        t.press(InputSource::Touch);

        t.release(InputSource::Pointer);
        assert!(t.signal());

        t.release(InputSource::Touch);
        assert!(t.signal());

        t.release(InputSource::Key);
        assert!(!t.signal());
    }

    #[test]
    fn release_without_press_is_a_no_op() {
        let mut t = InputTracker::new();
        t.release(InputSource::Pointer);
        assert!(!t.signal());

        // And it must not mask another source's held state.
        t.press(InputSource::Key);
        t.release(InputSource::Touch);
        assert!(t.signal());
    }

    #[test]
    fn repeated_press_is_idempotent() {
        let mut t = InputTracker::new();
        t.press(InputSource::Key);
        t.press(InputSource::Key);
        t.release(InputSource::Key);
        assert!(!t.signal());
    }

    #[test]
    fn release_all_clears_every_source() {
        let mut t = InputTracker::new();
        t.press(InputSource::Key);
        t.press(InputSource::Pointer);

        t.release_all();
        assert!(!t.signal());
        assert!(!t.is_held(InputSource::Key));
        assert!(!t.is_held(InputSource::Pointer));
    }
}
