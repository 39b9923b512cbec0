//! Mapping from terminal events to tracker transitions.
//!
//! The designated key is Space, matching the action button. Raw mode means
//! there is no host default behavior (scrolling and the like) to cancel for
//! it. Focus loss is treated as an implicit release of every source: once
//! focus is gone the terminal may drop the matching release events, and a
//! stuck-true signal is exactly the failure the implicit release exists to
//! prevent.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use crate::tracker::InputTracker;
use tui_dotjump_types::InputSource;

/// The key that acts as the jump button.
pub fn is_jump_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char(' '))
}

/// Feed one terminal event into the tracker.
///
/// Returns the source the event touched, or `None` when the event does not
/// participate in the input signal. Focus loss reports `None` as well but
/// releases every source.
pub fn apply_event(tracker: &mut InputTracker, event: &Event) -> Option<InputSource> {
    match event {
        Event::Key(key) if is_jump_key(key.code) => match key.kind {
            // Auto-repeat while held is still a press-class event.
            KeyEventKind::Press | KeyEventKind::Repeat => {
                tracker.press(InputSource::Key);
                Some(InputSource::Key)
            }
            KeyEventKind::Release => {
                tracker.release(InputSource::Key);
                Some(InputSource::Key)
            }
        },
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                tracker.press(InputSource::Pointer);
                Some(InputSource::Pointer)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                tracker.release(InputSource::Pointer);
                Some(InputSource::Pointer)
            }
            _ => None,
        },
        Event::FocusLost => {
            tracker.release_all();
            None
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn space_press_and_release_drive_the_key_source() {
        let mut t = InputTracker::new();

        let src = apply_event(&mut t, &key(KeyCode::Char(' '), KeyEventKind::Press));
        assert_eq!(src, Some(InputSource::Key));
        assert!(t.signal());

        apply_event(&mut t, &key(KeyCode::Char(' '), KeyEventKind::Release));
        assert!(!t.signal());
    }

    #[test]
    fn other_keys_do_not_touch_the_signal() {
        let mut t = InputTracker::new();
        assert_eq!(
            apply_event(&mut t, &key(KeyCode::Char('x'), KeyEventKind::Press)),
            None
        );
        assert!(!t.signal());
    }

    #[test]
    fn left_mouse_button_drives_the_pointer_source() {
        let mut t = InputTracker::new();

        apply_event(&mut t, &mouse(MouseEventKind::Down(MouseButton::Left)));
        assert!(t.signal());

        // Dragging while held does not release.
        apply_event(&mut t, &mouse(MouseEventKind::Drag(MouseButton::Left)));
        assert!(t.signal());

        apply_event(&mut t, &mouse(MouseEventKind::Up(MouseButton::Left)));
        assert!(!t.signal());
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut t = InputTracker::new();
        apply_event(&mut t, &key(KeyCode::Char(' '), KeyEventKind::Press));
        apply_event(&mut t, &mouse(MouseEventKind::Down(MouseButton::Left)));
        assert!(t.signal());

        apply_event(&mut t, &Event::FocusLost);
        assert!(!t.signal());
    }

    #[test]
    fn key_auto_repeat_keeps_the_source_held() {
        let mut t = InputTracker::new();
        apply_event(&mut t, &key(KeyCode::Char(' '), KeyEventKind::Press));
        apply_event(&mut t, &key(KeyCode::Char(' '), KeyEventKind::Repeat));
        assert!(t.signal());

        apply_event(&mut t, &key(KeyCode::Char(' '), KeyEventKind::Release));
        assert!(!t.signal());
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char(' '))));
    }
}
