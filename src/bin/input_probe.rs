//! Interactive input tracker probe.
//!
//! Prints raw terminal events together with the collapsed signal they
//! produce. Useful for checking what a given terminal actually reports
//! (key release events, mouse capture, focus changes). Press q to quit.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    event::{
        self, EnableFocusChange, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute, terminal,
};

use tui_dotjump::input::{apply_event, should_quit, InputTracker};

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let key_release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);

    let mut stdout = io::stdout();
    execute!(stdout, EnableMouseCapture, EnableFocusChange)?;
    if key_release_events {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }

    print!("key release events: {key_release_events}\r\n");
    print!("press/release space or the left mouse button; q quits\r\n\r\n");
    stdout.flush()?;

    let result = probe();

    if key_release_events {
        let _ = execute!(stdout, event::PopKeyboardEnhancementFlags);
    }
    let _ = execute!(stdout, event::DisableFocusChange, event::DisableMouseCapture);
    let _ = terminal::disable_raw_mode();
    result
}

fn probe() -> Result<()> {
    let mut tracker = InputTracker::new();
    let mut stdout = io::stdout();

    loop {
        let ev = event::read()?;
        if let Event::Key(key) = &ev {
            if should_quit(*key) {
                return Ok(());
            }
        }

        let touched = apply_event(&mut tracker, &ev);
        print!("{ev:?} -> signal={} touched={touched:?}\r\n", tracker.signal());
        stdout.flush()?;
    }
}
