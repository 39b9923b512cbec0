//! Dot-matrix jump game runner (default binary).
//!
//! This is the bootstrap the core components expect around them: construct
//! everything once, enter the terminal, then run the frame loop — pump
//! events into the input tracker until the next tick is due, sample the
//! signal, step the engine bridge, flush.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_dotjump::bridge::{Cadence, EngineBridge, FramePacer};
use tui_dotjump::input::{apply_event, should_quit, InputTracker, KeyReleaseFallback};
use tui_dotjump::term::{PixelGrid, RenderSink, ScoreSink, TerminalSurface};
use tui_dotjump::types::InputSource;

fn main() -> Result<()> {
    env_logger::init();

    // Allocate the engine state region before touching the terminal: a
    // refused allocation is reported on a usable stderr and the loop never
    // starts.
    let bridge = EngineBridge::new()?;
    let cadence = Cadence::from_env();

    let mut surface = TerminalSurface::new();
    surface.enter()?;

    let result = run(bridge, cadence, &mut surface);

    // Always try to restore terminal state.
    let _ = surface.exit();
    result
}

fn run(mut bridge: EngineBridge, cadence: Cadence, surface: &mut TerminalSurface) -> Result<()> {
    let mut grid = PixelGrid::new();
    let mut score = ScoreSink::new();
    let mut tracker = InputTracker::new();

    // Terminals without key release events get the synthesized-release
    // fallback; otherwise one tap would hold the signal forever.
    let mut fallback = if surface.key_release_events() {
        None
    } else {
        Some(KeyReleaseFallback::default())
    };

    {
        let mut sink = RenderSink::new(&mut grid, &mut score, &mut *surface);
        bridge.initialize(&mut sink);
    }
    surface.flush()?;

    let mut pacer = FramePacer::new(cadence, Instant::now());

    loop {
        // Pump at most one event, blocking no longer than the tick allows.
        let timeout = pacer.timeout(Instant::now());
        if event::poll(timeout)? {
            let ev = event::read()?;
            match ev {
                Event::Key(key) if should_quit(key) => return Ok(()),
                Event::Resize(width, height) => {
                    surface.handle_resize(width, height, score.last())?;
                    grid.invalidate();
                }
                _ => {
                    let touched = apply_event(&mut tracker, &ev);
                    if touched == Some(InputSource::Key) {
                        if let (Some(fb), Event::Key(key)) = (fallback.as_mut(), &ev) {
                            if key.kind != KeyEventKind::Release {
                                fb.note_press(Instant::now());
                            }
                        }
                    }
                }
            }
        }

        let now = Instant::now();
        if let Some(fb) = fallback.as_mut() {
            if fb.poll(now) {
                tracker.release(InputSource::Key);
            }
        }

        if pacer.due(now) {
            let signal = tracker.signal();
            {
                let mut sink = RenderSink::new(&mut grid, &mut score, &mut *surface);
                bridge.step(signal, &mut sink);
            }
            surface.flush()?;
            pacer.tick_complete(Instant::now());
        }
    }
}
