//! Display surface: the capability the renderer parts draw through, and its
//! real crossterm implementation.
//!
//! `TerminalSurface` owns terminal setup/teardown and encodes all drawing
//! into a reusable byte buffer that is flushed once per frame. It never
//! diffs; change detection belongs to [`crate::grid::PixelGrid`].

use std::io::{self, Write};

use core::fmt::Write as _;

use anyhow::Result;
use arrayvec::ArrayString;

use crossterm::{
    cursor,
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::palette::{color_rgb, Rgb};
use tui_dotjump_types::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Where the renderer parts draw.
///
/// Implementations apply requests unconditionally; callers are responsible
/// for only sending work that should become visible.
pub trait Surface {
    /// Show `color` in grid cell `(x, y)`.
    fn paint_cell(&mut self, x: i32, y: i32, color: u8);

    /// Show `value` in the score readout.
    fn paint_score(&mut self, value: u32);
}

/// Terminal columns per grid cell; compensates for glyph aspect ratio.
const CELL_COLS: u16 = 2;

const GRID_COLS: u16 = SCREEN_WIDTH as u16 * CELL_COLS;
const GRID_ROWS: u16 = SCREEN_HEIGHT as u16;
const FRAME_W: u16 = GRID_COLS + 2;
const FRAME_H: u16 = GRID_ROWS + 2;

const HINT_TEXT: &str = "space / click to jump, q quits";

/// Crossterm-backed display surface.
pub struct TerminalSurface {
    stdout: io::Stdout,
    buf: Vec<u8>,
    origin_x: u16,
    origin_y: u16,
    key_release_events: bool,
    enhancement_pushed: bool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
            origin_x: 1,
            origin_y: 1,
            key_release_events: false,
            enhancement_pushed: false,
        }
    }

    /// Enter raw mode, set up the alternate screen and draw the static
    /// chrome (border, empty grid, score line, hint).
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.key_release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);

        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(EnableMouseCapture)?;
        self.buf.queue(EnableFocusChange)?;
        if self.key_release_events {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
            self.enhancement_pushed = true;
        }

        let (w, h) = terminal::size().unwrap_or((80, 24));
        self.layout(w, h);
        self.encode_chrome(0)?;
        self.flush()
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.enhancement_pushed {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
            self.enhancement_pushed = false;
        }
        self.buf.queue(DisableFocusChange)?;
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Whether the terminal reports key release events. When it does not,
    /// the host arms the input crate's release-timeout fallback.
    pub fn key_release_events(&self) -> bool {
        self.key_release_events
    }

    /// Recompute the layout and redraw the chrome after a terminal resize.
    ///
    /// The caller must also invalidate its pixel grid so the next frame
    /// repaints every cell into the fresh chrome.
    pub fn handle_resize(&mut self, width: u16, height: u16, score: u32) -> Result<()> {
        self.layout(width, height);
        self.encode_chrome(score)?;
        self.flush()
    }

    /// Write the buffered frame to the terminal.
    pub fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        self.buf.clear();
        Ok(())
    }

    fn layout(&mut self, width: u16, height: u16) {
        // Center the frame plus the two text rows under it.
        self.origin_x = width.saturating_sub(FRAME_W) / 2 + 1;
        self.origin_y = height.saturating_sub(FRAME_H + 2) / 2 + 1;
    }

    fn frame_left(&self) -> u16 {
        self.origin_x - 1
    }

    fn frame_top(&self) -> u16 {
        self.origin_y - 1
    }

    fn score_row(&self) -> u16 {
        self.frame_top() + FRAME_H
    }

    fn encode_chrome(&mut self, score: u32) -> Result<()> {
        let left = self.frame_left();
        let top = self.frame_top();
        let border = Color::Rgb {
            r: 130,
            g: 130,
            b: 140,
        };

        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(SetForegroundColor(border))?;

        self.buf.queue(cursor::MoveTo(left, top))?;
        self.buf.queue(Print('┌'))?;
        for _ in 0..GRID_COLS {
            self.buf.queue(Print('─'))?;
        }
        self.buf.queue(Print('┐'))?;

        let background = rgb_to_color(color_rgb(0));
        for row in 0..GRID_ROWS {
            self.buf.queue(cursor::MoveTo(left, top + 1 + row))?;
            self.buf.queue(Print('│'))?;
            self.buf.queue(SetBackgroundColor(background))?;
            for _ in 0..SCREEN_WIDTH {
                self.buf.queue(Print("  "))?;
            }
            self.buf.queue(ResetColor)?;
            self.buf.queue(SetForegroundColor(border))?;
            self.buf.queue(Print('│'))?;
        }

        self.buf.queue(cursor::MoveTo(left, top + FRAME_H - 1))?;
        self.buf.queue(Print('└'))?;
        for _ in 0..GRID_COLS {
            self.buf.queue(Print('─'))?;
        }
        self.buf.queue(Print('┘'))?;

        self.buf.queue(cursor::MoveTo(left + 1, self.score_row() + 1))?;
        self.buf.queue(SetAttribute(Attribute::Dim))?;
        self.buf.queue(Print(HINT_TEXT))?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(ResetColor)?;

        self.encode_score(score)?;
        Ok(())
    }

    fn encode_cell(&mut self, x: i32, y: i32, rgb: Rgb) -> Result<()> {
        let col = self.origin_x + (x as u16) * CELL_COLS;
        let row = self.origin_y + y as u16;
        self.buf.queue(cursor::MoveTo(col, row))?;
        self.buf.queue(SetBackgroundColor(rgb_to_color(rgb)))?;
        self.buf.queue(Print("  "))?;
        self.buf.queue(ResetColor)?;
        Ok(())
    }

    fn encode_score(&mut self, value: u32) -> Result<()> {
        // Trailing pad so a shorter score overwrites a longer one.
        let mut text = ArrayString::<24>::new();
        let _ = write!(text, "SCORE {:<10}", value);

        self.buf.queue(cursor::MoveTo(self.frame_left() + 1, self.score_row()))?;
        self.buf
            .queue(SetForegroundColor(rgb_to_color(color_rgb(7))))?;
        self.buf.queue(Print(text.as_str()))?;
        self.buf.queue(ResetColor)?;
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalSurface {
    fn paint_cell(&mut self, x: i32, y: i32, color: u8) {
        if x < 0 || x >= SCREEN_WIDTH || y < 0 || y >= SCREEN_HEIGHT {
            return;
        }
        // Encoding into the in-memory buffer cannot fail; I/O errors
        // surface in flush().
        let _ = self.encode_cell(x, y, color_rgb(color));
    }

    fn paint_score(&mut self, value: u32) {
        let _ = self.encode_score(value);
    }
}
