//! Color code palette for the dot-matrix display.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Map an engine color code to its display color.
///
/// Codes outside the 8-entry palette render white; the engine does not emit
/// them, but an unknown code should be visible rather than invisible.
pub fn color_rgb(code: u8) -> Rgb {
    match code {
        0 => Rgb::new(12, 12, 16),
        1 => Rgb::new(220, 60, 50),
        2 => Rgb::new(70, 200, 90),
        3 => Rgb::new(235, 200, 50),
        4 => Rgb::new(70, 110, 230),
        5 => Rgb::new(200, 80, 200),
        6 => Rgb::new(70, 200, 210),
        7 => Rgb::new(235, 235, 235),
        _ => Rgb::new(235, 235, 235),
    }
}
