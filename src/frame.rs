//! Fixed-size pixel grid handed to the display sinks every tick.

use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};

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

    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

// ── Palette ───────────────────────────────────────────────────────────────────

/// Background; also what a blinking element turns into while hidden.
pub const OFF: Rgb = Rgb::new(0, 0, 0);
pub const BORDER: Rgb = Rgb::new(255, 255, 255);
pub const BALL: Rgb = Rgb::new(255, 0, 255);
pub const LEFT: Rgb = Rgb::new(255, 0, 0);
pub const RIGHT: Rgb = Rgb::new(0, 255, 0);

/// Board-sized grid of colors, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: [[Rgb; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: [[OFF; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    #[inline(always)]
    fn idx(x: i32, y: i32) -> Option<(usize, usize)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= BOARD_WIDTH || y >= BOARD_HEIGHT {
            return None;
        }
        Some((x, y))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        Self::idx(x, y).map(|(x, y)| self.pixels[y][x])
    }

    /// Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some((x, y)) = Self::idx(x, y) {
            self.pixels[y][x] = color;
        }
    }

    pub fn clear(&mut self, color: Rgb) {
        for row in self.pixels.iter_mut() {
            row.fill(color);
        }
    }

    /// Paint `len` cells rightwards starting at `(x, y)`.
    pub fn hline(&mut self, x: i32, y: i32, len: i32, color: Rgb) {
        for dx in 0..len {
            self.set(x + dx, y, color);
        }
    }

    /// Paint `len` cells downwards starting at `(x, y)`.
    pub fn vline(&mut self, x: i32, y: i32, len: i32, color: Rgb) {
        for dy in 0..len {
            self.set(x, y + dy, color);
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Rgb; BOARD_WIDTH]> {
        self.pixels.iter()
    }
}
