// Core types shared by the painting engine.
// Two rasters exist per session: the read-only base artwork and the paint layer
// the user draws on. Both are RGBA, row-major, 4 bytes per pixel.

use crate::error::Error;

/// Per-channel slack allowed when deciding "same color".
pub const DEFAULT_TOLERANCE: u8 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional). Alpha is always 255.
    pub fn from_hex(text: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidColor(text.to_string());
        let hex = text.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return Err(invalid()),
        };
        let num = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
        Ok(Self::rgb(
            ((num >> 16) & 0xFF) as u8,
            ((num >> 8) & 0xFF) as u8,
            (num & 0xFF) as u8,
        ))
    }

    /// Same-color test used by both the region mask and the fill.
    #[inline]
    pub fn matches(self, other: Color, tolerance: u8) -> bool {
        match_color(self, other, tolerance)
    }

    /// Pack as 0x00RRGGBB for the window (alpha dropped).
    #[inline]
    pub fn to_rgb_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// True iff every channel (r, g, b, a) differs by at most `tolerance`.
/// Chebyshev-style: channels are checked independently, never summed.
#[inline]
pub fn match_color(c1: Color, c2: Color, tolerance: u8) -> bool {
    c1.r.abs_diff(c2.r) <= tolerance
        && c1.g.abs_diff(c2.g) <= tolerance
        && c1.b.abs_diff(c2.b) <= tolerance
        && c1.a.abs_diff(c2.a) <= tolerance
}

/// Integer position in raster space. Signed so that brush offsets and line
/// points may step past the edges before being clipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Snap a pointer position (fractional pixels) to the pixel under it.
    pub fn from_pointer(x: f32, y: f32) -> Self {
        Self::new(x.floor() as i32, y.floor() as i32)
    }
}

/// Flat RGBA pixel grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>, // length = width * height * 4
}

impl Raster {
    /// Fully transparent raster (a fresh paint layer).
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        let data = [color.r, color.g, color.b, color.a].repeat(width * height);
        Self { width, height, data }
    }

    /// Wrap decoded RGBA bytes.
    pub fn from_rgba(width: usize, height: usize, data: Vec<u8>) -> Result<Self, Error> {
        let expected = width * height * 4;
        if data.len() != expected {
            return Err(Error::BufferSize { expected, actual: data.len() });
        }
        Ok(Self { width, height, data })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) out of raster");
        (y * self.width + x) * 4
    }

    /// Color at (x, y). Coordinates must be in bounds.
    #[inline]
    pub fn get_color(&self, x: usize, y: usize) -> Color {
        let i = self.offset(x, y);
        Color::rgba(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
    }

    /// Overwrite (x, y). Coordinates must be in bounds.
    #[inline]
    pub fn set_color(&mut self, x: usize, y: usize, color: Color) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
    }

    /// Reset every pixel to `color`.
    pub fn fill_all(&mut self, color: Color) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    pub(crate) fn seed_index(&self, seed: Point) -> Result<(usize, usize), Error> {
        if !self.contains(seed) {
            return Err(Error::SeedOutOfBounds {
                x: seed.x,
                y: seed.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((seed.x as usize, seed.y as usize))
    }
}

/// Pixels flood-connected to a seed in the base artwork.
/// Only pixels marked here accept pen paint for the current stroke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionMask {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<bool>, // length = width * height
}

impl RegionMask {
    pub fn empty(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![false; width * height] }
    }

    /// True when `p` is on the raster and inside the region.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        if p.x < 0 || p.y < 0 {
            return false;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    /// Number of pixels in the region.
    pub fn area(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// What the window shows each frame.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,     // window width in pixels
    pub height: usize,    // window height in pixels
    pub pixels: Vec<u32>, // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}
