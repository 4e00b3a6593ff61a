// Builds the base raster: either a decoded image stretched to the canvas, or
// a generated coloring page when no file is given.

use std::path::Path;

use image::imageops::{self, FilterType};
use log::info;

use crate::error::Error;
use crate::types::{Color, Raster};

/// Decode `path`, convert to RGBA8 and scale it to `width` x `height`.
pub fn load_base(path: &Path, width: u32, height: u32) -> Result<Raster, Error> {
    if width == 0 || height == 0 {
        return Err(Error::EmptyCanvas);
    }
    let decoded = image::open(path)?.to_rgba8();
    let (src_w, src_h) = decoded.dimensions();
    info!("loaded {} ({}x{})", path.display(), src_w, src_h);

    let rgba = if (src_w, src_h) == (width, height) {
        decoded
    } else {
        imageops::resize(&decoded, width, height, FilterType::Triangle)
    };
    Raster::from_rgba(width as usize, height as usize, rgba.into_raw())
}

/// White page with black outlines: a frame split into panels and a circle.
pub fn demo_artwork(width: u32, height: u32) -> Result<Raster, Error> {
    if width == 0 || height == 0 {
        return Err(Error::EmptyCanvas);
    }
    let (w, h) = (width as usize, height as usize);
    let mut page = Raster::filled(w, h, Color::WHITE);
    let line = (w.min(h) / 160).max(2);

    let mut rect = |x0: usize, y0: usize, x1: usize, y1: usize| {
        for y in y0..y1.min(h) {
            for x in x0..x1.min(w) {
                page.set_color(x, y, Color::BLACK);
            }
        }
    };
    // outer frame
    rect(0, 0, w, line);
    rect(0, h.saturating_sub(line), w, h);
    rect(0, 0, line, h);
    rect(w.saturating_sub(line), 0, w, h);
    // panels
    rect(w / 2, 0, w / 2 + line, h / 2);
    rect(0, h / 2, w, h / 2 + line);
    rect(w / 3, h / 2, w / 3 + line, h);

    // ring in the top-left panel
    let (cx, cy) = ((w / 4) as i64, (h / 4) as i64);
    let outer = (w.min(h) / 6) as i64;
    let inner = outer - line as i64;
    for y in 0..h {
        for x in 0..w {
            let (dx, dy) = (x as i64 - cx, y as i64 - cy);
            let d2 = dx * dx + dy * dy;
            if d2 <= outer * outer && d2 > inner * inner {
                page.set_color(x, y, Color::BLACK);
            }
        }
    }
    Ok(page)
}
