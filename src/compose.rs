// Turns the two rasters into what the window shows, plus small overlays.
// Visual: the base artwork with the user's paint on top, a ring showing the
// brush footprint under the mouse and a swatch of the current color.

use crate::brush::brush_offsets;
use crate::types::{Color, FrameBuffer, Raster};

/// Paint over base, straight alpha "source over", into 0x00RRGGBB pixels.
/// Both rasters and the frame must share one size.
pub fn composite(base: &Raster, paint: &Raster, out: &mut FrameBuffer) {
    debug_assert_eq!((base.width(), base.height()), (paint.width(), paint.height()));
    debug_assert_eq!((base.width(), base.height()), (out.width, out.height));

    let pairs = base.as_bytes().chunks_exact(4).zip(paint.as_bytes().chunks_exact(4));
    for (px, (b, p)) in out.pixels.iter_mut().zip(pairs) {
        let a = p[3] as u32;
        if a == 0 {
            *px = Color::rgb(b[0], b[1], b[2]).to_rgb_u32(); // nothing painted here
            continue;
        }
        if a == 255 {
            *px = Color::rgb(p[0], p[1], p[2]).to_rgb_u32(); // paint fully covers
            continue;
        }
        let mix = |over: u8, under: u8| ((over as u32 * a + under as u32 * (255 - a) + 127) / 255) as u8;
        *px = Color::rgb(mix(p[0], b[0]), mix(p[1], b[1]), mix(p[2], b[2])).to_rgb_u32();
    }
}

/// Put a pixel on the frame if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    fb.pixels[y * fb.width + x] = color;
}

/// Outline of the brush disc centered at (cx, cy): disc pixels with at least
/// one 4-neighbour outside the disc.
pub fn draw_brush_outline(fb: &mut FrameBuffer, cx: i32, cy: i32, diameter: u32, color: u32) {
    let radius = (diameter / 2) as i32;
    let r2 = radius * radius;
    let inside = |dx: i32, dy: i32| dx * dx + dy * dy <= r2;
    for (dx, dy) in brush_offsets(diameter) {
        let edge = !inside(dx - 1, dy) || !inside(dx + 1, dy) || !inside(dx, dy - 1) || !inside(dx, dy + 1);
        if edge {
            put_pixel(fb, cx + dx, cy + dy, color);
        }
    }
}

/// Filled square of `color` with a 1-pixel frame of `border`, top-left at (x, y).
pub fn draw_swatch(fb: &mut FrameBuffer, x: i32, y: i32, size: i32, color: Color, border: u32) {
    for yy in 0..size {
        for xx in 0..size {
            let frame = xx == 0 || yy == 0 || xx == size - 1 || yy == size - 1;
            put_pixel(fb, x + xx, y + yy, if frame { border } else { color.to_rgb_u32() });
        }
    }
}
