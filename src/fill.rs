// Bucket fill for the paint raster.
//
// `flood_fill` walks vertical spans: from a seed it climbs to the top of the
// matching run in that column, then paints downward, pushing one new seed per
// contiguous matching run found to the left or right. That keeps the stack at
// roughly one entry per span instead of one per pixel.
//
// `flood_fill_naive` paints the same region through the 4-connected region
// walk; it is the reference the span fill is checked against.

use crate::error::Error;
use crate::region::compute_region_mask;
use crate::types::{Color, Point, Raster};

/// Fill the region around `seed` with `fill` in place.
/// Returns the number of pixels painted (0 when the region already carries
/// the fill color within `tolerance`).
pub fn flood_fill(paint: &mut Raster, seed: Point, fill: Color, tolerance: u8) -> Result<usize, Error> {
    let (sx, sy) = paint.seed_index(seed)?;
    let start = paint.get_color(sx, sy);
    if start.matches(fill, tolerance) {
        return Ok(0);
    }

    // Once painted a pixel no longer matches `start` (the check above), so
    // painted pixels double as the visited set.
    let (w, h) = (paint.width(), paint.height());
    let is_open = |r: &Raster, x: usize, y: usize| r.get_color(x, y).matches(start, tolerance);

    let mut painted = 0;
    let mut stack = vec![(sx, sy)];

    while let Some((x, mut y)) = stack.pop() {
        if !is_open(paint, x, y) {
            continue;
        }
        while y > 0 && is_open(paint, x, y - 1) {
            y -= 1;
        }

        let mut reach_left = false;
        let mut reach_right = false;
        while y < h && is_open(paint, x, y) {
            paint.set_color(x, y, fill);
            painted += 1;

            if x > 0 {
                if is_open(paint, x - 1, y) {
                    if !reach_left {
                        stack.push((x - 1, y));
                        reach_left = true;
                    }
                } else {
                    reach_left = false;
                }
            }
            if x + 1 < w {
                if is_open(paint, x + 1, y) {
                    if !reach_right {
                        stack.push((x + 1, y));
                        reach_right = true;
                    }
                } else {
                    reach_right = false;
                }
            }
            y += 1;
        }
    }

    Ok(painted)
}

/// Pixel-at-a-time fill over the same region as [`flood_fill`].
pub fn flood_fill_naive(paint: &mut Raster, seed: Point, fill: Color, tolerance: u8) -> Result<usize, Error> {
    let (sx, sy) = paint.seed_index(seed)?;
    if paint.get_color(sx, sy).matches(fill, tolerance) {
        return Ok(0);
    }

    let region = compute_region_mask(paint, seed, tolerance)?;
    let mut painted = 0;
    for (idx, _) in region.cells.iter().enumerate().filter(|(_, c)| **c) {
        paint.set_color(idx % region.width, idx / region.width, fill);
        painted += 1;
    }
    Ok(painted)
}
