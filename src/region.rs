// Region mask builder.
// Finds the contiguous patch of the base artwork under the press point so a
// pen stroke can be clipped to it ("stay inside the lines").

use crate::error::Error;
use crate::types::{Point, Raster, RegionMask};

/// Flood the base raster from `seed` and mark every 4-connected pixel whose
/// color matches the seed's color within `tolerance`.
///
/// Iterative with an explicit stack; the mask doubles as the visited set, so
/// a marked pixel is never examined twice. Time and extra space are O(area).
pub fn compute_region_mask(base: &Raster, seed: Point, tolerance: u8) -> Result<RegionMask, Error> {
    let (sx, sy) = base.seed_index(seed)?;
    let (w, h) = (base.width(), base.height());
    let start = base.get_color(sx, sy);

    let mut mask = RegionMask::empty(w, h);
    let mut stack = vec![(sx, sy)];

    while let Some((x, y)) = stack.pop() {
        let idx = y * w + x;
        if mask.cells[idx] {
            continue;
        }
        if !base.get_color(x, y).matches(start, tolerance) {
            continue;
        }
        mask.cells[idx] = true;

        if x > 0 { stack.push((x - 1, y)); }
        if x + 1 < w { stack.push((x + 1, y)); }
        if y > 0 { stack.push((x, y - 1)); }
        if y + 1 < h { stack.push((x, y + 1)); }
    }

    Ok(mask)
}
