// Brush rasterizer.
// A hard-edged round stamp: the integer offsets of a filled disc, dabbed at
// every point of a stroke segment and clipped to the active region mask.

use std::collections::HashMap;

use crate::line::{LinePoints, clip_segment};
use crate::types::{Color, Point, Raster, RegionMask};

/// Largest brush the controller accepts.
pub const MAX_BRUSH_SIZE: u32 = 128;

/// Offset of one stamp pixel from the dab center.
pub type Offset = (i32, i32);

/// Disc offsets for a brush `diameter` pixels wide: radius = diameter / 2,
/// keep (dx, dy) with dx² + dy² <= radius². Diameters 0 and 1 give the
/// single center pixel.
pub fn brush_offsets(diameter: u32) -> Vec<Offset> {
    let radius = (diameter / 2) as i32;
    let r2 = radius * radius;
    let mut offsets = Vec::new();
    for dx in -radius..=radius {
        for dy in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

/// Memoized disc tables keyed by radius (diameters 4 and 5 share one).
/// Holds at most `capacity` radii; a miss on a full cache starts over.
pub struct BrushCache {
    tables: HashMap<u32, Vec<Offset>>,
    capacity: usize,
}

impl BrushCache {
    pub fn new(capacity: usize) -> Self {
        Self { tables: HashMap::new(), capacity: capacity.max(1) }
    }

    /// Offsets for `diameter`, computing them on first use.
    pub fn offsets(&mut self, diameter: u32) -> &[Offset] {
        let radius = diameter / 2;
        if !self.tables.contains_key(&radius) && self.tables.len() >= self.capacity {
            self.tables.clear();
        }
        self.tables.entry(radius).or_insert_with(|| brush_offsets(diameter))
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.tables.len()
    }
}

impl Default for BrushCache {
    fn default() -> Self {
        Self::new(16)
    }
}

/// Stamp one dab centered on `center`. Pixels off the raster or outside the
/// mask are skipped. Returns how many pixels were written.
pub fn dab(paint: &mut Raster, mask: &RegionMask, offsets: &[Offset], center: Point, color: Color) -> usize {
    let mut written = 0;
    for &(dx, dy) in offsets {
        let p = Point::new(center.x.saturating_add(dx), center.y.saturating_add(dy));
        if !paint.contains(p) || !mask.contains(p) {
            continue;
        }
        paint.set_color(p.x as usize, p.y as usize, color);
        written += 1;
    }
    written
}

/// Dab at every point of the segment `from`..=`to`. The segment is first cut
/// to the raster grown by the brush radius, so endpoints far off the canvas
/// cost nothing beyond the dabs that can still touch it.
pub fn stroke_segment(
    paint: &mut Raster,
    mask: &RegionMask,
    offsets: &[Offset],
    from: Point,
    to: Point,
    color: Color,
) -> usize {
    let reach = offsets.iter().map(|&(dx, dy)| dx.abs().max(dy.abs())).max().unwrap_or(0);
    let min = Point::new(-reach, -reach);
    let max = Point::new(
        (paint.width() as i32 - 1).saturating_add(reach),
        (paint.height() as i32 - 1).saturating_add(reach),
    );
    let Some((from, to)) = clip_segment(from, to, min, max) else {
        return 0;
    };
    LinePoints::new(from, to)
        .map(|p| dab(paint, mask, offsets, p, color))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diameter_five_disc() {
        let disc = brush_offsets(5);
        assert!(disc.contains(&(0, 0)));
        assert!(disc.contains(&(2, 0)));
        assert!(disc.contains(&(0, -2)));
        assert!(disc.contains(&(1, 1)));
        assert!(!disc.contains(&(2, 2)));
        assert!(!disc.contains(&(-2, 1)));
        assert_eq!(disc.len(), 13);
    }

    #[test]
    fn small_diameters_are_one_pixel() {
        assert_eq!(brush_offsets(1), vec![(0, 0)]);
        assert_eq!(brush_offsets(0), vec![(0, 0)]);
        // radius 1: plus shape
        assert_eq!(brush_offsets(2).len(), 5);
        assert_eq!(brush_offsets(3).len(), 5);
    }

    #[test]
    fn disc_is_symmetric() {
        let disc = brush_offsets(11);
        for &(dx, dy) in &disc {
            assert!(disc.contains(&(-dx, dy)));
            assert!(disc.contains(&(dy, dx)));
            assert!(dx * dx + dy * dy <= 25);
        }
    }

    #[test]
    fn cache_is_keyed_by_radius_and_bounded() {
        let mut cache = BrushCache::new(2);
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.offsets(4).len(), 13);
        assert_eq!(cache.offsets(5).len(), 13);
        assert_eq!(cache.len(), 1);
        cache.offsets(9);
        assert_eq!(cache.len(), 2);
        cache.offsets(21);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.offsets(3), brush_offsets(3).as_slice());
    }

    #[test]
    fn dab_clips_to_edges_and_mask() {
        let mut paint = Raster::new(4, 4);
        let mut mask = RegionMask::empty(4, 4);
        for y in 0..4 {
            mask.cells[y * 4] = true; // two left columns
            mask.cells[y * 4 + 1] = true;
        }
        let written = dab(&mut paint, &mask, &brush_offsets(3), Point::new(0, 0), Color::RED);
        // plus shape at the corner: (0,0) (1,0) (0,1) land, (-1,0) (0,-1) clip
        assert_eq!(written, 3);
        assert_eq!(paint.get_color(1, 0), Color::RED);
        assert_eq!(paint.get_color(1, 1), Color::TRANSPARENT);

        let written = dab(&mut paint, &mask, &brush_offsets(3), Point::new(2, 2), Color::RED);
        assert_eq!(written, 1); // only (1,2) is inside the mask
        assert_eq!(paint.get_color(2, 2), Color::TRANSPARENT);
    }

    #[test]
    fn segment_leaves_no_gaps() {
        let mut paint = Raster::new(20, 3);
        let mask = RegionMask { width: 20, height: 3, cells: vec![true; 60] };
        stroke_segment(&mut paint, &mask, &brush_offsets(1), Point::new(0, 1), Point::new(19, 1), Color::BLACK);
        for x in 0..20 {
            assert_eq!(paint.get_color(x, 1), Color::BLACK);
            assert_eq!(paint.get_color(x, 0), Color::TRANSPARENT);
        }
    }

    #[test]
    fn segment_far_off_canvas_is_clipped() {
        let mut paint = Raster::new(10, 10);
        let mask = RegionMask { width: 10, height: 10, cells: vec![true; 100] };
        let offsets = brush_offsets(3);
        let written = stroke_segment(&mut paint, &mask, &offsets, Point::new(5, 5), Point::new(i32::MAX, 5), Color::RED);
        // Centers run x = 5..=10: four full plus shapes, one losing its right
        // arm at x = 9, and x = 10 reaching back to (9, 5) only.
        assert_eq!(written, 4 * 5 + 4 + 1);
        assert_eq!(paint.get_color(9, 5), Color::RED);
        assert_eq!(paint.get_color(9, 6), Color::RED);
        assert_eq!(paint.get_color(4, 4), Color::TRANSPARENT);

        let mut untouched = Raster::new(10, 10);
        let missed = stroke_segment(
            &mut untouched,
            &mask,
            &offsets,
            Point::new(i32::MIN, i32::MIN),
            Point::new(i32::MIN, i32::MAX),
            Color::RED,
        );
        assert_eq!(missed, 0);
        assert_eq!(untouched, Raster::new(10, 10));
    }

    #[test]
    fn dab_near_the_i32_limit_does_not_overflow() {
        let mut paint = Raster::new(4, 4);
        let mask = RegionMask { width: 4, height: 4, cells: vec![true; 16] };
        assert_eq!(dab(&mut paint, &mask, &brush_offsets(5), Point::new(i32::MAX, i32::MIN), Color::RED), 0);
    }
}
