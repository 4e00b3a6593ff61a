// Line discretizer.
// Pointer-move events arrive sparsely during a fast drag; the segment between
// two samples is walked pixel by pixel so the stroke stays continuous.

use crate::types::Point;

/// Bresenham walk from `from` to `to`, both endpoints included.
/// Consecutive points differ by at most one step on each axis (8-connected).
/// The error term is kept in i64 so any pair of i32 endpoints is safe.
#[derive(Clone, Debug)]
pub struct LinePoints {
    x: i64,
    y: i64,
    end: (i64, i64),
    dx: i64,
    dy: i64, // stored negative
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl LinePoints {
    pub fn new(from: Point, to: Point) -> Self {
        let (x0, y0) = (from.x as i64, from.y as i64);
        let (x1, y1) = (to.x as i64, to.y as i64);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            end: (x1, y1),
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        // Always between the two i32 endpoints.
        let here = Point::new(self.x as i32, self.y as i32);
        if (self.x, self.y) == self.end {
            self.done = true;
            return Some(here);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(here)
    }
}

/// Cut the segment down to the part inside the box `min`..=`max`
/// (Liang-Barsky). Segments already inside come back unchanged; segments
/// that miss the box give None.
pub fn clip_segment(from: Point, to: Point, min: Point, max: Point) -> Option<(Point, Point)> {
    let inside = |p: Point| p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y;
    if inside(from) && inside(to) {
        return Some((from, to));
    }

    let (x0, y0) = (from.x as f64, from.y as f64);
    let (dx, dy) = (to.x as f64 - x0, to.y as f64 - y0);
    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    let edges = [
        (-dx, x0 - min.x as f64),
        (dx, max.x as f64 - x0),
        (-dy, y0 - min.y as f64),
        (dy, max.y as f64 - y0),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None; // parallel to this edge and outside it
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > t1 {
                return None;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return None;
            }
            t1 = t1.min(t);
        }
    }

    let at = |t: f64| {
        Point::new(
            ((x0 + t * dx).round() as i32).clamp(min.x, max.x),
            ((y0 + t * dy).round() as i32).clamp(min.y, max.y),
        )
    };
    Some((at(t0), at(t1)))
}

/// All grid points on the segment, in order from `from` to `to`.
pub fn discretize_line(from: Point, to: Point) -> Vec<Point> {
    LinePoints::new(from, to).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(list: &[(i32, i32)]) -> Vec<Point> {
        list.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn horizontal() {
        assert_eq!(
            discretize_line(Point::new(0, 0), Point::new(5, 0)),
            pts(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)])
        );
    }

    #[test]
    fn single_point() {
        assert_eq!(discretize_line(Point::new(0, 0), Point::new(0, 0)), pts(&[(0, 0)]));
        assert_eq!(discretize_line(Point::new(-3, 7), Point::new(-3, 7)), pts(&[(-3, 7)]));
    }

    #[test]
    fn vertical_upward() {
        assert_eq!(
            discretize_line(Point::new(2, 3), Point::new(2, 0)),
            pts(&[(2, 3), (2, 2), (2, 1), (2, 0)])
        );
    }

    #[test]
    fn diagonal() {
        assert_eq!(
            discretize_line(Point::new(0, 0), Point::new(3, 3)),
            pts(&[(0, 0), (1, 1), (2, 2), (3, 3)])
        );
    }

    #[test]
    fn steep_and_shallow_lines_have_no_gaps() {
        let cases = [
            (Point::new(0, 0), Point::new(17, 5)),
            (Point::new(9, -4), Point::new(-2, 20)),
            (Point::new(100, 100), Point::new(37, 61)),
            (Point::new(-5, 3), Point::new(4, -30)),
        ];
        for (from, to) in cases {
            let line = discretize_line(from, to);
            assert_eq!(line.first(), Some(&from));
            assert_eq!(line.last(), Some(&to));
            // Exactly one point per step along the major axis.
            let major = (to.x - from.x).abs().max((to.y - from.y).abs());
            assert_eq!(line.len() as i32, major + 1);
            for pair in line.windows(2) {
                assert!((pair[1].x - pair[0].x).abs() <= 1);
                assert!((pair[1].y - pair[0].y).abs() <= 1);
                assert_ne!(pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn extreme_endpoints_do_not_overflow() {
        let mut it = LinePoints::new(Point::new(i32::MIN, 0), Point::new(i32::MAX, 1));
        assert_eq!(it.next(), Some(Point::new(i32::MIN, 0)));
        assert_eq!(it.next(), Some(Point::new(i32::MIN + 1, 0)));

        let mut it = LinePoints::new(Point::new(0, i32::MAX), Point::new(0, i32::MIN));
        assert_eq!(it.nth(2), Some(Point::new(0, i32::MAX - 2)));
    }

    #[test]
    fn clip_keeps_segments_inside_the_box() {
        let (min, max) = (Point::new(-2, -2), Point::new(11, 11));
        let inner = (Point::new(0, 0), Point::new(9, 4));
        assert_eq!(clip_segment(inner.0, inner.1, min, max), Some(inner));
    }

    #[test]
    fn clip_cuts_far_endpoints() {
        let (min, max) = (Point::new(-2, -2), Point::new(11, 11));
        assert_eq!(
            clip_segment(Point::new(5, 5), Point::new(i32::MAX, 5), min, max),
            Some((Point::new(5, 5), Point::new(11, 5)))
        );
        assert_eq!(
            clip_segment(Point::new(i32::MIN, i32::MIN), Point::new(5, 5), min, max),
            Some((Point::new(-2, -2), Point::new(5, 5)))
        );
        // Crosses the whole box from one far side to the other.
        let (a, b) = clip_segment(Point::new(-1_000_000, 3), Point::new(1_000_000, 3), min, max).unwrap();
        assert_eq!((a, b), (Point::new(-2, 3), Point::new(11, 3)));
    }

    #[test]
    fn clip_drops_segments_that_miss() {
        let (min, max) = (Point::new(0, 0), Point::new(9, 9));
        assert_eq!(clip_segment(Point::new(20, 0), Point::new(30, 9), min, max), None);
        assert_eq!(clip_segment(Point::new(-5, 20), Point::new(20, 40), min, max), None);
        assert_eq!(clip_segment(Point::new(-5, -5), Point::new(-5, 50), min, max), None);
    }

    #[test]
    fn iterator_is_fused_after_the_end() {
        let mut it = LinePoints::new(Point::new(0, 0), Point::new(1, 0));
        assert_eq!(it.next(), Some(Point::new(0, 0)));
        assert_eq!(it.next(), Some(Point::new(1, 0)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
