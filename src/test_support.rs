// Rasters shared by the unit tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Color, Raster};

/// 10x10 white page with a black 3x3 square at (4,4)-(6,6).
pub fn square_page() -> Raster {
    let mut base = Raster::filled(10, 10, Color::WHITE);
    for y in 4..=6 {
        for x in 4..=6 {
            base.set_color(x, y, Color::BLACK);
        }
    }
    base
}

/// Seeded speckle of white, near-white, black and blue. Weighted toward white
/// so regions get large and twisty.
pub fn noise(width: usize, height: usize, seed: u64) -> Raster {
    let mut rng = StdRng::seed_from_u64(seed);
    let shades = [
        Color::WHITE,
        Color::rgb(250, 245, 255),
        Color::BLACK,
        Color::rgb(0, 120, 255),
    ];
    let mut r = Raster::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let pick = if rng.random_bool(0.6) { 0 } else { rng.random_range(0..shades.len()) };
            r.set_color(x, y, shades[pick]);
        }
    }
    r
}
