// Crate-wide error type.
// Every variant states *where* things went wrong.
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// Creating the window failed.
    #[error("window init error: {0}")]
    WindowInit(String),
    /// Pushing a frame to the window failed.
    #[error("window update error: {0}")]
    WindowUpdate(String),
    /// Opening or decoding the base artwork failed.
    #[error("image load error: {0}")]
    ImageLoad(#[from] image::ImageError),
    /// A color string that is not `#rgb` / `#rrggbb`.
    #[error("invalid color `{0}` (expected #rgb or #rrggbb)")]
    InvalidColor(String),
    /// Raw RGBA bytes do not cover width * height * 4.
    #[error("raster buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
    /// Zero-sized canvas requested.
    #[error("canvas must be at least 1x1")]
    EmptyCanvas,
    /// Mask/fill seed outside the raster; seeds are a caller contract.
    #[error("seed ({x}, {y}) lies outside the {width}x{height} raster")]
    SeedOutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}
