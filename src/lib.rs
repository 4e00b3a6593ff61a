//! Coloring-book painting engine.
//!
//! A pen stroke is clipped to the contiguous color region of the base artwork
//! under the press point; the bucket fill floods the paint layer itself.
//! [`controller::ToolController`] drives everything from pointer events.

pub mod brush;
pub mod compose;
pub mod config;
pub mod controller;
pub mod draw;
pub mod error;
pub mod fill;
pub mod line;
pub mod loader;
pub mod region;
pub mod types;

#[cfg(test)]
mod test_support;

pub use controller::{Tool, ToolController};
pub use error::Error;
pub use types::{Color, Point, Raster, RegionMask, match_color, DEFAULT_TOLERANCE};
