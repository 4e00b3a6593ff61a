// Stroke/tool controller.
// Owns both rasters plus every piece of mutable tool state, and turns pointer
// events into mask builds, masked brush dabs and bucket fills.
//
// All work runs synchronously inside the event call that triggered it: the
// region mask exists before `pointer_down` returns, so the first move of a
// stroke always sees it.

use log::{debug, info, warn};

use crate::brush::{BrushCache, MAX_BRUSH_SIZE, stroke_segment};
use crate::fill::flood_fill;
use crate::region::compute_region_mask;
use crate::types::{Color, DEFAULT_TOLERANCE, Point, Raster, RegionMask};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Pen,
    Fill,
}

/// Pen stroke in progress, or nothing. A fill is one atomic action and never
/// leaves state behind.
#[derive(Debug)]
enum Stroke {
    Idle,
    Pen { mask: RegionMask, last: Point },
}

pub struct ToolController {
    base: Raster,
    paint: Raster,
    tool: Tool,
    color: Color,
    brush_size: u32,
    tolerance: u8,
    stroke: Stroke,
    brushes: BrushCache,
}

impl ToolController {
    /// Start a session over `base`. The paint layer starts fully transparent
    /// and always has the base raster's dimensions.
    pub fn new(base: Raster) -> Self {
        let paint = Raster::new(base.width(), base.height());
        Self {
            base,
            paint,
            tool: Tool::Pen,
            color: Color::BLACK,
            brush_size: 5,
            tolerance: DEFAULT_TOLERANCE,
            stroke: Stroke::Idle,
            brushes: BrushCache::default(),
        }
    }

    pub fn base(&self) -> &Raster {
        &self.base
    }

    pub fn paint(&self) -> &Raster {
        &self.paint
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn tolerance(&self) -> u8 {
        self.tolerance
    }

    pub fn is_stroking(&self) -> bool {
        matches!(self.stroke, Stroke::Pen { .. })
    }

    /// Mask of the stroke in progress, if any.
    pub fn active_mask(&self) -> Option<&RegionMask> {
        match &self.stroke {
            Stroke::Pen { mask, .. } => Some(mask),
            Stroke::Idle => None,
        }
    }

    /// Switching tools ends any pen stroke in progress.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool != self.tool {
            info!("tool: {:?}", tool);
            self.end_stroke();
        }
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Color) {
        debug!("color: {:?}", color);
        self.color = color;
    }

    /// Clamped to 1..=MAX_BRUSH_SIZE. Affects only dabs made after the call.
    pub fn set_brush_size(&mut self, size: u32) {
        self.brush_size = size.clamp(1, MAX_BRUSH_SIZE);
        debug!("brush size: {}", self.brush_size);
    }

    /// Used by the next mask build or fill.
    pub fn set_tolerance(&mut self, tolerance: u8) {
        self.tolerance = tolerance;
    }

    /// Wipe the paint layer back to transparent.
    pub fn clear(&mut self) {
        self.end_stroke();
        self.paint.fill_all(Color::TRANSPARENT);
        info!("paint layer cleared");
    }

    /// Pen: build the region mask under the press and begin a stroke.
    /// Fill: bucket-fill the paint layer once; the region mask plays no part.
    /// Presses off the canvas are ignored.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let at = Point::from_pointer(x, y);
        if !self.base.contains(at) {
            warn!("press at ({}, {}) is off the canvas, ignored", at.x, at.y);
            return;
        }

        match self.tool {
            Tool::Pen => match compute_region_mask(&self.base, at, self.tolerance) {
                Ok(mask) => {
                    debug!("stroke start at ({}, {}), region of {} px", at.x, at.y, mask.area());
                    self.stroke = Stroke::Pen { mask, last: at };
                }
                Err(e) => warn!("{e}"),
            },
            Tool::Fill => {
                self.end_stroke();
                match flood_fill(&mut self.paint, at, self.color, self.tolerance) {
                    Ok(n) => debug!("fill at ({}, {}) painted {} px", at.x, at.y, n),
                    Err(e) => warn!("{e}"),
                }
            }
        }
    }

    /// Paint the segment from the previous cursor sample to this one,
    /// clipped to the stroke's mask. Far off-canvas samples are fine: the
    /// segment is cut to the canvas before it is walked. Without an active
    /// stroke this does nothing. Returns the number of pixel writes.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> usize {
        let Stroke::Pen { mask, last } = &mut self.stroke else {
            return 0;
        };
        let to = Point::from_pointer(x, y);
        let offsets = self.brushes.offsets(self.brush_size);
        let written = stroke_segment(&mut self.paint, mask, offsets, *last, to, self.color);
        *last = to;
        written
    }

    pub fn pointer_up(&mut self) {
        self.end_stroke();
    }

    pub fn pointer_leave(&mut self) {
        self.end_stroke();
    }

    fn end_stroke(&mut self) {
        if let Stroke::Pen { last, .. } = self.stroke {
            debug!("stroke end at ({}, {})", last.x, last.y);
        }
        self.stroke = Stroke::Idle;
    }
}
