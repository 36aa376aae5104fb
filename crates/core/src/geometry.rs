use crate::error::{PlotError, Result};

/// A position in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    #[must_use]
    pub fn offset(self, by: Point) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }
}

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to:   Point,
}

/// Axis-aligned drawable region of the plot.
///
/// `top` is the smaller y coordinate; it is the lower bound the auto-scaler
/// maps into, while `bottom` is the upper one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    min: Point,
    max: Point,
}

impl PlotBounds {
    /// Build bounds from the top-left and bottom-right corners.
    ///
    /// Rejects zero-area, inverted and non-finite rectangles.
    pub fn new(min: Point, max: Point) -> Result<Self> {
        let finite = [min.x, min.y, max.x, max.y].iter().all(|v| v.is_finite());
        if !finite || max.x <= min.x || max.y <= min.y {
            return Err(PlotError::DegenerateBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Result<Self> {
        Self::new(Point::new(left, top), Point::new(right, bottom))
    }

    #[inline] pub fn min(&self) -> Point { self.min }
    #[inline] pub fn max(&self) -> Point { self.max }
    #[inline] pub fn left(&self) -> f32 { self.min.x }
    #[inline] pub fn right(&self) -> f32 { self.max.x }
    #[inline] pub fn top(&self) -> f32 { self.min.y }
    #[inline] pub fn bottom(&self) -> f32 { self.max.y }
    #[inline] pub fn width(&self) -> f32 { self.max.x - self.min.x }
    #[inline] pub fn height(&self) -> f32 { self.max.y - self.min.y }

    /// Vertical midline; a sample of `0.0` is drawn here.
    #[inline]
    pub fn mid_y(&self) -> f32 {
        (self.min.y + self.max.y) / 2.0
    }
}
