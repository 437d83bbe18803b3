//! Core data types for WearVis-RS
//!
//! This module contains the fundamental data structures shared by the chart
//! pipeline:
//!
//! - [`Point`] - A 2-D coordinate pair, used both for raw (time, value)
//!   samples and for pixel-space render points
//! - [`TickMark`] - A grid line: pixel position plus display label
//! - [`PixelRect`] - The pixel rectangle a presentation layer draws into
//!
//! Points carry no identity beyond their coordinates; the resampling stages
//! consume and produce owned vectors of them.

/// A point in two dimensions, either data space or pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Position on the X axis (time, or pixel column)
    pub x: f64,
    /// Position on the Y axis (value, or pixel row)
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Remap the X coordinate from `[cur_min, cur_max]` into
    /// `[new_min, new_max]`
    pub fn scale_x(&mut self, cur_min: f64, cur_max: f64, new_min: f64, new_max: f64) {
        let normalized = (self.x - cur_min) / (cur_max - cur_min);
        self.x = (new_max - new_min) * normalized + new_min;
    }

    /// Remap the Y coordinate from `[cur_min, cur_max]` into
    /// `[new_min, new_max]`
    pub fn scale_y(&mut self, cur_min: f64, cur_max: f64, new_min: f64, new_max: f64) {
        let normalized = (self.y - cur_min) / (cur_max - cur_min);
        self.y = (new_max - new_min) * normalized + new_min;
    }
}

/// One grid line on an axis: where to draw it and what to label it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickMark {
    /// Pixel position along the axis
    pub position: i32,
    /// Human-readable label for the grid line
    pub label: String,
}

impl TickMark {
    /// Create a new tick mark
    pub fn new(position: i32, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
        }
    }
}

/// The pixel rectangle the chart is rendered into
///
/// The coordinate origin is the top-left corner, so `min_y` is the top edge
/// and `max_y` the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// Left edge in pixels
    pub min_x: i32,
    /// Right edge in pixels
    pub max_x: i32,
    /// Top edge in pixels
    pub min_y: i32,
    /// Bottom edge in pixels
    pub max_y: i32,
}

impl PixelRect {
    /// Create a new pixel rectangle from its edges
    pub fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Rectangle width in pixels
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    /// Rectangle height in pixels
    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    /// Check whether the rectangle has positive area
    pub fn is_valid(&self) -> bool {
        self.width() > 0 && self.height() > 0
    }
}
