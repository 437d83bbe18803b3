//! Chart model: the per-panel facade over table, viewport and pipeline
//!
//! A [`ChartModel`] is what a presentation layer talks to. It owns the
//! viewport of one chart panel and shares the sensor table with any other
//! panels over the same recording (an overview panel typically keeps a
//! full viewport while a detail panel zooms). Per redraw the presentation
//! layer supplies the pixel rectangle and the selected channel and receives
//! a [`RenderFrame`] to draw; user gestures map onto the viewport
//! transitions re-exported here.
//!
//! Everything is synchronous and single-threaded: mutate the viewport and
//! render on the same event-processing turn and no synchronization is
//! needed.

use std::sync::Arc;

use crate::config::RenderOptions;
use crate::grid::{time_grid, value_grid};
use crate::resample::resample;
use crate::table::SensorTable;
use crate::types::{PixelRect, Point, TickMark};
use crate::viewport::Viewport;

/// Everything a presentation layer needs to draw one redraw of a panel
#[derive(Debug, Clone, Default)]
pub struct RenderFrame {
    /// Pixel-space polyline vertices, one per populated pixel column
    pub points: Vec<Point>,
    /// Vertical grid lines over the visible time window
    pub time_ticks: Vec<TickMark>,
    /// Horizontal grid lines over the channel's global extent
    pub value_ticks: Vec<TickMark>,
}

/// Model of one chart panel: a shared table plus an exclusive viewport
#[derive(Debug, Clone)]
pub struct ChartModel {
    table: Arc<SensorTable>,
    viewport: Viewport,
}

impl ChartModel {
    /// Create a model with an explicit initial viewport
    pub fn new(table: Arc<SensorTable>, viewport: Viewport) -> Self {
        Self { table, viewport }
    }

    /// Create a model showing the whole recording
    pub fn full_view(table: Arc<SensorTable>) -> Self {
        Self::new(table, Viewport::full())
    }

    /// The shared sensor table
    pub fn table(&self) -> &SensorTable {
        &self.table
    }

    /// Number of value channels available for selection
    pub fn column_count(&self) -> usize {
        self.table.column_count()
    }

    /// Current viewport state
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Zoom in one step around the window center
    pub fn zoom_in_center(&mut self) {
        self.viewport.zoom_in_center();
    }

    /// Zoom in to a selection given as fractions of the current window
    pub fn zoom_in_selection(&mut self, start_frac: f64, length_frac: f64) {
        self.viewport.zoom_in_selection(start_frac, length_frac);
    }

    /// Zoom out one step
    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    /// Jump the window start to an absolute offset fraction
    pub fn pan(&mut self, fraction: f64) {
        self.viewport.pan(fraction);
    }

    /// Compute the frame for one redraw
    ///
    /// `column` selects the value channel and must be in range; `rect` is
    /// the drawable pixel rectangle and must have positive area. Grid tick
    /// lists are left empty when the options disable the grid.
    pub fn render(&self, column: usize, rect: PixelRect, options: &RenderOptions) -> RenderFrame {
        assert!(column < self.table.column_count(), "column {column} out of range");
        assert!(rect.is_valid(), "render rectangle must have positive area");

        tracing::trace!(
            column,
            offset = self.viewport.offset(),
            zoom = self.viewport.zoom(),
            width = rect.width(),
            height = rect.height(),
            "rendering chart frame"
        );

        let points = resample(&self.table, column, self.viewport, rect);
        let (time_ticks, value_ticks) = if options.show_grid {
            (
                time_grid(&self.table, self.viewport, rect.min_x, rect.max_x),
                value_grid(&self.table, column, rect.min_y, rect.max_y),
            )
        } else {
            (Vec::new(), Vec::new())
        };

        RenderFrame {
            points,
            time_ticks,
            value_ticks,
        }
    }
}
