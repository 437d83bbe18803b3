//! WearVis-RS: chart data transformation for wearable sensor recordings
//!
//! This crate turns raw wearable sensor logs into everything a chart panel
//! needs to draw, without drawing anything itself:
//!
//! - [`reader`] - parses semicolon-delimited sensor logs into a
//!   [`SensorTable`], converting relative timestamps to absolute ones
//! - [`viewport`] - the offset/zoom window over the time axis, with the
//!   zoom and pan transitions user gestures map onto
//! - [`resample`] - the nearest-neighbor resampler reducing a visible
//!   window to at most one point per pixel column
//! - [`grid`] - "nice number" tick planning for the time and value axes
//! - [`chart`] - the [`ChartModel`] facade tying table, viewport and
//!   pipeline together per redraw
//! - [`config`] - persisted [`RenderOptions`]
//!
//! # Example
//!
//! ```no_run
//! use wearvis_rs::{ChartModel, PixelRect, RenderOptions};
//! use std::sync::Arc;
//!
//! # fn main() -> wearvis_rs::Result<()> {
//! let table = Arc::new(wearvis_rs::read_sensor_log("walk.log")?);
//! let mut model = ChartModel::full_view(table);
//! model.zoom_in_selection(0.25, 0.5);
//!
//! let frame = model.render(0, PixelRect::new(0, 800, 0, 400), &RenderOptions::default());
//! for segment in frame.points.windows(2) {
//!     let (from, to) = (segment[0], segment[1]);
//!     // draw a line from `from` to `to`
//!     let _ = (from, to);
//! }
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod grid;
pub mod reader;
pub mod resample;
pub mod table;
pub mod types;
pub mod viewport;

pub use chart::{ChartModel, RenderFrame};
pub use config::RenderOptions;
pub use error::{Result, WearVisError};
pub use grid::{nice_step, time_grid, value_grid};
pub use reader::read_sensor_log;
pub use resample::resample;
pub use table::SensorTable;
pub use types::{PixelRect, Point, TickMark};
pub use viewport::{Viewport, MIN_ZOOM_STEP};
