//! Axis grid computation
//!
//! Produces the tick marks (grid-line pixel positions plus labels) a
//! presentation layer draws behind the chart:
//!
//! - [`nice_step`] - the "nice number" planner, choosing human-friendly tick
//!   intervals of the form {1, 2, 5} x 10^k
//! - [`time_grid`] - vertical grid lines over the visible time window
//! - [`value_grid`] - horizontal grid lines over a channel's global extent
//!
//! The time grid follows the viewport: panning or zooming changes which
//! multiples of the step fall inside the window. The value grid does not:
//! Y autoscale is global per channel, so its ticks only depend on the data.

use crate::table::SensorTable;
use crate::types::TickMark;
use crate::viewport::Viewport;

/// Tick-count target for the time (X) axis
pub const TIME_TICK_TARGET: usize = 12;

/// Tick-count target for the value (Y) axis
pub const VALUE_TICK_TARGET: usize = 8;

/// Threshold above which value labels switch to rounded integers
const INTEGER_LABEL_THRESHOLD: f64 = 5.0;

/// Choose a "nice" tick step for a range
///
/// Returns a step of the form {1, 2, 5} x 10^k sized so the tick count over
/// `range` stays near `target_count` without dropping below half of it.
/// `range` must be positive and `target_count` non-zero; violating either is
/// a caller bug.
pub fn nice_step(range: f64, target_count: usize) -> f64 {
    assert!(range > 0.0, "tick step range must be positive");
    assert!(target_count > 0, "tick target count must be non-zero");

    let exponent = (range / target_count as f64).log10().round();
    let magnitude = 10f64.powf(exponent);
    let ratio = range / magnitude;
    let half_target = (target_count / 2) as f64;

    // Widen the step only while the tick count stays strictly above half
    // the target; the first qualifying multiplier wins.
    if ratio > 5.0 && range / (magnitude * 10.0) > half_target {
        magnitude * 10.0
    } else if ratio > 2.0 && range / (magnitude * 5.0) > half_target {
        magnitude * 5.0
    } else if ratio > 1.0 && range / (magnitude * 2.0) > half_target {
        magnitude * 2.0
    } else {
        magnitude
    }
}

/// Compute the vertical grid lines for the visible time window
///
/// `min_x`/`max_x` bound the drawable pixel span. Ticks sit at multiples of
/// the nice step within the window the viewport maps to; labels are the
/// integer-truncated tick times. Empty and single-instant tables produce no
/// ticks.
pub fn time_grid(table: &SensorTable, viewport: Viewport, min_x: i32, max_x: i32) -> Vec<TickMark> {
    let Some((time_min, time_max)) = table.time_bounds() else {
        return Vec::new();
    };
    let full_range = time_max - time_min;
    if full_range <= 0.0 {
        return Vec::new();
    }

    let visible_range = full_range * viewport.zoom();
    let px_per_unit = (max_x - min_x) as f64 / visible_range;
    let step = nice_step(visible_range, TIME_TICK_TARGET);

    let window_start = full_range * viewport.offset() + time_min;
    let mut tick = window_start + step - window_start % step;

    let mut marks = Vec::new();
    while tick < window_start + visible_range {
        let position = min_x + ((tick - window_start) * px_per_unit).round() as i32;
        marks.push(TickMark::new(position, format!("{}", tick as i64)));
        tick += step;
    }
    marks
}

/// Compute the horizontal grid lines for one value channel
///
/// Ticks descend from the channel's global maximum in nice steps, anchored
/// at multiples of the step. Labels are half-up rounded integers for
/// magnitudes above 5, two-decimal fixed text otherwise. Channels with no spread
/// produce no ticks; an out-of-range column index is a caller bug.
pub fn value_grid(table: &SensorTable, column: usize, min_y: i32, max_y: i32) -> Vec<TickMark> {
    let Some((value_min, value_max)) = table.value_bounds(column) else {
        return Vec::new();
    };
    let span = value_max - value_min;
    if span <= 0.0 {
        return Vec::new();
    }

    let px_per_unit = (max_y - min_y) as f64 / span;
    let step = nice_step(span, VALUE_TICK_TARGET);

    let mut from_top = value_max % step;
    let mut marks = Vec::new();
    while from_top < span {
        let value = value_max - from_top;
        let label = if value.abs() > INTEGER_LABEL_THRESHOLD {
            // Half-up rounding: -5.5 labels as -5, not -6.
            format!("{}", (value + 0.5).floor() as i64)
        } else {
            format!("{value:.2}")
        };
        marks.push(TickMark::new(
            min_y + (from_top * px_per_unit).round() as i32,
            label,
        ));
        from_top += step;
    }
    marks
}
