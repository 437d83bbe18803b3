//! Nearest-neighbor resampling of sensor curves into pixel space
//!
//! [`resample`] turns one channel of a [`SensorTable`] into the polyline a
//! presentation layer draws: at most one point per output pixel column,
//! ordered by increasing X, with Y already flipped for a top-left origin.
//!
//! The pipeline runs in a fixed order; each stage consumes its input and
//! returns a new owned vector:
//!
//! 1. build the raw (time, value) points of the channel,
//! 2. scale Y into the pixel range using the channel's global extent (the
//!    same scale the value grid uses - this happens before cropping so the
//!    boundary interpolation below works on already-scaled Y),
//! 3. crop to the viewport's time window, interpolating exact points at the
//!    window edges,
//! 4. scale X into the pixel range,
//! 5. pick the nearest sample per integer pixel column and flip Y,
//! 6. append the final cropped sample so the right boundary is always
//!    represented.
//!
//! Stages assume the time column is monotonically non-decreasing, which the
//! ingestion layer guarantees.

use crate::table::SensorTable;
use crate::types::{PixelRect, Point};
use crate::viewport::Viewport;

/// Resample one channel into pixel-space points for the given viewport
///
/// Returns points with `x` in `[rect.min_x, rect.max_x]`, strictly
/// increasing, at most one per pixel column. Tables with fewer than two rows
/// have no curve to draw and yield an empty vector.
pub fn resample(
    table: &SensorTable,
    column: usize,
    viewport: Viewport,
    rect: PixelRect,
) -> Vec<Point> {
    let points = table.column_points(column);
    if points.len() < 2 {
        return Vec::new();
    }

    let full_range = points[points.len() - 1].x - points[0].x;
    let lower = full_range * viewport.offset() + points[0].x;
    let upper = lower + full_range * viewport.zoom();
    let pixel_height = (rect.max_y - rect.min_y) as f64;

    let points = scale_y(points, rect.min_y as f64, rect.max_y as f64);
    let points = crop(points, lower, upper);
    let points = scale_x(points, rect.min_x as f64, rect.max_x as f64);

    let mut out = nearest_per_column(&points, rect.max_x, pixel_height);

    // The per-column windows stop half a pixel short of the right edge;
    // emit the true last cropped sample so the boundary is always drawn.
    if points.len() > 1 {
        let last = points[points.len() - 1];
        out.push(Point::new(last.x, pixel_height - last.y));
    }
    out
}

/// Scale every Y coordinate into `[new_min, new_max]`
///
/// The source range is the extent of the input itself. A zero-spread input
/// maps onto the middle of the target range.
pub(crate) fn scale_y(mut points: Vec<Point>, new_min: f64, new_max: f64) -> Vec<Point> {
    let Some((cur_min, cur_max)) = bounds(points.iter().map(|p| p.y)) else {
        return points;
    };
    if cur_max - cur_min <= 0.0 {
        let mid = (new_min + new_max) / 2.0;
        for point in &mut points {
            point.y = mid;
        }
        return points;
    }
    for point in &mut points {
        point.scale_y(cur_min, cur_max, new_min, new_max);
    }
    points
}

/// Scale every X coordinate into `[new_min, new_max]`
pub(crate) fn scale_x(mut points: Vec<Point>, new_min: f64, new_max: f64) -> Vec<Point> {
    let Some((cur_min, cur_max)) = bounds(points.iter().map(|p| p.x)) else {
        return points;
    };
    if cur_max - cur_min <= 0.0 {
        let mid = (new_min + new_max) / 2.0;
        for point in &mut points {
            point.x = mid;
        }
        return points;
    }
    for point in &mut points {
        point.scale_x(cur_min, cur_max, new_min, new_max);
    }
    points
}

/// Crop a point list to the window `[lower, upper)`
///
/// Keeps the points inside the window plus one sample on each side: the
/// last point before `lower` (overwritten into slot 0) and the first point
/// at or past `upper`. The two edge slots are then replaced by linear
/// interpolations exactly at `lower` and `upper`, so the crop boundary is
/// exact instead of snapped to the nearest sample. With fewer than two
/// retained points the refinement is skipped.
pub(crate) fn crop(points: Vec<Point>, lower: f64, upper: f64) -> Vec<Point> {
    let mut kept: Vec<Point> = Vec::new();

    for point in points {
        if point.x < lower {
            if kept.is_empty() {
                kept.push(point);
            } else {
                kept[0] = point;
            }
        } else {
            kept.push(point);
            if point.x >= upper {
                break;
            }
        }
    }

    if kept.len() > 1 {
        kept[0] = interpolate_at(lower, kept[0], kept[1]);
        let len = kept.len();
        kept[len - 1] = interpolate_at(upper, kept[len - 2], kept[len - 1]);
    }

    kept
}

/// Linearly interpolate a point at `x` on the segment `before` -> `after`
fn interpolate_at(x: f64, before: Point, after: Point) -> Point {
    let slope = (after.y - before.y) / (after.x - before.x);
    Point::new(x, slope * (x - before.x) + before.y)
}

/// Pick the nearest sample per integer pixel column and flip Y
///
/// Column `i` owns the half-open window `(i - 0.5, i + 0.5)`; the sample
/// with the smallest `|x - i|` wins, first seen winning ties. Columns with
/// no sample emit nothing. Expects `points` sorted by X; successive windows
/// are disjoint, so a single forward cursor suffices.
pub(crate) fn nearest_per_column(points: &[Point], max_x: i32, pixel_height: f64) -> Vec<Point> {
    let mut out = Vec::new();
    let mut idx = 0;

    for column in 0..max_x.max(0) {
        let center = column as f64;
        while idx < points.len() && points[idx].x <= center - 0.5 {
            idx += 1;
        }

        let mut nearest: Option<Point> = None;
        let mut best_distance = f64::INFINITY;
        while idx < points.len() && points[idx].x < center + 0.5 {
            let distance = (points[idx].x - center).abs();
            if distance < best_distance {
                best_distance = distance;
                nearest = Some(points[idx]);
            }
            idx += 1;
        }

        if let Some(point) = nearest {
            out.push(Point::new(point.x, pixel_height - point.y));
        }
    }
    out
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((min, max)) => Some((min.min(v), max.max(v))),
    })
}
