//! End-to-end tests over the whole pipeline: log file to render frame

mod common;

use std::sync::Arc;

use common::{assert_close, init_tracing, write_sensor_log, TableBuilder};
use wearvis_rs::{read_sensor_log, ChartModel, PixelRect, RenderOptions, Viewport};

#[test]
fn test_log_file_to_render_frame() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let mut content = String::from("time;hr\n0.0;60\n");
    for i in 1..=120 {
        content.push_str(&format!("1.0;{}\n", 60 + i % 30));
    }
    let path = write_sensor_log(&dir, "session.log", &content);

    let table = Arc::new(read_sensor_log(&path).unwrap());
    assert_eq!(table.row_count(), 121);
    assert_close(table.time(120), 120.0);

    let model = ChartModel::full_view(table);
    let rect = PixelRect::new(0, 400, 0, 200);
    let frame = model.render(0, rect, &RenderOptions::default());

    assert!(!frame.points.is_empty());
    assert!(frame.points.len() <= 401);
    for point in &frame.points {
        assert!(point.x >= 0.0 && point.x <= 400.0);
        assert!(point.y >= 0.0 && point.y <= 200.0);
    }
    // Range 120 with target 12 gives step 10, so ticks land on multiples
    // of 10 inside (0, 120).
    assert_eq!(frame.time_ticks.len(), 11);
    assert_eq!(frame.time_ticks[0].label, "10");
}

#[test]
fn test_zoom_sequence_narrows_then_recovers() {
    init_tracing();
    let table = TableBuilder::sine_sweep("sweep", 1000).build();
    let mut model = ChartModel::full_view(table);
    let rect = PixelRect::new(0, 500, 0, 300);

    model.zoom_in_selection(0.4, 0.2);
    assert_eq!(model.viewport(), Viewport::new(0.4, 0.2));
    let zoomed = model.render(0, rect, &RenderOptions::default());
    assert!(!zoomed.points.is_empty());

    model.pan(0.7);
    assert_close(model.viewport().offset(), 0.7);

    // Zooming out far enough always lands back at the full view.
    for _ in 0..32 {
        model.zoom_out();
    }
    assert_eq!(model.viewport(), Viewport::full());

    let full = model.render(0, rect, &RenderOptions::default());
    assert!(!full.points.is_empty());
    // The value grid is global per channel, so it matches the zoomed frame.
    assert_eq!(full.value_ticks, zoomed.value_ticks);
}

#[test]
fn test_triaxial_channels_render_independently() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let mut content = String::from("time;x;y;z\n0.0;0;0;0\n");
    for i in 1..=50 {
        content.push_str(&format!("0.02;{};{};{}\n", i, -i, i * 2));
    }
    let path = write_sensor_log(&dir, "acc.log", &content);

    let table = Arc::new(read_sensor_log(&path).unwrap());
    let model = ChartModel::full_view(table);
    let rect = PixelRect::new(0, 200, 0, 100);

    let frames: Vec<_> = (0..3)
        .map(|column| model.render(column, rect, &RenderOptions::default()))
        .collect();
    // All channels share the time axis but autoscale Y independently.
    assert_eq!(frames[0].time_ticks, frames[1].time_ticks);
    assert_ne!(frames[0].value_ticks, frames[2].value_ticks);

    // Channel 0 rises, channel 1 falls: their pixel polylines mirror.
    assert!(frames[0].points.first().unwrap().y > frames[0].points.last().unwrap().y);
    assert!(frames[1].points.first().unwrap().y < frames[1].points.last().unwrap().y);
}

#[test]
fn test_tiny_tables_render_without_grid_or_points() {
    init_tracing();
    let table = TableBuilder::new("single", 1).row(5.0, &[1.0]).build();
    let model = ChartModel::full_view(table);
    let frame = model.render(0, PixelRect::new(0, 100, 0, 100), &RenderOptions::default());

    assert!(frame.points.is_empty());
    assert!(frame.time_ticks.is_empty());
    assert!(frame.value_ticks.is_empty());
}

#[test]
fn test_render_options_persist_between_sessions() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("render.json");

    let mut options = RenderOptions::load_or_default(&path);
    assert_eq!(options, RenderOptions::default());

    options.show_grid = false;
    options.save(&path).unwrap();

    let reloaded = RenderOptions::load(&path).unwrap();
    assert!(!reloaded.show_grid);

    let table = TableBuilder::sine_sweep("sweep", 100).build();
    let frame = ChartModel::full_view(table).render(0, PixelRect::new(0, 100, 0, 100), &reloaded);
    assert!(frame.time_ticks.is_empty());
    assert!(!frame.points.is_empty());
}
