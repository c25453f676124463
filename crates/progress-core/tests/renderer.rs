// File: crates/progress-core/tests/renderer.rs
// Purpose: Chart artifacts derived from progress logs.

use std::sync::Arc;

use chrono::DateTime;
use progress_core::{BookLog, ChartRenderer, ChartStyle, FixedClock, Observation, ProgressError};

fn obs(ts: &str, progress: i64) -> Observation {
    Observation::new(DateTime::parse_from_rfc3339(ts).unwrap(), progress)
}

fn renderer_at(ts: &str) -> ChartRenderer {
    let clock = Arc::new(FixedClock(DateTime::parse_from_rfc3339(ts).unwrap()));
    ChartRenderer::with_clock(ChartStyle { width: 480, height: 320 }.render_options(), clock)
}

fn sample_log(n: usize) -> BookLog {
    let observations = (0..n)
        .map(|i| obs(&format!("2026-09-{:02}T20:00:00+09:00", 1 + i % 30), (i * 10) as i64))
        .collect();
    BookLog::new("Dune", "Dune.csv", observations)
}

#[test]
fn chart_has_one_point_per_observation_in_order() {
    let log = BookLog::new(
        "Dune",
        "Dune.csv",
        vec![
            obs("2026-10-17T08:00:00+09:00", 50),
            obs("2026-10-18T08:00:00+09:00", 30),
            obs("2026-10-19T08:00:00+09:00", 120),
        ],
    );
    let chart = renderer_at("2026-10-19T12:00:00+09:00").build_chart(&log).unwrap();

    assert_eq!(chart.series.len(), 1);
    let ys: Vec<f64> = chart.series[0].data_xy.iter().map(|&(_, y)| y).collect();
    assert_eq!(ys, vec![50.0, 30.0, 120.0]);
    let labels: Vec<&str> = chart.x_axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["10-17", "10-18", "10-19"]);
    assert_eq!(chart.title.as_deref(), Some("Dune"));
}

#[test]
fn long_logs_get_at_most_ten_date_ticks() {
    let chart = renderer_at("2026-10-19T12:00:00+09:00").build_chart(&sample_log(60)).unwrap();
    assert_eq!(chart.series[0].data_xy.len(), 60);
    assert_eq!(chart.x_axis.ticks.len(), 10);
    assert_eq!(chart.x_axis.ticks.first().unwrap().label, "09-01");
}

#[test]
fn artifact_is_named_by_the_current_date() {
    let dir = tempfile::tempdir().unwrap();
    // Late evening UTC is already the next day in UTC+9.
    let clock = Arc::new(FixedClock(
        DateTime::parse_from_rfc3339("2026-10-19T16:00:00Z")
            .unwrap()
            .with_timezone(&chrono::FixedOffset::east_opt(9 * 3600).unwrap()),
    ));
    let renderer = ChartRenderer::with_clock(ChartStyle::default().render_options(), clock);

    let path = renderer.render(&sample_log(3), dir.path()).unwrap();
    assert_eq!(path, dir.path().join("2026-10-20.png"));

    let img = image::open(&path).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (1024, 640));
}

#[test]
fn same_day_renders_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = renderer_at("2026-10-19T12:00:00+09:00");
    let first = renderer.render(&sample_log(2), dir.path()).unwrap();
    let second = renderer.render(&sample_log(5), dir.path()).unwrap();
    assert_eq!(first, second);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn empty_log_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = renderer_at("2026-10-19T12:00:00+09:00")
        .render(&BookLog::new("Dune", "Dune.csv", Vec::new()), dir.path())
        .unwrap_err();
    assert!(matches!(err, ProgressError::EmptyLog { ref book } if book == "Dune"), "{err}");
}

#[test]
fn missing_chart_dir_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = renderer_at("2026-10-19T12:00:00+09:00")
        .render(&sample_log(2), &dir.path().join("nope"))
        .unwrap_err();
    assert!(matches!(err, ProgressError::Io { .. }), "{err}");
}

#[test]
fn failed_chart_write_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    // Today's artifact name is taken by a directory, so the write itself fails.
    std::fs::create_dir(dir.path().join("2026-10-19.png")).unwrap();
    let err = renderer_at("2026-10-19T12:00:00+09:00")
        .render(&sample_log(2), dir.path())
        .unwrap_err();
    match err {
        ProgressError::Io { path, .. } => assert_eq!(path, dir.path().join("2026-10-19.png")),
        other => panic!("unexpected error: {other}"),
    }
}
