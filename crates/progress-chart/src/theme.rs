// File: crates/progress-chart/src/theme.rs
// Summary: The fixed chart palette and stroke sizes, passed explicitly to rendering.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub line_stroke: skia::Color,
    pub marker: skia::Color,
    pub line_width: f32,
    pub marker_radius: f32,
    pub font_size: f32,
}

impl Theme {
    /// Muted blue line on a gray plot area with white grid lines.
    pub fn paper() -> Self {
        Self {
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 234, 234, 242),
            grid: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 200, 200, 210),
            axis_label: skia::Color::from_argb(255, 38, 38, 38),
            tick: skia::Color::from_argb(255, 80, 80, 90),
            title: skia::Color::from_argb(255, 20, 20, 30),
            line_stroke: skia::Color::from_argb(255, 76, 114, 176),
            marker: skia::Color::from_argb(255, 76, 114, 176),
            line_width: 2.0,
            marker_radius: 3.5,
            font_size: 14.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::paper() }
}
