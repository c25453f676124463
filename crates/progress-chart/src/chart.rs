// File: crates/progress-chart/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::axis::Tick;
use crate::geometry::PlotRect;
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw title, captions, and tick labels. Off gives font-independent pixels.
    pub draw_labels: bool,
    /// Number of numeric ticks on the Y axis.
    pub y_ticks: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            y_ticks: 6,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis ranges to the data, padding X by `x_pad` on each side.
    pub fn autoscale_axes(&mut self, x_pad: f64) {
        ViewState::from_chart(self, x_pad).apply_to_chart(self);
    }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        self.draw(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, replacing any existing file.
    /// The parent directory must already exist.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let rect = PlotRect::inside(opts.width, opts.height, &opts.insets);
        let sx = LinearScale::horizontal(&rect, &self.x_axis);
        let sy = LinearScale::vertical(&rect, &self.y_axis);
        let x_ticks = self.x_axis.resolved_ticks(2);
        let y_ticks = self.y_axis.resolved_ticks(opts.y_ticks);

        draw_plot_area(canvas, &rect, theme, &sx, &sy, &x_ticks, &y_ticks);
        for s in &self.series {
            draw_line_series(canvas, theme, &sx, &sy, s);
        }

        if opts.draw_labels {
            let text = TextShaper::new();
            draw_labels(canvas, &text, &rect, theme, &sx, &sy, &x_ticks, &y_ticks, self);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn draw_plot_area(
    canvas: &skia::Canvas,
    rect: &PlotRect,
    theme: &Theme,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[Tick],
    y_ticks: &[Tick],
) {
    let (l, t, r, b) = (rect.left, rect.top, rect.right, rect.bottom);
    canvas.draw_rect(skia::Rect::from_ltrb(l, t, r, b), &fill(theme.plot_background));

    let grid = stroke(theme.grid, 1.0);
    for tick in x_ticks {
        let x = sx.to_px(tick.value);
        canvas.draw_line((x, t), (x, b), &grid);
    }
    for tick in y_ticks {
        let y = sy.to_px(tick.value);
        canvas.draw_line((l, y), (r, y), &grid);
    }

    let axis = stroke(theme.axis_line, 1.5);
    canvas.draw_line((l, b), (r, b), &axis);
    canvas.draw_line((l, t), (l, b), &axis);
}

fn draw_line_series(
    canvas: &skia::Canvas,
    theme: &Theme,
    sx: &LinearScale,
    sy: &LinearScale,
    series: &Series,
) {
    let data = &series.data_xy;
    if data.len() >= 2 {
        let mut builder = skia::PathBuilder::new();
        let (x0, y0) = data[0];
        builder.move_to((sx.to_px(x0), sy.to_px(y0)));
        for &(x, y) in data.iter().skip(1) {
            builder.line_to((sx.to_px(x), sy.to_px(y)));
        }
        let path = builder.detach();
        canvas.draw_path(&path, &stroke(theme.line_stroke, theme.line_width));
    }

    if series.markers {
        let dot = fill(theme.marker);
        for &(x, y) in data {
            canvas.draw_circle((sx.to_px(x), sy.to_px(y)), theme.marker_radius, &dot);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_labels(
    canvas: &skia::Canvas,
    text: &TextShaper,
    rect: &PlotRect,
    theme: &Theme,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[Tick],
    y_ticks: &[Tick],
    chart: &Chart,
) {
    let size = theme.font_size;
    let small = size * 0.85;

    for tick in x_ticks {
        text.draw_centered(canvas, &tick.label, sx.to_px(tick.value), rect.bottom + small + 8.0, small, theme.tick, true);
    }
    for tick in y_ticks {
        text.draw_right(canvas, &tick.label, rect.left - 8.0, sy.to_px(tick.value) + small * 0.35, small, theme.tick, true);
    }

    let cx = rect.left + rect.width() * 0.5;
    text.draw_centered(canvas, &chart.x_axis.label, cx, rect.bottom + small + size + 22.0, size, theme.axis_label, false);
    text.draw_left(canvas, &chart.y_axis.label, 12.0, rect.top - 12.0, size, theme.axis_label, false);

    if let Some(title) = &chart.title {
        text.draw_centered(canvas, title, cx, rect.top - 24.0, size * 1.2, theme.title, false);
    }
}
