// File: crates/progress-chart/src/view.rs
// Visible data ranges derived from a chart's series (autoscale).

use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Fit every series. `x_pad` is added on both sides of the X range;
    /// Y gets a 5% margin. Degenerate spans are widened so scales stay finite.
    pub fn from_chart(chart: &Chart, x_pad: f64) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for ((sx0, sx1), (sy0, sy1)) in chart.series.iter().filter_map(|s| s.bounds()) {
            x_min = x_min.min(sx0);
            x_max = x_max.max(sx1);
            y_min = y_min.min(sy0);
            y_max = y_max.max(sy1);
        }
        if !x_min.is_finite() || !y_min.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        x_min -= x_pad;
        x_max += x_pad;
        if (x_max - x_min).abs() < 1e-9 {
            x_min -= 0.5;
            x_max += 0.5;
        }
        if (y_max - y_min).abs() < 1e-9 {
            return Self { x_min, x_max, y_min: y_min - 1.0, y_max: y_max + 1.0 };
        }
        let ym = (y_max - y_min) * 0.05;
        Self { x_min, x_max, y_min: y_min - ym, y_max: y_max + ym }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}
