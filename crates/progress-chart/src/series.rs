// File: crates/progress-chart/src/series.rs
// Summary: Line series model: ordered (x, y) points with optional point markers.

#[derive(Clone, Debug, Default)]
pub struct Series {
    pub data_xy: Vec<(f64, f64)>,
    /// Draw a dot at every point; keeps single-point series visible.
    pub markers: bool,
}

impl Series {
    pub fn line(data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, markers: false }
    }

    pub fn with_markers(mut self) -> Self {
        self.markers = true;
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// (min, max) of x and y, or `None` when no point is finite.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        for &(px, py) in self.data_xy.iter().filter(|(a, b)| a.is_finite() && b.is_finite()) {
            x = (x.0.min(px), x.1.max(px));
            y = (y.0.min(py), y.1.max(py));
        }
        x.0.is_finite().then_some((x, y))
    }
}
