// File: crates/progress-chart/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

use crate::geometry::PlotRect;
use crate::Axis;

/// Maps the data range [vmin, vmax] onto the pixel range [px_start, px_end].
/// Pixel ranges may run backwards (Y grows downward on screen).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px_start: f32,
    pub px_end: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(px_start: f32, px_end: f32, vmin: f64, mut vmax: f64) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { px_start, px_end, vmin, vmax }
    }

    pub fn horizontal(rect: &PlotRect, axis: &Axis) -> Self {
        Self::new(rect.left, rect.right, axis.min, axis.max)
    }

    pub fn vertical(rect: &PlotRect, axis: &Axis) -> Self {
        Self::new(rect.bottom, rect.top, axis.min, axis.max)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.px_start + t as f32 * (self.px_end - self.px_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_scale_is_flipped() {
        let rect = PlotRect { left: 0.0, top: 10.0, right: 100.0, bottom: 110.0 };
        let s = LinearScale::vertical(&rect, &Axis::new("Y", 0.0, 50.0));
        assert_eq!(s.to_px(0.0), 110.0);
        assert_eq!(s.to_px(50.0), 10.0);
        assert_eq!(s.to_px(25.0), 60.0);
    }

    #[test]
    fn degenerate_range_is_widened() {
        let s = LinearScale::new(0.0, 100.0, 3.0, 3.0);
        assert_eq!(s.to_px(3.0), 0.0);
        assert_eq!(s.to_px(4.0), 100.0);
    }
}
