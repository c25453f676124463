// File: crates/progress-chart/src/geometry.rs
// Summary: Plot rectangle in pixel space, derived from canvas size and insets.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    /// Area left over after removing `insets` from a `width` x `height` canvas.
    /// Collapses to a zero-sized rect instead of inverting when insets exceed the canvas.
    pub fn inside(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width as f32 - insets.right as f32).max(left);
        let bottom = (height as f32 - insets.bottom as f32).max(top);
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insets_are_removed_from_canvas() {
        let r = PlotRect::inside(200, 100, &Insets::new(10, 20, 5, 15));
        assert_eq!(r, PlotRect { left: 10.0, top: 5.0, right: 180.0, bottom: 85.0 });
        assert_eq!(r.width(), 170.0);
        assert_eq!(r.height(), 80.0);
    }

    #[test]
    fn oversized_insets_collapse() {
        let r = PlotRect::inside(50, 50, &Insets::new(40, 40, 40, 40));
        assert_eq!(r.width(), 0.0);
        assert_eq!(r.height(), 0.0);
    }
}
