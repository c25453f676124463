// File: crates/progress-chart/src/types.rs
// Summary: Canvas defaults and the margins reserved for title, captions, and tick labels.

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Space kept free around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Margins sized for text at `font_size`: y tick labels on the left, the
    /// title above, date ticks and the x caption below.
    pub fn for_font(font_size: f32) -> Self {
        let em = |n: f32| (font_size.max(1.0) * n).ceil() as u32;
        Self::new(em(5.5), em(2.0), em(4.0), em(5.0))
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::for_font(crate::Theme::paper().font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margins_scale_with_font() {
        assert_eq!(Insets::for_font(14.0), Insets::new(77, 28, 56, 70));
        let big = Insets::for_font(28.0);
        assert!(big.left > Insets::default().left && big.bottom > Insets::default().bottom);
    }
}
