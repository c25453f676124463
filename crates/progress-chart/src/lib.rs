// File: crates/progress-chart/src/lib.rs
// Summary: Library entry point; exports the chart model and PNG rendering API.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;

pub use chart::{Chart, RenderOptions};
pub use series::Series;
pub use axis::{Axis, Tick};
pub use grid::even_ticks;
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
