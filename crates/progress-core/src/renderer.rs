// File: crates/progress-core/src/renderer.rs
// Summary: Turns a BookLog into a dated PNG line chart.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use progress_chart::{even_ticks, Axis, Chart, RenderOptions, Series, Theme, Tick};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::clock::{Clock, FixedOffsetClock};
use crate::error::{ProgressError, Result};
use crate::observation::BookLog;

/// Most date ticks drawn on the x axis, however long the log.
pub const MAX_DATE_TICKS: usize = 10;

/// Canvas size of the rendered chart. Colors and strokes are fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub width: i32,
    pub height: i32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self { width: progress_chart::types::WIDTH, height: progress_chart::types::HEIGHT }
    }
}

impl ChartStyle {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            theme: Theme::paper(),
            ..RenderOptions::default()
        }
    }
}

pub struct ChartRenderer {
    options: RenderOptions,
    clock: Arc<dyn Clock>,
}

impl Default for ChartRenderer {
    fn default() -> Self { Self::new(ChartStyle::default()) }
}

impl ChartRenderer {
    pub fn new(style: ChartStyle) -> Self {
        Self::with_clock(style.render_options(), Arc::new(FixedOffsetClock::default()))
    }

    pub fn with_clock(options: RenderOptions, clock: Arc<dyn Clock>) -> Self {
        Self { options, clock }
    }

    pub fn options(&self) -> &RenderOptions { &self.options }

    /// `YYYY-MM-DD.png` for today on the renderer's clock.
    pub fn artifact_name(&self) -> String {
        format!("{}.png", self.clock.now().format("%Y-%m-%d"))
    }

    /// Chart model for `log`: one marked line, one point per observation in log
    /// order, x at the observation's position, `MM-DD` date ticks.
    pub fn build_chart(&self, log: &BookLog) -> Result<Chart> {
        if log.is_empty() {
            return Err(ProgressError::EmptyLog { book: log.book().to_owned() });
        }
        let observations = log.observations();
        let points = observations
            .iter()
            .enumerate()
            .map(|(i, obs)| (i as f64, obs.progress as f64))
            .collect();
        let ticks = even_ticks(observations.len(), MAX_DATE_TICKS)
            .into_iter()
            .map(|i| Tick::new(i as f64, observations[i].month_day_label()))
            .collect();

        let mut chart = Chart::new().with_title(log.book());
        chart.x_axis = Axis::default_x().with_ticks(ticks);
        chart.y_axis = Axis::default_y();
        chart.add_series(Series::line(points).with_markers());
        chart.autoscale_axes(0.5);
        Ok(chart)
    }

    /// Render `log` into `chart_dir`, replacing today's chart if present.
    pub fn render(&self, log: &BookLog, chart_dir: &Path) -> Result<PathBuf> {
        let bytes = self.build_chart(log)?.render_to_png_bytes(&self.options)?;
        let path = chart_dir.join(self.artifact_name());
        fs::write(&path, bytes).map_err(|e| ProgressError::io(&path, e))?;
        info!(book = log.book(), points = log.len(), path = %path.display(), "rendered progress chart");
        Ok(path)
    }
}
