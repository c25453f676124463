// File: crates/progress-core/src/config.rs
// Summary: TOML configuration for collection directories, clock offset, and chart size.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::clock::{FixedOffsetClock, DEFAULT_UTC_OFFSET_HOURS};
use crate::error::{ProgressError, Result};
use crate::renderer::ChartStyle;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding one CSV log per book.
    pub log_dir: PathBuf,
    /// Directory receiving the dated PNG charts.
    pub chart_dir: PathBuf,
    pub utc_offset_hours: i32,
    pub chart: ChartStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("progress_report_csv"),
            chart_dir: PathBuf::from("progress_report_graph"),
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            chart: ChartStyle::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ProgressError::io(path, e))?;
        Self::from_toml_str(&text)
            .map_err(|e| ProgressError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| ProgressError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn clock(&self) -> Result<FixedOffsetClock> {
        FixedOffsetClock::from_hours(self.utc_offset_hours)
    }

    fn validate(&self) -> Result<()> {
        if self.chart.width <= 0 || self.chart.height <= 0 {
            return Err(ProgressError::Config(format!(
                "chart size must be positive, got {}x{}",
                self.chart.width, self.chart.height
            )));
        }
        self.clock().map(|_| ())
    }
}
