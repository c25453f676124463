// File: crates/progress-chart/src/axis.rs
// Summary: Axis model with caption, range, and optional explicit tick labels.

use crate::grid::{format_tick, linspace};

/// A labelled position along an axis, in data coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

impl Tick {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self { value, label: label.into() }
    }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Explicit ticks; when empty, evenly spaced numeric ticks are generated.
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: Vec::new() }
    }

    pub fn default_x() -> Self {
        Self::new("Date", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Progress", 0.0, 100.0)
    }

    pub fn with_ticks(mut self, ticks: Vec<Tick>) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    /// Explicit ticks inside the range, or `count` numeric ticks from min to max.
    pub fn resolved_ticks(&self, count: usize) -> Vec<Tick> {
        if !self.ticks.is_empty() {
            let (lo, hi) = (self.min.min(self.max), self.min.max(self.max));
            return self
                .ticks
                .iter()
                .filter(|t| t.value >= lo && t.value <= hi)
                .cloned()
                .collect();
        }
        let span = self.span();
        linspace(self.min, self.max, count)
            .into_iter()
            .map(|v| Tick::new(v, format_tick(v, span)))
            .collect()
    }
}
