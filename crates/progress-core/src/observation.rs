// File: crates/progress-core/src/observation.rs
// Summary: Observation and BookLog models.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, FixedOffset};

/// One timestamped cumulative progress value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    pub timestamp: DateTime<FixedOffset>,
    pub progress: i64,
}

impl Observation {
    pub fn new(timestamp: DateTime<FixedOffset>, progress: i64) -> Self {
        Self { timestamp, progress }
    }

    /// `MM-DD` in the timestamp's own offset, used for chart ticks.
    pub fn month_day_label(&self) -> String {
        format!("{:02}-{:02}", self.timestamp.month(), self.timestamp.day())
    }
}

/// The full ordered history for one book, as stored on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookLog {
    book: String,
    path: PathBuf,
    observations: Vec<Observation>,
}

impl BookLog {
    pub fn new(book: impl Into<String>, path: impl Into<PathBuf>, observations: Vec<Observation>) -> Self {
        Self { book: book.into(), path: path.into(), observations }
    }

    pub fn book(&self) -> &str { &self.book }

    pub fn path(&self) -> &Path { &self.path }

    pub fn observations(&self) -> &[Observation] { &self.observations }

    pub fn len(&self) -> usize { self.observations.len() }

    pub fn is_empty(&self) -> bool { self.observations.is_empty() }

    pub fn last(&self) -> Option<&Observation> { self.observations.last() }

    pub(crate) fn push(&mut self, observation: Observation) {
        self.observations.push(observation);
    }
}
