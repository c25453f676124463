// File: crates/progress-core/src/pipeline.rs
// Summary: resolve -> append -> render, as one synchronous call per request.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info_span;

use crate::clock::{Clock, FixedOffsetClock};
use crate::config::Config;
use crate::error::{ProgressError, Result};
use crate::locks::BookLocks;
use crate::observation::BookLog;
use crate::renderer::{ChartRenderer, ChartStyle};
use crate::store::LogStore;

/// Outcome of recording one observation.
#[derive(Clone, Debug)]
pub struct Report {
    pub log: BookLog,
    pub chart_path: PathBuf,
}

/// Log store, chart renderer, and the locks that keep concurrent requests for
/// the same book from losing each other's appends.
pub struct ProgressReport {
    store: LogStore,
    renderer: ChartRenderer,
    chart_dir: PathBuf,
    books: BookLocks,
    // Every book renders to the same dated file name.
    chart_lock: Mutex<()>,
}

impl ProgressReport {
    pub fn new(log_dir: impl Into<PathBuf>, chart_dir: impl Into<PathBuf>, style: ChartStyle) -> Self {
        Self::with_clock(log_dir, chart_dir, style, Arc::new(FixedOffsetClock::default()))
    }

    pub fn with_clock(
        log_dir: impl Into<PathBuf>,
        chart_dir: impl Into<PathBuf>,
        style: ChartStyle,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store: LogStore::with_clock(log_dir, Arc::clone(&clock)),
            renderer: ChartRenderer::with_clock(style.render_options(), clock),
            chart_dir: chart_dir.into(),
            books: BookLocks::new(),
            chart_lock: Mutex::new(()),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let clock = Arc::new(config.clock()?);
        Ok(Self::with_clock(&config.log_dir, &config.chart_dir, config.chart, clock))
    }

    pub fn store(&self) -> &LogStore { &self.store }

    pub fn renderer(&self) -> &ChartRenderer { &self.renderer }

    pub fn chart_dir(&self) -> &Path { &self.chart_dir }

    /// Append `progress` to `book`'s log (creating it if needed) and redraw the chart.
    pub fn record(&self, book: &str, progress: i64) -> Result<Report> {
        let _span = info_span!("record", book, progress).entered();
        let log = self.books.with_book(book, || {
            let handle = self.store.resolve(book)?;
            self.store.append(&handle, progress)
        })?;
        let chart_path = self.draw(&log)?;
        Ok(Report { log, chart_path })
    }

    /// Redraw today's chart from `book`'s existing log without appending.
    pub fn redraw(&self, book: &str) -> Result<PathBuf> {
        let _span = info_span!("redraw", book).entered();
        let log = self.books.with_book(book, || {
            let handle = self
                .store
                .find(book)?
                .ok_or_else(|| ProgressError::EmptyLog { book: book.to_owned() })?;
            self.store.load(&handle)
        })?;
        self.draw(&log)
    }

    fn draw(&self, log: &BookLog) -> Result<PathBuf> {
        let _guard = self.chart_lock.lock();
        self.renderer.render(log, &self.chart_dir)
    }
}

/// Record `progress` for `book` with default styling and the UTC+9 clock,
/// returning the path of the regenerated chart.
pub fn process(book: &str, progress: i64, log_dir: &Path, chart_dir: &Path) -> Result<PathBuf> {
    ProgressReport::new(log_dir, chart_dir, ChartStyle::default())
        .record(book, progress)
        .map(|report| report.chart_path)
}
