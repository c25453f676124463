// File: crates/progress-core/src/lib.rs
// Summary: Reading-progress logs per book and the charts derived from them.

pub mod book_key;
pub mod clock;
pub mod config;
pub mod error;
pub mod locks;
pub mod log_file;
pub mod observation;
pub mod pipeline;
pub mod renderer;
pub mod store;

pub use clock::{Clock, FixedClock, FixedOffsetClock};
pub use config::Config;
pub use error::{ProgressError, Result};
pub use observation::{BookLog, Observation};
pub use pipeline::{process, ProgressReport, Report};
pub use renderer::{ChartRenderer, ChartStyle};
pub use store::{LogHandle, LogStore};
