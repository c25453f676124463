// File: crates/progress-core/src/store.rs
// Summary: Log store; one append-only CSV log per book inside a collection directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::book_key::{book_for_file_name, file_name_for};
use crate::clock::{observation_time, Clock, FixedOffsetClock};
use crate::error::{ProgressError, Result};
use crate::log_file::{create_log, read_log, write_log};
use crate::observation::{BookLog, Observation};

/// A resolved log: the book it belongs to and where it lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogHandle {
    book: String,
    path: PathBuf,
}

impl LogHandle {
    pub fn book(&self) -> &str { &self.book }
    pub fn path(&self) -> &Path { &self.path }
}

pub struct LogStore {
    dir: PathBuf,
    clock: Arc<dyn Clock>,
}

impl LogStore {
    /// Store over an existing collection directory, stamping with UTC+9.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_clock(dir, Arc::new(FixedOffsetClock::default()))
    }

    pub fn with_clock(dir: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self { dir: dir.into(), clock }
    }

    pub fn dir(&self) -> &Path { &self.dir }

    /// Every book with a log in the collection, sorted by name.
    pub fn books(&self) -> Result<Vec<String>> {
        let mut books = Vec::new();
        let entries = fs::read_dir(&self.dir).map_err(|source| ProgressError::CollectionUnreadable {
            path: self.dir.clone(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| ProgressError::CollectionUnreadable {
                path: self.dir.clone(),
                source,
            })?;
            let name = entry.file_name();
            let shown = name.to_string_lossy();
            match name.to_str().and_then(book_for_file_name) {
                Some(book) => books.push(book),
                // Staging files of an interrupted write.
                None if shown.starts_with(".tmp") => debug!(entry = %shown, "skipping leftover temporary"),
                None => warn!(entry = %shown, "skipping file that is not a progress log"),
            }
        }
        books.sort();
        Ok(books)
    }

    /// Handle for `book` if its log already exists. Never creates anything.
    pub fn find(&self, book: &str) -> Result<Option<LogHandle>> {
        if book.is_empty() {
            return Err(ProgressError::EmptyBookName);
        }
        let found = self.books()?.into_iter().any(|b| b == book);
        Ok(found.then(|| self.handle(book)))
    }

    /// Handle for `book`, creating an empty log (header only) if none exists.
    ///
    /// Creation never overwrites: a file already at the target path (another
    /// writer got there first, or a case-insensitive filesystem matched a
    /// differently cased book) is reported as an I/O error.
    pub fn resolve(&self, book: &str) -> Result<LogHandle> {
        if let Some(handle) = self.find(book)? {
            debug!(book, path = %handle.path.display(), "resolved existing log");
            return Ok(handle);
        }
        let handle = self.handle(book);
        create_log(&handle.path)?;
        info!(book, path = %handle.path.display(), "created empty progress log");
        Ok(handle)
    }

    pub fn load(&self, handle: &LogHandle) -> Result<BookLog> {
        let observations = read_log(&handle.path)?;
        Ok(BookLog::new(handle.book.clone(), handle.path.clone(), observations))
    }

    /// Append one observation stamped with the store's clock and rewrite the log.
    /// The returned log is exactly what was written.
    pub fn append(&self, handle: &LogHandle, progress: i64) -> Result<BookLog> {
        let mut log = self.load(handle)?;
        let observation = Observation::new(observation_time(self.clock.as_ref()), progress);
        log.push(observation);
        write_log(&handle.path, log.observations())?;
        debug!(book = %handle.book, progress, count = log.len(), "appended observation");
        Ok(log)
    }

    fn handle(&self, book: &str) -> LogHandle {
        LogHandle { book: book.to_owned(), path: self.dir.join(file_name_for(book)) }
    }
}
