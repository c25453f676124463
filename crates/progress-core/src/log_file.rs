// File: crates/progress-core/src/log_file.rs
// Summary: CSV encoding of a progress log (header `timestamp,progress`).

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, SecondsFormat};
use tempfile::NamedTempFile;

use crate::error::{ProgressError, Result};
use crate::observation::Observation;

pub const TIMESTAMP_COLUMN: &str = "timestamp";
pub const PROGRESS_COLUMN: &str = "progress";

/// Text form of a timestamp in the log: RFC 3339, microseconds, explicit offset.
pub fn format_timestamp(ts: &DateTime<chrono::FixedOffset>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Read every observation from the log at `path`.
///
/// Columns are located by header name. Extra columns (a leading unnamed index,
/// say) are ignored; a missing required column is a schema error.
pub fn read_log(path: &Path) -> Result<Vec<Observation>> {
    let file = File::open(path).map_err(|e| ProgressError::io(path, e))?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(file);

    let headers = rdr.headers().map_err(|e| ProgressError::csv(path, e))?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| ProgressError::schema(path, format!("missing `{name}` column")))
    };
    let i_ts = column(TIMESTAMP_COLUMN)?;
    let i_progress = column(PROGRESS_COLUMN)?;

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.map_err(|e| ProgressError::csv(path, e))?;
        // Row numbers count the header as line 1.
        let line = row + 2;
        let field = |i: usize| rec.get(i).map(str::trim).unwrap_or_default();

        let timestamp = DateTime::parse_from_rfc3339(field(i_ts)).map_err(|e| {
            ProgressError::schema(path, format!("line {line}: bad timestamp {:?}: {e}", field(i_ts)))
        })?;
        let progress = field(i_progress).parse::<i64>().map_err(|e| {
            ProgressError::schema(path, format!("line {line}: bad progress {:?}: {e}", field(i_progress)))
        })?;
        out.push(Observation::new(timestamp, progress));
    }
    Ok(out)
}

/// Replace the log at `path` with `observations`.
///
/// Writes a temporary file next to the target and renames it into place, so
/// readers never observe a half-written log.
pub fn write_log(path: &Path, observations: &[Observation]) -> Result<()> {
    stage(path, observations)?
        .persist(path)
        .map_err(|e| ProgressError::io(path, e.error))?;
    Ok(())
}

/// Create a header-only log at `path`. Never replaces an existing file: if
/// anything already sits at `path` this fails with `AlreadyExists`.
pub fn create_log(path: &Path) -> Result<()> {
    stage(path, &[])?
        .persist_noclobber(path)
        .map_err(|e| ProgressError::io(path, e.error))?;
    Ok(())
}

/// Fully written and synced temporary file in `path`'s directory.
fn stage(path: &Path, observations: &[Observation]) -> Result<NamedTempFile> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let tmp = NamedTempFile::new_in(dir).map_err(|e| ProgressError::io(dir, e))?;

    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(tmp);
    let encode = |wtr: &mut csv::Writer<NamedTempFile>| -> csv::Result<()> {
        wtr.write_record([TIMESTAMP_COLUMN, PROGRESS_COLUMN])?;
        for obs in observations {
            wtr.write_record([format_timestamp(&obs.timestamp), obs.progress.to_string()])?;
        }
        Ok(())
    };
    encode(&mut wtr).map_err(|e| ProgressError::csv(path, e))?;

    let mut tmp = wtr
        .into_inner()
        .map_err(|e| ProgressError::io(path, e.into_error()))?;
    tmp.flush().map_err(|e| ProgressError::io(path, e))?;
    tmp.as_file().sync_all().map_err(|e| ProgressError::io(path, e))?;
    Ok(tmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn header_only_log_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Dune.csv");
        write_log(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "timestamp,progress\n");
        assert!(read_log(&path).unwrap().is_empty());
    }

    #[test]
    fn create_never_replaces_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Dune.csv");
        let seeded = "timestamp,progress\n2026-10-18T08:00:00+09:00,50\n";
        std::fs::write(&path, seeded).unwrap();

        match create_log(&path).unwrap_err() {
            ProgressError::Io { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::AlreadyExists)
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), seeded);
        // No staged temporary is left behind.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn rows_are_written_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Dune.csv");
        let obs = vec![
            Observation::new(ts("2026-10-18T08:00:00.250000+09:00"), 50),
            Observation::new(ts("2026-10-19T21:04:05.123456+09:00"), 120),
        ];
        write_log(&path, &obs).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "timestamp,progress\n\
             2026-10-18T08:00:00.250000+09:00,50\n\
             2026-10-19T21:04:05.123456+09:00,120\n"
        );
        assert_eq!(read_log(&path).unwrap(), obs);
    }

    #[test]
    fn extra_columns_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Dune.csv");
        std::fs::write(
            &path,
            ",timestamp,progress,note\n0,2026-10-18T08:00:00+09:00,50,first\n",
        )
        .unwrap();
        let obs = read_log(&path).unwrap();
        assert_eq!(obs, vec![Observation::new(ts("2026-10-18T08:00:00+09:00"), 50)]);
    }

    #[test]
    fn missing_column_is_a_schema_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Dune.csv");
        std::fs::write(&path, "when,pages\n").unwrap();
        let err = read_log(&path).unwrap_err();
        assert!(matches!(err, ProgressError::Schema { .. }), "{err}");
    }

    #[test]
    fn bad_cells_report_their_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Dune.csv");
        std::fs::write(
            &path,
            "timestamp,progress\n2026-10-18T08:00:00+09:00,50\n2026-10-19T08:00:00+09:00,lots\n",
        )
        .unwrap();
        match read_log(&path).unwrap_err() {
            ProgressError::Schema { reason, .. } => assert!(reason.starts_with("line 3"), "{reason}"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
