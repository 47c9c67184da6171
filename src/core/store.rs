//! Append-only CSV record store
//!
//! The store is a flat comma-delimited file. A header row is written exactly
//! once, when the file is empty at the moment of a write. Rows are never edited
//! or removed.

use crate::domain::errors::VitalwatchError;
use crate::domain::record::{HealthRecord, VitalSigns, TIMESTAMP_FORMAT};
use crate::domain::result::Result;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default store file name
pub const DEFAULT_STORE_PATH: &str = "health_data.csv";

/// Fixed header row
pub const HEADER: [&str; 5] = [
    "Timestamp",
    "Heart Rate (bpm)",
    "Blood Pressure Systolic (mmHg)",
    "Blood Pressure Diastolic (mmHg)",
    "Temperature (°C)",
];

/// Handle to the persistent record store
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
    sync_writes: bool,
}

impl RecordStore {
    /// Create a store handle; the file is not touched until the first append
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sync_writes: true,
        }
    }

    /// Enable or disable `fsync` after each row
    pub fn with_sync(mut self, sync_writes: bool) -> Self {
        self.sync_writes = sync_writes;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stamp the reading with the current local time and append it
    ///
    /// Returns the summary line for the appended record.
    pub fn append(&self, vitals: &VitalSigns) -> Result<String> {
        self.append_record(&HealthRecord::now(*vitals))
    }

    /// Append one record, writing the header first if the store is empty
    ///
    /// Header and row go out in a single write. If the write or the sync fails,
    /// the file is cut back to its previous length so no row remains.
    pub fn append_record(&self, record: &HealthRecord) -> Result<String> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| VitalwatchError::store_write(&self.path, e))?;

        let start_len = file
            .metadata()
            .map_err(|e| VitalwatchError::store_write(&self.path, e))?
            .len();

        let write_header = start_len == 0;
        let buffer = encode_rows(record, write_header)
            .map_err(|e| VitalwatchError::store_write(&self.path, e))?;

        commit(&mut file, &buffer, start_len, self.sync_writes)
            .map_err(|e| VitalwatchError::store_write(&self.path, e))?;

        if write_header {
            tracing::debug!(path = %self.path.display(), "Wrote store header");
        }

        Ok(record.summary_line())
    }

    /// Read the store and report what it contains
    pub fn inspect(&self) -> Result<StoreStats> {
        let mut stats = StoreStats {
            path: self.path.display().to_string(),
            exists: self.path.exists(),
            has_header: false,
            records: 0,
            last_timestamp: None,
        };

        if !stats.exists {
            return Ok(stats);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        for (index, row) in reader.records().enumerate() {
            let row = row?;
            if index == 0 && row.iter().eq(HEADER.iter().copied()) {
                stats.has_header = true;
                continue;
            }
            stats.records += 1;
            if let Some(Ok(ts)) = row
                .get(0)
                .map(|ts| NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT))
            {
                stats.last_timestamp = Some(ts);
            }
        }

        Ok(stats)
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

/// Contents of the store as seen by [`RecordStore::inspect`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreStats {
    pub path: String,
    pub exists: bool,
    pub has_header: bool,
    pub records: usize,
    pub last_timestamp: Option<NaiveDateTime>,
}

/// File operations used by an append
trait AppendTarget: Write {
    fn sync(&mut self) -> io::Result<()>;
    fn truncate(&mut self, len: u64) -> io::Result<()>;
}

impl AppendTarget for File {
    fn sync(&mut self) -> io::Result<()> {
        self.sync_data()
    }

    fn truncate(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }
}

/// Write `buffer` in full or not at all
///
/// Any failure, including a failed sync, cuts the target back to `start_len`
/// so a reported error always means the row is absent.
fn commit<T: AppendTarget>(
    target: &mut T,
    buffer: &[u8],
    start_len: u64,
    sync: bool,
) -> io::Result<()> {
    let result = target
        .write_all(buffer)
        .and_then(|_| target.flush())
        .and_then(|_| if sync { target.sync() } else { Ok(()) });

    if let Err(e) = result {
        if let Err(rollback) = target.truncate(start_len) {
            tracing::error!(error = %rollback, "Failed to discard partial row");
        }
        return Err(e);
    }

    Ok(())
}

fn encode_rows(record: &HealthRecord, with_header: bool) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    if with_header {
        writer.write_record(HEADER)?;
    }
    writer.write_record(record.csv_fields())?;

    writer
        .into_inner()
        .map_err(|e| VitalwatchError::Serialization(e.to_string()))
}
