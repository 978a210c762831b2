//! JSON Lines storage adapter: one serialized record per line.
//!
//! This is one possible persistence format for the storage boundary; the
//! ledger itself only knows `RecordSource` and `RecordSink`.

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use spine_core::errors::SpineResult;
use spine_core::models::Record;
use spine_core::traits::{RecordSink, RecordSource};

/// A ledger file with one JSON record per line.
#[derive(Debug, Clone)]
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonlStore {
    /// A missing file loads as an empty ledger.
    fn load(&self) -> SpineResult<Vec<Record>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let reader = BufReader::new(std::fs::File::open(&self.path)?);
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(serde_json::from_str(&line)?);
        }
        debug!(path = %self.path.display(), records = records.len(), "jsonl ledger loaded");
        Ok(records)
    }
}

impl RecordSink for JsonlStore {
    fn accept(&mut self, record: &Record) -> SpineResult<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}
