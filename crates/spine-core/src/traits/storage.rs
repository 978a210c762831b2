//! Storage boundary: the engine never chooses a persistence medium.
//!
//! The embedding application hands the engine a source to load records
//! from and a sink that receives every record appended afterwards.

use crate::errors::SpineResult;
use crate::models::Record;

/// Loads a previously persisted record sequence, oldest first.
pub trait RecordSource {
    fn load(&self) -> SpineResult<Vec<Record>>;
}

/// Receives sealed records in append order.
pub trait RecordSink {
    fn accept(&mut self, record: &Record) -> SpineResult<()>;
}

impl RecordSink for Vec<Record> {
    fn accept(&mut self, record: &Record) -> SpineResult<()> {
        self.push(record.clone());
        Ok(())
    }
}

impl RecordSource for Vec<Record> {
    fn load(&self) -> SpineResult<Vec<Record>> {
        Ok(self.clone())
    }
}
