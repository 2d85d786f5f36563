//! # Storage Layer
//!
//! The [`RecordStore`] trait abstracts the flat-file persistence so the
//! command layer never touches the filesystem directly.
//!
//! - [`fs::FileStore`]: production storage, one CSV-style line per record
//!   in a plain text file (`birthday.txt` by default)
//! - [`memory::InMemoryStore`]: in-memory storage for tests
//!
//! `load` never fails: a missing file is an empty store, malformed lines
//! are skipped and reported in [`LoadOutcome`], and a read error yields
//! whatever parsed before it. Write operations return `Result` and leave
//! the swallow-and-log policy to the caller.

use crate::error::Result;
use crate::model::BirthdayRecord;

pub mod fs;
pub mod memory;

/// A line that `load` could not turn into a record.
#[derive(Debug, Clone)]
pub struct SkippedLine {
    pub line_no: usize,
    pub line: String,
    pub reason: String,
}

/// Everything a `load` produced, including what it had to leave behind.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub records: Vec<BirthdayRecord>,
    pub skipped: Vec<SkippedLine>,
    pub read_error: Option<String>,
}

/// Abstract interface for birthday record storage.
pub trait RecordStore {
    /// Load all records in file order. Never fails; see [`LoadOutcome`].
    fn load(&self) -> LoadOutcome;

    /// Append one record to the end of the store.
    fn append(&mut self, record: &BirthdayRecord) -> Result<()>;

    /// Replace the entire store contents with the given records, in order.
    fn overwrite(&mut self, records: &[BirthdayRecord]) -> Result<()>;

    /// Remove all records.
    fn clear(&mut self) -> Result<()>;
}
