use super::{LoadOutcome, RecordStore};
use crate::error::Result;
use crate::model::BirthdayRecord;

/// In-memory store for tests. No persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<BirthdayRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<BirthdayRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[BirthdayRecord] {
        &self.records
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> LoadOutcome {
        LoadOutcome {
            records: self.records.clone(),
            ..Default::default()
        }
    }

    fn append(&mut self, record: &BirthdayRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn overwrite(&mut self, records: &[BirthdayRecord]) -> Result<()> {
        self.records = records.to_vec();
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.records.clear();
        Ok(())
    }
}
