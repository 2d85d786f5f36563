//! # API Facade
//!
//! Thin facade over the command layer; the single entry point for every
//! operation regardless of the UI driving it. No business logic here and
//! no I/O concerns: methods take Rust values and return
//! `Result<CmdResult>` (or plan data for scheduling).
//!
//! `WishzApi<S: RecordStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::commands::{self, helpers, CmdResult};
use crate::error::Result;
use crate::model::BirthdayRecord;
use crate::store::{LoadOutcome, RecordStore};
use chrono::NaiveDateTime;

pub struct WishzApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> WishzApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_record(&mut self, record: &BirthdayRecord) -> Result<CmdResult> {
        commands::add::run(&mut self.store, record)
    }

    pub fn list_records(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn update_record(&mut self, index: usize, replacement: BirthdayRecord) -> Result<CmdResult> {
        commands::update::run(&mut self.store, index, replacement)
    }

    pub fn clear_records(&mut self) -> Result<CmdResult> {
        commands::clear::run(&mut self.store)
    }

    pub fn load(&self) -> LoadOutcome {
        self.store.load()
    }

    /// Load the store and build the send plan for `now`, with any load
    /// warnings folded into the plan's messages.
    pub fn plan_schedule(&self, now: NaiveDateTime) -> commands::schedule::SchedulePlan {
        let outcome = self.store.load();
        let mut plan = commands::schedule::plan(&outcome.records, now);
        let mut messages = helpers::load_warnings(&outcome);
        messages.append(&mut plan.messages);
        plan.messages = messages;
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    #[test]
    fn add_then_list_dispatches_through_the_facade() {
        let mut api = WishzApi::new(InMemoryStore::new());
        let record = BirthdayRecord::from_line("2030-01-01 09:00:00,Alice,+15551234567").unwrap();

        api.add_record(&record).unwrap();
        let result = api.list_records().unwrap();

        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].record, record);
    }

    #[test]
    fn plan_schedule_loads_from_the_store() {
        let mut api = WishzApi::new(InMemoryStore::new());
        let record = BirthdayRecord::from_line("2030-06-01 12:00:00,Bob,+447700900123").unwrap();
        api.add_record(&record).unwrap();

        let now = NaiveDate::from_ymd_opt(2030, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let plan = api.plan_schedule(now);

        assert_eq!(plan.jobs.len(), 1);
        assert_eq!(plan.jobs[0].record.name, "Bob");
    }
}
