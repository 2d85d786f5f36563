use crate::commands::helpers::load_warnings;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WishzError};
use crate::model::{BirthdayRecord, TIMESTAMP_FORMAT};
use crate::store::RecordStore;

/// Replace the record at the 1-based `index` and rewrite the whole file.
/// An out-of-range index is an error and leaves the store untouched.
pub fn run<S: RecordStore>(
    store: &mut S,
    index: usize,
    replacement: BirthdayRecord,
) -> Result<CmdResult> {
    let outcome = store.load();
    let warnings = load_warnings(&outcome);
    let mut records = outcome.records;

    if index == 0 || index > records.len() {
        return Err(WishzError::InvalidSelection {
            index,
            count: records.len(),
        });
    }

    records[index - 1] = replacement.clone();

    let mut result = CmdResult::default();
    result.messages = warnings;
    match store.overwrite(&records) {
        Ok(()) => result.add_message(CmdMessage::success(format!(
            "Updated birthday for {} on {}.",
            replacement.name,
            replacement.at.format(TIMESTAMP_FORMAT)
        ))),
        Err(e) => {
            log::warn!("failed to rewrite record file: {e}");
            result.add_message(CmdMessage::error(format!("Error updating birthday: {e}")));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn record(line: &str) -> BirthdayRecord {
        BirthdayRecord::from_line(line).unwrap()
    }

    #[test]
    fn replaces_record_in_place() {
        let mut store = InMemoryStore::with_records(vec![
            record("2030-01-01 09:00:00,Alice,+15551234567"),
            record("2031-06-15 18:30:00,Bob,+447700900123"),
        ]);

        let replacement = record("2032-02-02 10:00:00,Alicia,+15559876543");
        run(&mut store, 1, replacement.clone()).unwrap();

        assert_eq!(store.records()[0], replacement);
        assert_eq!(store.records()[1].name, "Bob");
    }

    #[test]
    fn out_of_range_index_leaves_store_unchanged() {
        let mut store = InMemoryStore::with_records(vec![
            record("2030-01-01 09:00:00,Alice,+15551234567"),
            record("2031-06-15 18:30:00,Bob,+447700900123"),
        ]);
        let before = store.records().to_vec();

        let err = run(&mut store, 5, record("2032-02-02 10:00:00,Eve,+15550001111")).unwrap_err();

        assert!(matches!(err, WishzError::InvalidSelection { index: 5, count: 2 }));
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn index_zero_is_invalid() {
        let mut store =
            InMemoryStore::with_records(vec![record("2030-01-01 09:00:00,Alice,+15551234567")]);

        let err = run(&mut store, 0, record("2032-02-02 10:00:00,Eve,+15550001111")).unwrap_err();
        assert!(matches!(err, WishzError::InvalidSelection { .. }));
    }
}
