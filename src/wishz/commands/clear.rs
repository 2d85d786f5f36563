use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.clear() {
        Ok(()) => result.add_message(CmdMessage::success("All birthdays have been cleared.")),
        Err(e) => {
            log::warn!("failed to clear record file: {e}");
            result.add_message(CmdMessage::error(format!("Error clearing birthdays: {e}")));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BirthdayRecord;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn clears_all_records() {
        let mut store = InMemoryStore::with_records(vec![
            BirthdayRecord::from_line("2030-01-01 09:00:00,Alice,+15551234567").unwrap(),
        ]);

        run(&mut store).unwrap();
        assert!(store.records().is_empty());

        // Idempotent on an already-empty store.
        run(&mut store).unwrap();
        assert!(store.records().is_empty());
    }
}
