use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{BirthdayRecord, TIMESTAMP_FORMAT};
use crate::store::RecordStore;

/// Persist one new record. A write failure is reported in the result and
/// swallowed, so a failed append never aborts the surrounding batch.
pub fn run<S: RecordStore>(store: &mut S, record: &BirthdayRecord) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.append(record) {
        Ok(()) => result.add_message(CmdMessage::success(format!(
            "Added birthday for {} on {}.",
            record.name,
            record.at.format(TIMESTAMP_FORMAT)
        ))),
        Err(e) => {
            log::warn!("failed to append record for {}: {}", record.name, e);
            result.add_message(CmdMessage::error(format!("Error saving birthday: {e}")));
        }
    }

    Ok(result)
}
