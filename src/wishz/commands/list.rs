use crate::commands::helpers::{index_records, load_warnings};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let outcome = store.load();
    let mut result = CmdResult::default();
    result.messages = load_warnings(&outcome);

    if outcome.records.is_empty() {
        result.add_message(CmdMessage::info("No birthdays found."));
    }
    result.listed = index_records(outcome.records);

    Ok(result)
}
