use crate::commands::{CmdMessage, DisplayRecord};
use crate::model::BirthdayRecord;
use crate::store::LoadOutcome;

pub fn index_records(records: Vec<BirthdayRecord>) -> Vec<DisplayRecord> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord {
            index: i + 1,
            record,
        })
        .collect()
}

/// User-facing warnings for everything a load had to leave behind.
pub fn load_warnings(outcome: &LoadOutcome) -> Vec<CmdMessage> {
    let mut messages = Vec::new();
    for skipped in &outcome.skipped {
        messages.push(CmdMessage::warning(format!(
            "Skipping malformed line {}: {}",
            skipped.line_no, skipped.line
        )));
    }
    if let Some(err) = &outcome.read_error {
        messages.push(CmdMessage::error(format!("Error reading record file: {err}")));
    }
    messages
}
