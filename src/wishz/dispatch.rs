use crate::error::{Result, WishzError};
use crate::model::TIMESTAMP_FORMAT;
use chrono::{NaiveDateTime, Timelike};
use std::process::Command;

/// The dispatch tool wants its target a little in the future, so every
/// send is aimed two minutes ahead of the moment it fires.
pub const LEAD_MINUTES: i64 = 2;

/// Out-of-band message delivery. No success signal is consumed beyond
/// the process exit status.
pub trait MessageSender {
    fn send(&mut self, phone: &str, message: &str, hour: u32, minute: u32) -> Result<()>;
}

/// Production sender: delegates to an external automation program
/// (`whatsend` by default), passing phone, message, hour and minute as
/// arguments. The tool opens the messaging web client out of band.
pub struct DispatchCommand {
    program: String,
}

impl DispatchCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl MessageSender for DispatchCommand {
    fn send(&mut self, phone: &str, message: &str, hour: u32, minute: u32) -> Result<()> {
        let status = Command::new(&self.program)
            .arg(phone)
            .arg(message)
            .arg(hour.to_string())
            .arg(minute.to_string())
            .status()
            .map_err(|e| WishzError::Dispatch(format!("failed to spawn {}: {}", self.program, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(WishzError::Dispatch(format!(
                "{} exited with {}",
                self.program, status
            )))
        }
    }
}

pub fn greeting(name: &str) -> String {
    format!("Happy Birthday, {name}!")
}

/// Send a greeting aimed `LEAD_MINUTES` past `now`.
pub fn send_birthday_message<M: MessageSender>(
    sender: &mut M,
    now: NaiveDateTime,
    name: &str,
    phone: &str,
) -> Result<()> {
    let target = now + chrono::Duration::minutes(LEAD_MINUTES);
    sender.send(phone, &greeting(name), target.hour(), target.minute())?;
    log::info!(
        "wished {} a happy birthday at {}",
        name,
        now.format(TIMESTAMP_FORMAT)
    );
    Ok(())
}
