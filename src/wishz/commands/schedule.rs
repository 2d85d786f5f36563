use crate::commands::CmdMessage;
use crate::dispatch::{self, MessageSender};
use crate::model::{BirthdayRecord, TIMESTAMP_FORMAT};
use crate::schedule::{time_of_day, Clock, JobScheduler};
use std::cell::RefCell;
use std::rc::Rc;

/// Minimum lead time before a send fires. The dispatch tool itself aims
/// two minutes ahead, so anything closer is pushed out to now + 2 min.
pub const MIN_LEAD_SECS: i64 = 120;

#[derive(Debug, Clone)]
pub struct PlannedJob {
    pub fire_at: chrono::NaiveDateTime,
    pub record: BirthdayRecord,
}

#[derive(Debug, Default)]
pub struct SchedulePlan {
    pub jobs: Vec<PlannedJob>,
    pub messages: Vec<CmdMessage>,
}

/// Decide, per record, whether and when a greeting fires relative to `now`.
/// Past timestamps are reported and skipped; no catch-up delivery.
pub fn plan(records: &[BirthdayRecord], now: chrono::NaiveDateTime) -> SchedulePlan {
    let mut plan = SchedulePlan::default();

    for record in records {
        if record.at <= now {
            plan.messages.push(CmdMessage::warning(format!(
                "The target time for {} has already passed.",
                record.name
            )));
            continue;
        }

        let lead = (record.at - now).num_seconds();
        let fire_at = if lead < MIN_LEAD_SECS {
            now + chrono::Duration::seconds(MIN_LEAD_SECS)
        } else {
            record.at
        };

        plan.messages.push(CmdMessage::success(format!(
            "Scheduled message for {} at {}",
            record.name,
            fire_at.format(TIMESTAMP_FORMAT)
        )));
        plan.jobs.push(PlannedJob {
            fire_at,
            record: record.clone(),
        });
    }

    plan
}

/// Register every planned job with the scheduler. Jobs are keyed by the
/// fire time's clock time only, so each recurs daily once registered.
pub fn register<S, C, M>(scheduler: &mut S, plan: &SchedulePlan, clock: Rc<C>, sender: Rc<RefCell<M>>)
where
    S: JobScheduler,
    C: Clock + 'static,
    M: MessageSender + 'static,
{
    for job in &plan.jobs {
        let clock = Rc::clone(&clock);
        let sender = Rc::clone(&sender);
        let name = job.record.name.clone();
        let phone = job.record.phone.clone();
        scheduler.register_daily_job(
            time_of_day(job.fire_at),
            Box::new(move || {
                dispatch::send_birthday_message(&mut *sender.borrow_mut(), clock.now(), &name, &phone)
            }),
        );
    }
}
