//! # Scheduling Layer
//!
//! A small cooperative scheduler: jobs are keyed by clock time only (no
//! date dimension), so a registered job recurs every day at that time
//! until the process exits. [`DailyScheduler`] is polled from the tick
//! loop in [`run_loop`]; both the clock and the scheduler are injectable
//! so tests can advance time without real delays.

use crate::error::Result;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::time::Duration;

/// Wall-clock access, injectable for tests.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
    fn sleep(&self, duration: Duration);
}

/// Production clock: local time, real sleeps.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

pub type Job = Box<dyn FnMut() -> Result<()>>;

/// Abstract scheduling service: register a daily clock-time job, then
/// poll for due jobs in a loop.
pub trait JobScheduler {
    fn register_daily_job(&mut self, at: NaiveTime, job: Job);

    /// Run every job that is due at `now`. The first job error aborts the
    /// sweep and propagates.
    fn run_pending(&mut self, now: NaiveDateTime) -> Result<()>;

    fn is_empty(&self) -> bool;
}

struct DailyJob {
    at: NaiveTime,
    // None until the first poll primes it.
    next_date: Option<NaiveDate>,
    run: Job,
}

/// Job registry that fires each job once per day at its clock time.
///
/// A job whose time of day has already passed when first polled waits for
/// the next day rather than firing immediately.
#[derive(Default)]
pub struct DailyScheduler {
    jobs: Vec<DailyJob>,
}

impl DailyScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl JobScheduler for DailyScheduler {
    fn register_daily_job(&mut self, at: NaiveTime, job: Job) {
        self.jobs.push(DailyJob {
            at,
            next_date: None,
            run: job,
        });
    }

    fn run_pending(&mut self, now: NaiveDateTime) -> Result<()> {
        for job in &mut self.jobs {
            let next_date = *job.next_date.get_or_insert_with(|| {
                if now.time() < job.at {
                    now.date()
                } else {
                    next_day(now.date())
                }
            });
            if now.date() >= next_date && now.time() >= job.at {
                (job.run)()?;
                job.next_date = Some(next_day(now.date()));
            }
        }
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

/// The schedule tick loop: poll pending jobs, sleep one second, forever.
/// Returns only when a dispatch job fails; otherwise only process
/// termination stops it.
pub fn run_loop<S: JobScheduler, C: Clock>(scheduler: &mut S, clock: &C) -> Result<()> {
    loop {
        scheduler.run_pending(clock.now())?;
        clock.sleep(Duration::from_secs(1));
    }
}

/// Seconds-precision clock time for a fire time, suitable for
/// [`JobScheduler::register_daily_job`].
pub fn time_of_day(at: NaiveDateTime) -> NaiveTime {
    at.time().with_nanosecond(0).unwrap_or_else(|| at.time())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WishzError;
    use chrono::NaiveDate;
    use std::cell::Cell;
    use std::rc::Rc;

    pub struct FakeClock {
        now: Cell<NaiveDateTime>,
    }

    impl FakeClock {
        pub fn at(now: NaiveDateTime) -> Self {
            Self { now: Cell::new(now) }
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> NaiveDateTime {
            self.now.get()
        }

        fn sleep(&self, duration: Duration) {
            let step = chrono::Duration::from_std(duration).unwrap();
            self.now.set(self.now.get() + step);
        }
    }

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn counting_job(count: Rc<Cell<usize>>) -> Job {
        Box::new(move || {
            count.set(count.get() + 1);
            Ok(())
        })
    }

    #[test]
    fn fires_once_when_time_is_reached() {
        let count = Rc::new(Cell::new(0));
        let mut scheduler = DailyScheduler::new();
        scheduler.register_daily_job(
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            counting_job(Rc::clone(&count)),
        );

        scheduler.run_pending(dt(2030, 1, 1, 8, 59, 59)).unwrap();
        assert_eq!(count.get(), 0);

        scheduler.run_pending(dt(2030, 1, 1, 9, 0, 0)).unwrap();
        assert_eq!(count.get(), 1);

        scheduler.run_pending(dt(2030, 1, 1, 9, 0, 1)).unwrap();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn recurs_the_next_day() {
        let count = Rc::new(Cell::new(0));
        let mut scheduler = DailyScheduler::new();
        scheduler.register_daily_job(
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            counting_job(Rc::clone(&count)),
        );

        scheduler.run_pending(dt(2030, 1, 1, 9, 0, 0)).unwrap();
        scheduler.run_pending(dt(2030, 1, 1, 23, 59, 59)).unwrap();
        assert_eq!(count.get(), 1);

        scheduler.run_pending(dt(2030, 1, 2, 9, 0, 0)).unwrap();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn time_already_passed_waits_for_next_day() {
        let count = Rc::new(Cell::new(0));
        let mut scheduler = DailyScheduler::new();
        scheduler.register_daily_job(
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            counting_job(Rc::clone(&count)),
        );

        // First poll at 22:00: the 08:00 slot is gone for today.
        scheduler.run_pending(dt(2030, 1, 1, 22, 0, 0)).unwrap();
        assert_eq!(count.get(), 0);

        scheduler.run_pending(dt(2030, 1, 2, 8, 0, 0)).unwrap();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn run_loop_terminates_on_job_error() {
        let mut scheduler = DailyScheduler::new();
        scheduler.register_daily_job(
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            Box::new(|| Err(WishzError::Dispatch("automation tool crashed".into()))),
        );

        let clock = FakeClock::at(dt(2030, 1, 1, 8, 59, 58));
        let err = run_loop(&mut scheduler, &clock).unwrap_err();
        assert!(matches!(err, WishzError::Dispatch(_)));
    }
}
