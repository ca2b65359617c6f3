//! Greedy, order-preserving allocation of tasks to calendar days
//!
//! Tasks are taken in catalog order and packed into the current day while
//! they fit under the daily limit; a task that does not fit moves the cursor
//! to the next day. Tasks are never split, reordered or pulled forward, so a
//! day may be left partly empty to keep syllabus order intact.
//!
//! A task longer than the whole daily limit is placed alone on an empty day,
//! and the cursor moves on afterwards. That day is recorded as an overflow day.

use crate::catalog::Task;
use crate::error::{PlanError, PlanResult};
use crate::schedule::{Allocation, Schedule};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// What happens to tasks left over once the last day is full
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Stop at the end of the range and return the leftovers as unplaced
    #[default]
    Report,
    /// Append the leftovers to the final day, over its limit
    LastDay,
}

impl FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "report" => Ok(OverflowPolicy::Report),
            "last_day" | "last-day" => Ok(OverflowPolicy::LastDay),
            _ => Err(format!(
                "Invalid overflow policy '{}'. Valid options are: report, last_day",
                s
            )),
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowPolicy::Report => write!(f, "report"),
            OverflowPolicy::LastDay => write!(f, "last_day"),
        }
    }
}

/// Every date of `[start, end]`, `end` included even when it is `NaiveDate::MAX`
fn dates_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut date = start;
    loop {
        dates.push(date);
        match date.succ_opt() {
            Some(next) if next <= end => date = next,
            _ => break,
        }
    }
    dates
}

/// Packs an ordered task list into the days of a date range
#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler {
    overflow_policy: OverflowPolicy,
}

impl Scheduler {
    pub fn new(overflow_policy: OverflowPolicy) -> Self {
        Self { overflow_policy }
    }

    /// Validate a planning window and budget, returning the limit in minutes
    pub fn check_request(
        start_date: NaiveDate,
        end_date: NaiveDate,
        daily_limit_minutes: i64,
    ) -> PlanResult<u32> {
        if end_date < start_date {
            return Err(PlanError::InvalidRange {
                start: start_date,
                end: end_date,
            });
        }
        u32::try_from(daily_limit_minutes)
            .ok()
            .filter(|limit| *limit > 0)
            .ok_or(PlanError::InvalidBudget(daily_limit_minutes))
    }

    /// Allocate `tasks` over `[start_date, end_date]` under a daily limit
    ///
    /// # Errors
    /// * [`PlanError::InvalidRange`] when `end_date` is before `start_date`
    /// * [`PlanError::InvalidBudget`] when the limit is not a positive number of minutes
    ///
    /// Running out of days is not an error; see [`Allocation::unplaced`].
    pub fn run<I>(
        &self,
        tasks: I,
        start_date: NaiveDate,
        end_date: NaiveDate,
        daily_limit_minutes: i64,
    ) -> PlanResult<Allocation>
    where
        I: IntoIterator<Item = Task>,
    {
        let daily_limit = Self::check_request(start_date, end_date, daily_limit_minutes)?;
        let dates = dates_between(start_date, end_date);
        let day_count = dates.len();
        let mut buckets: Vec<Vec<Task>> = vec![Vec::new(); day_count];
        let mut overflow_days = BTreeSet::new();
        let mut unplaced = Vec::new();

        let limit = u64::from(daily_limit);
        let mut day = 0;
        let mut used: u64 = 0;

        for task in tasks {
            if day >= day_count {
                unplaced.push(task);
                continue;
            }

            let duration = u64::from(task.duration);
            loop {
                if used + duration <= limit {
                    used += duration;
                    buckets[day].push(task);
                    break;
                }

                if duration > limit && used == 0 {
                    debug!(
                        date = %dates[day],
                        article = %task.article_title,
                        minutes = task.duration,
                        limit = daily_limit,
                        "oversized task placed alone"
                    );
                    buckets[day].push(task);
                    overflow_days.insert(dates[day]);
                    day += 1;
                    used = 0;
                    break;
                }

                day += 1;
                used = 0;
                if day >= day_count {
                    unplaced.push(task);
                    break;
                }
                debug!(date = %dates[day], "advanced to next day");
            }
        }

        if !unplaced.is_empty() {
            match self.overflow_policy {
                OverflowPolicy::Report => {
                    warn!(
                        unplaced = unplaced.len(),
                        start = %start_date,
                        end = %end_date,
                        limit = daily_limit,
                        "date range cannot hold all tasks"
                    );
                }
                OverflowPolicy::LastDay => {
                    warn!(
                        overflow = unplaced.len(),
                        date = %end_date,
                        "leftover tasks appended to the last day"
                    );
                    buckets[day_count - 1].append(&mut unplaced);
                    overflow_days.insert(end_date);
                }
            }
        }

        let schedule =
            Schedule::from_buckets(daily_limit, dates.into_iter().zip(buckets).collect(), overflow_days);
        info!(
            days = schedule.day_count(),
            scheduled = schedule.scheduled_count(),
            unplaced = unplaced.len(),
            "schedule built"
        );

        Ok(Allocation { schedule, unplaced })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(title: &str, duration: u32) -> Task {
        Task::new("Class", "Module", title, duration)
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("report".parse::<OverflowPolicy>(), Ok(OverflowPolicy::Report));
        assert_eq!("last-day".parse::<OverflowPolicy>(), Ok(OverflowPolicy::LastDay));
        assert_eq!("last_day".parse::<OverflowPolicy>(), Ok(OverflowPolicy::LastDay));
        assert!("dump".parse::<OverflowPolicy>().is_err());
        assert_eq!(OverflowPolicy::LastDay.to_string(), "last_day");
    }

    #[test]
    fn test_oversized_after_partial_day_moves_to_fresh_day() {
        let tasks = vec![task("Short", 20), task("Huge", 200), task("After", 10)];
        let allocation = Scheduler::default()
            .run(tasks, d(2025, 1, 1), d(2025, 1, 3), 60)
            .unwrap();
        let schedule = &allocation.schedule;

        assert_eq!(schedule.tasks_on(d(2025, 1, 1)).unwrap(), &[task("Short", 20)]);
        assert_eq!(schedule.tasks_on(d(2025, 1, 2)).unwrap(), &[task("Huge", 200)]);
        assert_eq!(schedule.tasks_on(d(2025, 1, 3)).unwrap(), &[task("After", 10)]);
        assert!(schedule.is_overflow_day(d(2025, 1, 2)));
        assert!(!schedule.is_overflow_day(d(2025, 1, 1)));
        assert!(allocation.is_complete());
    }

    #[test]
    fn test_exact_fit_stays_on_same_day() {
        let tasks = vec![task("A", 30), task("B", 30), task("C", 1)];
        let allocation = Scheduler::default()
            .run(tasks, d(2025, 1, 1), d(2025, 1, 2), 60)
            .unwrap();

        assert_eq!(allocation.schedule.total_minutes(d(2025, 1, 1)), 60);
        assert_eq!(allocation.schedule.total_minutes(d(2025, 1, 2)), 1);
    }

    #[test]
    fn test_dates_between_includes_last_representable_day() {
        let dates = dates_between(NaiveDate::MAX.pred_opt().unwrap(), NaiveDate::MAX);
        assert_eq!(dates, vec![NaiveDate::MAX.pred_opt().unwrap(), NaiveDate::MAX]);
        assert_eq!(dates_between(d(2025, 1, 1), d(2025, 1, 1)), vec![d(2025, 1, 1)]);
    }

    #[test]
    fn test_oversized_on_last_day_leaves_rest_unplaced() {
        let tasks = vec![task("Huge", 500), task("Next", 5)];
        let allocation = Scheduler::default()
            .run(tasks, d(2025, 1, 1), d(2025, 1, 1), 60)
            .unwrap();

        assert_eq!(allocation.schedule.total_minutes(d(2025, 1, 1)), 500);
        assert_eq!(allocation.unplaced, vec![task("Next", 5)]);
    }
}
