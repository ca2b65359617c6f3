//! Day-by-day study schedule produced by the scheduler

use crate::catalog::Task;
use crate::error::{PlanError, PlanResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Ordered mapping from every date of the planning window to its tasks
///
/// Every date of `[start_date, end_date]` is a key, free days included.
/// Overflow days are the only days whose total may exceed the daily limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    start_date: NaiveDate,
    end_date: NaiveDate,
    daily_limit: u32,
    days: BTreeMap<NaiveDate, Vec<Task>>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    overflow_days: BTreeSet<NaiveDate>,
}

impl Schedule {
    pub(crate) fn from_buckets(
        daily_limit: u32,
        buckets: Vec<(NaiveDate, Vec<Task>)>,
        overflow_days: BTreeSet<NaiveDate>,
    ) -> Self {
        let start_date = buckets.first().map(|(date, _)| *date).unwrap_or_default();
        let end_date = buckets.last().map(|(date, _)| *date).unwrap_or(start_date);
        Self {
            start_date,
            end_date,
            daily_limit,
            days: buckets.into_iter().collect(),
            overflow_days,
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Daily limit in minutes the schedule was packed against
    pub fn daily_limit(&self) -> u32 {
        self.daily_limit
    }

    /// Number of calendar days covered
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Days in date order with their tasks
    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &[Task])> {
        self.days.iter().map(|(date, tasks)| (*date, tasks.as_slice()))
    }

    /// Tasks assigned to a date, `None` outside the planning window
    pub fn tasks_on(&self, date: NaiveDate) -> Option<&[Task]> {
        self.days.get(&date).map(Vec::as_slice)
    }

    /// Total minutes assigned to a date
    pub fn total_minutes(&self, date: NaiveDate) -> u64 {
        self.tasks_on(date)
            .map(|tasks| tasks.iter().map(|t| u64::from(t.duration)).sum())
            .unwrap_or(0)
    }

    pub fn is_free_day(&self, date: NaiveDate) -> bool {
        self.tasks_on(date).is_some_and(<[Task]>::is_empty)
    }

    /// True for a day that holds an oversized task or dumped overflow
    pub fn is_overflow_day(&self, date: NaiveDate) -> bool {
        self.overflow_days.contains(&date)
    }

    /// All scheduled tasks, concatenated in date order
    pub fn tasks_in_order(&self) -> impl Iterator<Item = &Task> {
        self.days.values().flatten()
    }

    pub fn scheduled_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

/// A schedule together with the tasks that did not fit in it
///
/// Unplaced tasks are a warning, not a failure: the schedule is still usable
/// and the caller decides whether to widen the range or the budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub schedule: Schedule,
    pub unplaced: Vec<Task>,
}

impl Allocation {
    /// True when every task found a day
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Treat leftover tasks as a hard error
    pub fn ensure_complete(&self) -> PlanResult<&Schedule> {
        if self.is_complete() {
            Ok(&self.schedule)
        } else {
            Err(PlanError::CapacityExceeded {
                unplaced: self.unplaced.len(),
            })
        }
    }
}
