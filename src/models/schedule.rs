//! Schedule (solution) model.
//!
//! A schedule is the compacted list of day slots a scheduler filled.
//! Empty days are omitted; slots are kept in ascending day order.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};

use super::Job;

/// A job placed on a specific day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Zero-based day index. Always strictly below the job's deadline.
    pub day: usize,
    /// The job done on that day (owned copy of the input job).
    pub job: Job,
}

/// A complete job sequence (solution to one sequencing problem).
///
/// Built once per scheduler call and owned by the caller afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Number of day slots that were considered.
    pub horizon: usize,
    /// Filled slots, ascending by day.
    pub slots: Vec<Slot>,
}

impl Slot {
    /// Creates a slot.
    pub fn new(day: usize, job: Job) -> Self {
        Self { day, job }
    }
}

impl Schedule {
    /// Creates an empty schedule over `horizon` days.
    pub fn new(horizon: usize) -> Self {
        Self {
            horizon,
            slots: Vec::new(),
        }
    }

    /// Builds a schedule from a day-indexed table, dropping empty days.
    pub(crate) fn from_days(days: Vec<Option<Job>>) -> Self {
        let horizon = days.len();
        let slots = days
            .into_iter()
            .enumerate()
            .filter_map(|(day, job)| job.map(|job| Slot::new(day, job)))
            .collect();
        Self { horizon, slots }
    }

    /// Sum of profits of all scheduled jobs.
    pub fn total_profit(&self) -> f64 {
        self.slots.iter().map(|s| s.job.profit()).sum()
    }

    /// Number of scheduled jobs.
    pub fn job_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Scheduled jobs in day order.
    pub fn jobs(&self) -> impl Iterator<Item = &Job> {
        self.slots.iter().map(|s| &s.job)
    }

    /// The job on a given day, if any.
    pub fn job_on_day(&self, day: usize) -> Option<&Job> {
        self.slots
            .binary_search_by_key(&day, |s| s.day)
            .ok()
            .map(|i| &self.slots[i].job)
    }

    /// The slot holding the first job with the given name.
    pub fn slot_for_job(&self, name: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.job.name() == name)
    }

    /// Whether every slot respects its job's deadline and no day is used twice.
    pub fn is_feasible(&self) -> bool {
        let in_order = self.slots.windows(2).all(|w| w[0].day < w[1].day);
        in_order
            && self
                .slots
                .iter()
                .all(|s| s.day < self.horizon && s.job.fits_day(s.day))
    }
}
