//! Greedy-by-day sequencing.
//!
//! # Algorithm
//!
//! 1. Sort jobs by deadline, latest first (ties: higher profit first).
//! 2. Walk days from the last one down to day 0. Before filling a day,
//!    move every job whose deadline is past that day into a candidate pool.
//! 3. Give the day to the most profitable pooled job.
//!
//! The deadline-sorted sequence is consumed once across the whole walk,
//! so each job enters the pool at most once.
//!
//! # Complexity
//! - Ordered set: O(n log n). The pool is a `BTreeSet` keyed on
//!   (profit, deadline, name, input position); `pop_last` extracts the max.
//! - Linear scan: O(n²). The unassigned list is re-scanned every day.
//!
//! # Reference
//! Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", §4.4

use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::trace;

use super::minimum_horizon;
use crate::models::{Job, Schedule};
use crate::ordering::{ByDeadline, ByProfit, Descending, JobOrdering};

/// Pool entry. Input position is the last key so identical jobs stay distinct.
#[derive(Debug, PartialEq, Eq)]
struct Pooled<'a> {
    job: &'a Job,
    index: usize,
}

impl Ord for Pooled<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        ByProfit
            .compare(self.job, other.job)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for Pooled<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Greedy-by-day with an ordered candidate pool.
pub fn by_day_ordered(jobs: &[Job]) -> Schedule {
    let horizon = minimum_horizon(jobs);
    let mut days: Vec<Option<Job>> = vec![None; horizon];
    let mut pending = Descending(ByDeadline)
        .sort_indices(jobs)
        .into_iter()
        .peekable();
    let mut pool: BTreeSet<Pooled<'_>> = BTreeSet::new();

    for day in (0..horizon).rev() {
        while let Some(&index) = pending.peek() {
            let job = &jobs[index];
            if !job.fits_day(day) {
                break;
            }
            pending.next();
            if job.profit() > 0.0 {
                pool.insert(Pooled { job, index });
            }
        }

        if let Some(best) = pool.pop_last() {
            trace!(job = best.job.name(), day, "assigned");
            days[day] = Some(best.job.clone());
        }
    }

    Schedule::from_days(days)
}

/// Greedy-by-day with a full scan of the unassigned jobs each day.
///
/// The unassigned list is kept in descending profit order, so the first
/// job that fits the day is the best one available.
pub fn by_day_linear(jobs: &[Job]) -> Schedule {
    let horizon = minimum_horizon(jobs);
    let mut days: Vec<Option<Job>> = vec![None; horizon];
    let mut unassigned: Vec<&Job> = Descending(ByProfit)
        .sort_indices(jobs)
        .into_iter()
        .map(|i| &jobs[i])
        .collect();

    for day in (0..horizon).rev() {
        let found = unassigned
            .iter()
            .position(|job| job.fits_day(day) && job.profit() > 0.0);
        if let Some(pos) = found {
            let job = unassigned.remove(pos);
            trace!(job = job.name(), day, "assigned");
            days[day] = Some(job.clone());
        }
    }

    Schedule::from_days(days)
}
