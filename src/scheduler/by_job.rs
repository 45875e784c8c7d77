//! Greedy-by-job sequencing.
//!
//! # Algorithm
//!
//! 1. Sort jobs by profit, highest first (ties: later deadline first).
//! 2. For each schedulable job, take the latest free day before its deadline.
//! 3. Jobs with no free day left are discarded.
//!
//! Taking the *latest* free day leaves the early days open for jobs with
//! tighter deadlines, which is what makes the greedy choice optimal.
//!
//! # Complexity
//! - Ordered set: O(n log n). Free days live in a `BTreeSet` queried with a
//!   predecessor-or-equal range search.
//! - Linear scan: O(n²). Free days are found by walking a day table downward.
//!
//! # Reference
//! Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", §4.4

use std::collections::BTreeSet;

use tracing::trace;

use super::minimum_horizon;
use crate::models::{Job, Schedule};
use crate::ordering::{ByProfit, Descending, JobOrdering, Natural};

/// Greedy-by-job with an ordered set of free days.
pub fn by_job_ordered(jobs: &[Job]) -> Schedule {
    let horizon = minimum_horizon(jobs);
    let mut days: Vec<Option<Job>> = vec![None; horizon];
    let mut free: BTreeSet<usize> = (0..horizon).collect();

    for idx in Descending(ByProfit).sort_indices(jobs) {
        if free.is_empty() {
            break;
        }
        let job = &jobs[idx];
        let Some(latest) = latest_day(job) else {
            continue;
        };

        match free.range(..=latest).next_back().copied() {
            Some(day) => {
                free.remove(&day);
                trace!(job = job.name(), day, "assigned");
                days[day] = Some(job.clone());
            }
            None => trace!(job = job.name(), "no free day before deadline"),
        }
    }

    Schedule::from_days(days)
}

/// Greedy-by-job with a linear downward scan of the day table.
pub fn by_job_linear(jobs: &[Job]) -> Schedule {
    let horizon = minimum_horizon(jobs);
    let mut days: Vec<Option<Job>> = vec![None; horizon];
    if horizon == 0 {
        return Schedule::from_days(days);
    }

    for idx in Descending(Natural).sort_indices(jobs) {
        let job = &jobs[idx];
        let Some(latest) = latest_day(job) else {
            continue;
        };

        let start = latest.min(horizon - 1);
        if let Some(day) = (0..=start).rev().find(|&d| days[d].is_none()) {
            trace!(job = job.name(), day, "assigned");
            days[day] = Some(job.clone());
        }
    }

    Schedule::from_days(days)
}

/// Latest day a job may occupy, or `None` if it is not schedulable.
fn latest_day(job: &Job) -> Option<usize> {
    if !job.is_schedulable() {
        return None;
    }
    usize::try_from(job.deadline() - 1).ok()
}
