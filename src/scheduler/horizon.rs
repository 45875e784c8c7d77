//! Scheduling horizon.

use crate::models::Job;

/// Smallest number of day slots that can ever be needed.
///
/// `min(max deadline, job count)`: no job may run on or after the latest
/// deadline, and one job per day means there are never more busy days
/// than jobs. Returns 0 for an empty list or when no deadline is positive.
pub fn minimum_horizon(jobs: &[Job]) -> usize {
    let max_deadline = jobs.iter().map(Job::deadline).max().unwrap_or(0);
    if max_deadline <= 0 {
        return 0;
    }
    usize::try_from(max_deadline).map_or(jobs.len(), |d| d.min(jobs.len()))
}
