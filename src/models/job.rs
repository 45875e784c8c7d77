//! Job model.
//!
//! A job is a single unit of work that takes exactly one day and earns
//! its profit only when finished strictly before its deadline.
//!
//! # Time Representation
//! Deadlines are whole days relative to day 0. A job placed on day `d`
//! is on time iff `d < deadline`, so a deadline of `1` means "day 0 only"
//! and a deadline `<= 0` can never be met.
//!
//! # Reference
//! Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", §4.4

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a job definition is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobError {
    /// The job name is empty or whitespace only.
    #[error("job name cannot be empty")]
    BlankName,

    /// The profit is NaN or infinite.
    #[error("job '{name}' has a non-finite profit")]
    NonFiniteProfit {
        /// Name of the offending job.
        name: String,
    },
}

/// A job to be sequenced.
///
/// Immutable once built. Values outside the schedulable range
/// (`profit <= 0` or `deadline <= 0`) are legal; the schedulers simply
/// discard them.
///
/// # Ordering
/// The default total order is profit, then deadline, then name, all
/// ascending. Equality follows the same three keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "JobRecord", into = "JobRecord")]
pub struct Job {
    name: String,
    deadline: i64,
    profit: f64,
}

/// Unchecked wire form of a [`Job`]. Not re-exported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    name: String,
    deadline: i64,
    profit: f64,
}

impl Job {
    /// Creates a job, rejecting blank names and non-finite profits.
    pub fn new(name: impl Into<String>, deadline: i64, profit: f64) -> Result<Self, JobError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(JobError::BlankName);
        }
        if !profit.is_finite() {
            return Err(JobError::NonFiniteProfit { name });
        }
        Ok(Self {
            name,
            deadline,
            profit,
        })
    }

    /// Job name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Deadline in days. The job must run on a day strictly before it.
    #[inline]
    pub fn deadline(&self) -> i64 {
        self.deadline
    }

    /// Profit earned on completion. May be zero or negative.
    #[inline]
    pub fn profit(&self) -> f64 {
        self.profit
    }

    /// Whether any schedule could ever contain this job.
    ///
    /// Jobs with `profit <= 0` are never worth doing and jobs with
    /// `deadline <= 0` have no valid day.
    #[inline]
    pub fn is_schedulable(&self) -> bool {
        self.profit > 0.0 && self.deadline > 0
    }

    /// Whether the job may be placed on `day`.
    #[inline]
    pub fn fits_day(&self, day: usize) -> bool {
        i64::try_from(day).is_ok_and(|d| d < self.deadline)
    }
}

impl TryFrom<JobRecord> for Job {
    type Error = JobError;

    fn try_from(record: JobRecord) -> Result<Self, Self::Error> {
        Job::new(record.name, record.deadline, record.profit)
    }
}

impl From<Job> for JobRecord {
    fn from(job: Job) -> Self {
        Self {
            name: job.name,
            deadline: job.deadline,
            profit: job.profit,
        }
    }
}

impl Ord for Job {
    fn cmp(&self, other: &Self) -> Ordering {
        self.profit
            .total_cmp(&other.profit)
            .then_with(|| self.deadline.cmp(&other.deadline))
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Job {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Job {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Job {}
