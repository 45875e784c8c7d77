//! Job ordering policies.
//!
//! The schedulers never rely on an implicit sort order. Each one names
//! the policy it sorts by, and descending sorts wrap a policy in
//! [`Descending`] rather than sorting ascending and reversing.
//!
//! # Usage
//!
//! ```
//! use u_sequencing::models::Job;
//! use u_sequencing::ordering::{ByProfit, Descending, JobOrdering};
//!
//! let jobs = vec![
//!     Job::new("A", 4, 20.0).unwrap(),
//!     Job::new("C", 1, 40.0).unwrap(),
//! ];
//! let order = Descending(ByProfit).sort_indices(&jobs);
//! assert_eq!(order, vec![1, 0]);
//! ```
//!
//! # Reference
//! Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", §4.4

pub mod policies;

pub use policies::{ByDeadline, ByProfit, Natural};

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::models::Job;

/// A strict weak ordering over jobs.
///
/// Implementations compare ascending; wrap in [`Descending`] to flip.
pub trait JobOrdering: Send + Sync + Debug {
    /// Policy name (e.g., "BY_PROFIT").
    fn name(&self) -> &'static str;

    /// Compares two jobs.
    fn compare(&self, a: &Job, b: &Job) -> Ordering;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Returns indices into `jobs`, sorted by this policy.
    ///
    /// The sort is stable: jobs that compare equal keep input order.
    fn sort_indices(&self, jobs: &[Job]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..jobs.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&jobs[a], &jobs[b]));
        indices
    }
}

/// Reverses a policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Descending<O>(pub O);

impl<O: JobOrdering> JobOrdering for Descending<O> {
    fn name(&self) -> &'static str {
        self.0.name()
    }

    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        self.0.compare(b, a)
    }

    fn description(&self) -> &'static str {
        self.0.description()
    }
}
