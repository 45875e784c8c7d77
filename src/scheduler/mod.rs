//! Greedy job sequencers and KPI evaluation.
//!
//! Two greedy strategies solve the job-sequencing-with-deadlines problem,
//! each with two search methods:
//!
//! | Strategy | Ordered set (O(n log n)) | Linear scan (O(n²)) |
//! |----------|--------------------------|---------------------|
//! | By job: best day per job | [`by_job_ordered`] | [`by_job_linear`] |
//! | By day: best job per day | [`by_day_ordered`] | [`by_day_linear`] |
//!
//! All four reach the same total profit. Exact day placement may differ
//! between jobs that tie in profit and deadline.
//!
//! Every variant discards jobs with `profit <= 0` or `deadline <= 0`.
//!
//! # KPI
//!
//! `ScheduleKpi` summarizes a schedule against its input: profit, discards,
//! utilization.
//!
//! # References
//!
//! - Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", §4.4
//! - Cormen et al. (2009), "Introduction to Algorithms", Problem 16-4

mod by_day;
mod by_job;
mod horizon;
mod kpi;

pub use by_day::{by_day_linear, by_day_ordered};
pub use by_job::{by_job_linear, by_job_ordered};
pub use horizon::minimum_horizon;
pub use kpi::ScheduleKpi;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{Job, Schedule};

/// Which greedy direction to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Iterate jobs by profit; pick the latest free day for each.
    ByJob,
    /// Iterate days from last to first; pick the best eligible job for each.
    ByDay,
}

/// How the best day or job is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Search {
    /// Balanced ordered set with predecessor / extract-max queries.
    OrderedSet,
    /// Plain scan over a fixed table.
    LinearScan,
}

/// A strategy paired with a search method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Algorithm {
    /// Greedy direction.
    pub strategy: Strategy,
    /// Search method.
    pub search: Search,
}

/// Returned when an algorithm label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}' (expected by-job, by-day, by-job-linear or by-day-linear)")]
pub struct ParseAlgorithmError(pub String);

impl Algorithm {
    /// Greedy-by-job, ordered set.
    pub const BY_JOB: Self = Self::new(Strategy::ByJob, Search::OrderedSet);
    /// Greedy-by-day, ordered set.
    pub const BY_DAY: Self = Self::new(Strategy::ByDay, Search::OrderedSet);
    /// Greedy-by-job, linear scan.
    pub const BY_JOB_LINEAR: Self = Self::new(Strategy::ByJob, Search::LinearScan);
    /// Greedy-by-day, linear scan.
    pub const BY_DAY_LINEAR: Self = Self::new(Strategy::ByDay, Search::LinearScan);

    /// The two ordered-set algorithms.
    pub const PRIMARY: [Self; 2] = [Self::BY_JOB, Self::BY_DAY];
    /// Every variant.
    pub const ALL: [Self; 4] = [
        Self::BY_JOB,
        Self::BY_DAY,
        Self::BY_JOB_LINEAR,
        Self::BY_DAY_LINEAR,
    ];

    /// Creates an algorithm.
    pub const fn new(strategy: Strategy, search: Search) -> Self {
        Self { strategy, search }
    }

    /// Short label, also accepted by `FromStr`.
    pub fn label(&self) -> &'static str {
        match (self.strategy, self.search) {
            (Strategy::ByJob, Search::OrderedSet) => "by-job",
            (Strategy::ByDay, Search::OrderedSet) => "by-day",
            (Strategy::ByJob, Search::LinearScan) => "by-job-linear",
            (Strategy::ByDay, Search::LinearScan) => "by-day-linear",
        }
    }

    /// Runs the algorithm.
    pub fn run(&self, jobs: &[Job]) -> Schedule {
        match (self.strategy, self.search) {
            (Strategy::ByJob, Search::OrderedSet) => by_job_ordered(jobs),
            (Strategy::ByDay, Search::OrderedSet) => by_day_ordered(jobs),
            (Strategy::ByJob, Search::LinearScan) => by_job_linear(jobs),
            (Strategy::ByDay, Search::LinearScan) => by_day_linear(jobs),
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Self::BY_JOB
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.label() == label)
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}

impl From<Algorithm> for String {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.label().to_string()
    }
}

impl TryFrom<String> for Algorithm {
    type Error = ParseAlgorithmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Job sequencer.
///
/// Thin, stateless front end over the four algorithm functions. Each call
/// owns its scratch state, so one sequencer may be shared across threads.
///
/// # Example
///
/// ```
/// use u_sequencing::models::Job;
/// use u_sequencing::scheduler::{Algorithm, Sequencer};
///
/// let jobs = vec![
///     Job::new("A", 4, 20.0).unwrap(),
///     Job::new("B", 1, 10.0).unwrap(),
///     Job::new("C", 1, 40.0).unwrap(),
///     Job::new("D", 1, 30.0).unwrap(),
/// ];
///
/// let sequencer = Sequencer::new().with_algorithm(Algorithm::BY_DAY);
/// let schedule = sequencer.sequence(&jobs);
/// assert_eq!(schedule.job_on_day(0).map(Job::name), Some("C"));
/// assert!((schedule.total_profit() - 60.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    algorithm: Algorithm,
}

impl Sequencer {
    /// Creates a sequencer using greedy-by-job with an ordered set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// The configured algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Computes a schedule. Empty input yields an empty schedule.
    pub fn sequence(&self, jobs: &[Job]) -> Schedule {
        let schedule = self.algorithm.run(jobs);
        debug!(
            algorithm = self.algorithm.label(),
            jobs = jobs.len(),
            horizon = schedule.horizon,
            scheduled = schedule.job_count(),
            "sequenced jobs"
        );
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::{by_job_ordered, Algorithm, Sequencer};
    use crate::models::{Job, Schedule};
    use crate::report::discarded_jobs;
    use proptest::prelude::*;

    fn job(name: &str, deadline: i64, profit: f64) -> Job {
        Job::new(name, deadline, profit).unwrap()
    }

    fn textbook() -> Vec<Job> {
        vec![
            job("A", 4, 20.0),
            job("B", 1, 10.0),
            job("C", 1, 40.0),
            job("D", 1, 30.0),
        ]
    }

    fn names(schedule: &Schedule) -> Vec<&str> {
        let mut names: Vec<&str> = schedule.jobs().map(Job::name).collect();
        names.sort_unstable();
        names
    }

    #[test]
    fn test_textbook_all_algorithms() {
        let jobs = textbook();
        for algorithm in Algorithm::ALL {
            let s = Sequencer::new().with_algorithm(algorithm).sequence(&jobs);
            assert_eq!(names(&s), vec!["A", "C"], "{algorithm}");
            assert_eq!(s.job_on_day(0).map(Job::name), Some("C"), "{algorithm}");
            assert!((s.total_profit() - 60.0).abs() < 1e-10, "{algorithm}");

            let discarded = discarded_jobs(&jobs, &s);
            let mut dropped: Vec<&str> = discarded.iter().map(Job::name).collect();
            dropped.sort_unstable();
            assert_eq!(dropped, vec!["B", "D"], "{algorithm}");
        }
    }

    #[test]
    fn test_empty_input_all_algorithms() {
        for algorithm in Algorithm::ALL {
            let s = algorithm.run(&[]);
            assert!(s.is_empty());
            assert_eq!(s.horizon, 0);
            assert!(discarded_jobs(&[], &s).is_empty());
        }
    }

    #[test]
    fn test_zero_deadline_and_negative_profit_always_discarded() {
        let jobs = vec![
            job("huge_but_late", 0, 1_000_000.0),
            job("negative", 1_000, -0.01),
            job("filler", 2, 1.0),
        ];
        for algorithm in Algorithm::ALL {
            let s = algorithm.run(&jobs);
            assert_eq!(names(&s), vec!["filler"], "{algorithm}");
        }
    }

    #[test]
    fn test_algorithm_labels_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.label().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!(" BY-DAY ".parse::<Algorithm>(), Ok(Algorithm::BY_DAY));
        assert!("by-week".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::default(), Algorithm::BY_JOB);
    }

    #[test]
    fn test_algorithm_serde() {
        let json = serde_json::to_string(&Algorithm::BY_DAY_LINEAR).unwrap();
        assert_eq!(json, "\"by-day-linear\"");
        let back: Algorithm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Algorithm::BY_DAY_LINEAR);
        assert!(serde_json::from_str::<Algorithm>("\"nope\"").is_err());
    }

    #[test]
    fn test_sequencer_builder() {
        let s = Sequencer::new().with_algorithm(Algorithm::BY_DAY_LINEAR);
        assert_eq!(s.algorithm(), Algorithm::BY_DAY_LINEAR);
    }

    fn arb_jobs() -> impl Strategy<Value = Vec<Job>> {
        prop::collection::vec((-2i64..12, -20i32..60), 0..40).prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                // Few distinct names so exact duplicates show up.
                .map(|(i, (deadline, profit))| {
                    Job::new(format!("J{}", i % 7), deadline, f64::from(profit)).unwrap()
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_all_algorithms_same_total(jobs in arb_jobs()) {
            let reference = by_job_ordered(&jobs).total_profit();
            for algorithm in Algorithm::ALL {
                let total = algorithm.run(&jobs).total_profit();
                prop_assert!(
                    (total - reference).abs() < 1e-6,
                    "{} gave {} vs {}",
                    algorithm,
                    total,
                    reference
                );
            }
        }

        #[test]
        fn prop_schedules_are_feasible(jobs in arb_jobs()) {
            for algorithm in Algorithm::ALL {
                let s = algorithm.run(&jobs);
                prop_assert!(s.is_feasible());
                for slot in &s.slots {
                    prop_assert!(slot.job.profit() > 0.0);
                    prop_assert!(slot.job.deadline() > 0);
                    prop_assert!((slot.day as i64) < slot.job.deadline());
                }
            }
        }

        #[test]
        fn prop_schedule_and_discards_partition_input(jobs in arb_jobs()) {
            for algorithm in Algorithm::ALL {
                let s = algorithm.run(&jobs);
                let discarded = discarded_jobs(&jobs, &s);
                prop_assert_eq!(s.job_count() + discarded.len(), jobs.len());

                let mut union: Vec<Job> = s.jobs().cloned().chain(discarded).collect();
                let mut input = jobs.clone();
                union.sort();
                input.sort();
                prop_assert_eq!(union, input);
            }
        }

        #[test]
        fn prop_rerun_is_idempotent(jobs in arb_jobs()) {
            for algorithm in Algorithm::ALL {
                let first = algorithm.run(&jobs);
                let second = algorithm.run(&jobs);
                prop_assert_eq!(first, second);
            }
        }
    }
}
