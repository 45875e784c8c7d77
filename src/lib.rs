//! Job sequencing with deadlines.
//!
//! Given jobs that each take one day, carry a deadline and a profit, find
//! the one-job-per-day schedule with the largest total profit. Two greedy
//! strategies are provided, each with an ordered-set and a linear-scan
//! search, and all four reach the same optimum.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `Schedule`, `Slot`
//! - **`ordering`**: Named job orderings (`Natural`, `ByProfit`, `ByDeadline`)
//! - **`scheduler`**: The four sequencers, `Sequencer`, horizon and KPIs
//! - **`validation`**: Input lints (duplicate names, empty cases)
//! - **`input`**: Loader for `name,deadline,profit` test case files
//! - **`report`**: Discard sets, console tables, JSON reports
//! - **`generate`**: Seeded random instances
//!
//! # Example
//!
//! ```
//! use u_sequencing::models::Job;
//! use u_sequencing::report::discarded_jobs;
//! use u_sequencing::scheduler::Sequencer;
//!
//! let jobs = vec![
//!     Job::new("a", 2, 100.0).unwrap(),
//!     Job::new("b", 1, 19.0).unwrap(),
//!     Job::new("c", 2, 27.0).unwrap(),
//!     Job::new("d", 1, 25.0).unwrap(),
//!     Job::new("e", 3, 15.0).unwrap(),
//! ];
//! let schedule = Sequencer::new().sequence(&jobs);
//! assert!((schedule.total_profit() - 142.0).abs() < 1e-10);
//! assert_eq!(discarded_jobs(&jobs, &schedule).len(), 2);
//! ```
//!
//! # References
//!
//! - Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", §4.4
//! - Cormen et al. (2009), "Introduction to Algorithms", Problem 16-4

pub mod generate;
pub mod input;
pub mod models;
pub mod ordering;
pub mod report;
pub mod scheduler;
pub mod validation;
