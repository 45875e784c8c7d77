//! Random problem instances.
//!
//! Produces job lists for benchmarking and cross-checking the four
//! sequencers against each other.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_sequencing::generate::{random_jobs, GeneratorConfig};
//!
//! let config = GeneratorConfig::new(50).with_max_deadline(10);
//! let mut rng = SmallRng::seed_from_u64(7);
//! let jobs = random_jobs(&config, &mut rng);
//! assert_eq!(jobs.len(), 50);
//! ```

use rand::Rng;

use crate::models::Job;

/// Generator settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Number of jobs.
    pub count: usize,
    /// Deadlines are drawn from `1..=max_deadline`.
    pub max_deadline: i64,
    /// Largest profit magnitude.
    pub max_profit: f64,
    /// Also draw non-positive deadlines and profits.
    pub allow_unschedulable: bool,
}

impl GeneratorConfig {
    /// Creates a config for `count` jobs with deadlines up to `count`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_deadline: i64::try_from(count).unwrap_or(i64::MAX).max(1),
            max_profit: 100.0,
            allow_unschedulable: false,
        }
    }

    /// Sets the largest deadline (at least 1).
    pub fn with_max_deadline(mut self, max_deadline: i64) -> Self {
        self.max_deadline = max_deadline.max(1);
        self
    }

    /// Sets the largest profit magnitude. Values below one cent narrow
    /// the profit range to that single value.
    pub fn with_max_profit(mut self, max_profit: f64) -> Self {
        self.max_profit = max_profit;
        self
    }

    /// Allows deadlines `<= 0` and profits `<= 0`.
    pub fn with_unschedulable(mut self, allow: bool) -> Self {
        self.allow_unschedulable = allow;
        self
    }
}

/// Draws `config.count` jobs named `J1..Jn`.
///
/// Profits are rounded to cents so ties occur at realistic rates.
pub fn random_jobs<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Vec<Job> {
    let max_profit = if config.max_profit.is_finite() && config.max_profit > 0.0 {
        config.max_profit
    } else {
        1.0
    };
    let (min_deadline, min_profit) = if config.allow_unschedulable {
        (-1, -max_profit / 4.0)
    } else {
        (1, 0.01_f64.min(max_profit))
    };

    (1..=config.count)
        .filter_map(|i| {
            let deadline = rng.random_range(min_deadline..=config.max_deadline);
            let profit = (rng.random_range(min_profit..=max_profit) * 100.0).round() / 100.0;
            Job::new(format!("J{i}"), deadline, profit).ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Algorithm;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_generator_ranges() {
        let config = GeneratorConfig::new(200).with_max_deadline(15).with_max_profit(50.0);
        let mut rng = SmallRng::seed_from_u64(42);
        let jobs = random_jobs(&config, &mut rng);

        assert_eq!(jobs.len(), 200);
        assert!(jobs.iter().all(|j| (1..=15).contains(&j.deadline())));
        assert!(jobs.iter().all(|j| j.profit() > 0.0 && j.profit() <= 50.0));
        assert_eq!(jobs[0].name(), "J1");
        assert_eq!(jobs[199].name(), "J200");
    }

    #[test]
    fn test_generator_unschedulable() {
        let config = GeneratorConfig::new(500)
            .with_max_deadline(3)
            .with_unschedulable(true);
        let mut rng = SmallRng::seed_from_u64(1);
        let jobs = random_jobs(&config, &mut rng);

        assert!(jobs.iter().any(|j| j.deadline() <= 0));
        assert!(jobs.iter().any(|j| j.profit() <= 0.0));
    }

    #[test]
    fn test_generator_seeded_is_reproducible() {
        let config = GeneratorConfig::new(30);
        let a = random_jobs(&config, &mut SmallRng::seed_from_u64(9));
        let b = random_jobs(&config, &mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_instances_agree_across_algorithms() {
        let mut rng = SmallRng::seed_from_u64(2024);
        for size in [1, 5, 40, 300] {
            let config = GeneratorConfig::new(size)
                .with_max_deadline((size as i64 / 3).max(1))
                .with_unschedulable(true);
            let jobs = random_jobs(&config, &mut rng);
            let totals: Vec<f64> = Algorithm::ALL
                .iter()
                .map(|a| a.run(&jobs).total_profit())
                .collect();
            assert!(
                totals.iter().all(|t| (t - totals[0]).abs() < 1e-6),
                "size {size}: {totals:?}"
            );
        }
    }

    #[test]
    fn test_generator_tiny_max_profit() {
        let config = GeneratorConfig::new(3).with_max_profit(0.005);
        let jobs = random_jobs(&config, &mut SmallRng::seed_from_u64(1));
        assert_eq!(jobs.len(), 3);
        assert!(jobs.iter().all(|j| j.profit() >= 0.0 && j.profit() <= 0.01));
    }

    #[test]
    fn test_config_defaults() {
        let config = GeneratorConfig::new(0);
        assert_eq!(config.max_deadline, 1);
        assert!(random_jobs(&config, &mut SmallRng::seed_from_u64(0)).is_empty());
    }
}
