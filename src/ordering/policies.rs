//! Built-in ordering policies.
//!
//! | Policy | Keys (ascending) | Strict? |
//! |--------|------------------|---------|
//! | `Natural` | profit, deadline | no, name ties compare equal |
//! | `ByProfit` | profit, deadline, name | yes |
//! | `ByDeadline` | deadline, profit, name | yes |
//!
//! Profits are compared with `f64::total_cmp`; job construction already
//! rules out NaN.

use std::cmp::Ordering;

use super::JobOrdering;
use crate::models::Job;

/// Profit, then deadline. Jobs that differ only by name compare equal.
///
/// Used where ties are immaterial to the result, e.g. the linear by-job scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl JobOrdering for Natural {
    fn name(&self) -> &'static str {
        "NATURAL"
    }

    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        a.profit()
            .total_cmp(&b.profit())
            .then_with(|| a.deadline().cmp(&b.deadline()))
    }

    fn description(&self) -> &'static str {
        "Profit, then deadline"
    }
}

/// Profit, then deadline, then name.
///
/// Matches the default `Ord` of [`Job`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ByProfit;

impl JobOrdering for ByProfit {
    fn name(&self) -> &'static str {
        "BY_PROFIT"
    }

    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        a.cmp(b)
    }

    fn description(&self) -> &'static str {
        "Profit, then deadline, then name"
    }
}

/// Deadline, then profit, then name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByDeadline;

impl JobOrdering for ByDeadline {
    fn name(&self) -> &'static str {
        "BY_DEADLINE"
    }

    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        a.deadline()
            .cmp(&b.deadline())
            .then_with(|| a.profit().total_cmp(&b.profit()))
            .then_with(|| a.name().cmp(b.name()))
    }

    fn description(&self) -> &'static str {
        "Deadline, then profit, then name"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(name: &str, deadline: i64, profit: f64) -> Job {
        Job::new(name, deadline, profit).unwrap()
    }

    #[test]
    fn test_natural_ignores_name() {
        let a = job("A", 3, 10.0);
        let b = job("B", 3, 10.0);
        assert_eq!(Natural.compare(&a, &b), Ordering::Equal);
        assert_eq!(Natural.compare(&a, &job("C", 4, 10.0)), Ordering::Less);
        assert_eq!(Natural.compare(&a, &job("D", 1, 11.0)), Ordering::Less);
    }

    #[test]
    fn test_by_profit_breaks_ties_by_name() {
        let a = job("A", 3, 10.0);
        let b = job("B", 3, 10.0);
        assert_eq!(ByProfit.compare(&a, &b), Ordering::Less);
        assert_eq!(ByProfit.compare(&a, &job("A", 3, 10.0)), Ordering::Equal);
        assert_eq!(ByProfit.compare(&job("Z", 9, 1.0), &a), Ordering::Less);
    }

    #[test]
    fn test_by_deadline_keys() {
        let early_rich = job("A", 1, 99.0);
        let late_poor = job("B", 5, 1.0);
        let late_rich = job("C", 5, 50.0);
        assert_eq!(ByDeadline.compare(&early_rich, &late_poor), Ordering::Less);
        assert_eq!(ByDeadline.compare(&late_poor, &late_rich), Ordering::Less);
        assert_eq!(
            ByDeadline.compare(&job("A", 5, 1.0), &job("B", 5, 1.0)),
            Ordering::Less
        );
    }

    #[test]
    fn test_negative_profits_order() {
        let loss = job("L", 2, -5.0);
        let zero = job("Z", 2, 0.0);
        assert_eq!(ByProfit.compare(&loss, &zero), Ordering::Less);
        assert_eq!(Natural.compare(&loss, &zero), Ordering::Less);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Natural.name(), "NATURAL");
        assert_eq!(ByDeadline.description(), "Deadline, then profit, then name");
    }
}
