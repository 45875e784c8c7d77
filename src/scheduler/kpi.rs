//! Schedule quality metrics (KPIs).
//!
//! Summarizes a finished schedule against the jobs it was built from.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total profit | Sum of scheduled profits |
//! | Scheduled / Discarded | Job counts on each side of the split |
//! | Ineligible | Jobs with `profit <= 0` or `deadline <= 0` |
//! | Forgone profit | Positive profit of eligible jobs left out |
//! | Utilization | Busy days / horizon |

use serde::Serialize;

use crate::models::{Job, Schedule};
use crate::report::discarded_jobs;

/// Schedule performance indicators.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleKpi {
    /// Sum of scheduled profits.
    pub total_profit: f64,
    /// Number of scheduled jobs.
    pub scheduled: usize,
    /// Number of input jobs not in the schedule.
    pub discarded: usize,
    /// Discarded jobs that could never be scheduled.
    pub ineligible: usize,
    /// Profit of schedulable jobs that lost out to better ones.
    pub forgone_profit: f64,
    /// Day slots considered.
    pub horizon: usize,
    /// Fraction of horizon days in use (0.0..1.0). Zero for an empty horizon.
    pub utilization: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and its input jobs.
    pub fn calculate(schedule: &Schedule, jobs: &[Job]) -> Self {
        let discarded = discarded_jobs(jobs, schedule);
        let ineligible = discarded.iter().filter(|j| !j.is_schedulable()).count();
        let forgone_profit = discarded
            .iter()
            .filter(|j| j.is_schedulable())
            .map(Job::profit)
            .sum();

        let utilization = if schedule.horizon == 0 {
            0.0
        } else {
            schedule.job_count() as f64 / schedule.horizon as f64
        };

        Self {
            total_profit: schedule.total_profit(),
            scheduled: schedule.job_count(),
            discarded: discarded.len(),
            ineligible,
            forgone_profit,
            horizon: schedule.horizon,
            utilization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::by_job_ordered;

    fn job(name: &str, deadline: i64, profit: f64) -> Job {
        Job::new(name, deadline, profit).unwrap()
    }

    #[test]
    fn test_kpi_textbook() {
        let jobs = vec![
            job("A", 4, 20.0),
            job("B", 1, 10.0),
            job("C", 1, 40.0),
            job("D", 1, 30.0),
        ];
        let kpi = ScheduleKpi::calculate(&by_job_ordered(&jobs), &jobs);
        assert!((kpi.total_profit - 60.0).abs() < 1e-10);
        assert_eq!(kpi.scheduled, 2);
        assert_eq!(kpi.discarded, 2);
        assert_eq!(kpi.ineligible, 0);
        assert!((kpi.forgone_profit - 40.0).abs() < 1e-10);
        assert_eq!(kpi.horizon, 4);
        assert!((kpi.utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_ineligible() {
        let jobs = vec![job("late", 0, 9.0), job("loss", 2, -3.0), job("ok", 2, 1.0)];
        let kpi = ScheduleKpi::calculate(&by_job_ordered(&jobs), &jobs);
        assert_eq!(kpi.scheduled, 1);
        assert_eq!(kpi.ineligible, 2);
        assert!((kpi.forgone_profit - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&Schedule::default(), &[]);
        assert_eq!(kpi.scheduled, 0);
        assert_eq!(kpi.discarded, 0);
        assert!((kpi.utilization - 0.0).abs() < 1e-10);
        assert!((kpi.total_profit - 0.0).abs() < 1e-10);
    }
}
