//! Schedule reporting.
//!
//! Everything a caller needs to present a result: the discard set, the
//! console tables, and a serializable report for JSON output. The
//! schedulers themselves never print.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::models::{Job, Schedule};
use crate::scheduler::{Algorithm, ScheduleKpi};

/// Input jobs that did not make it into the schedule.
///
/// Multiset difference `jobs − schedule`, in input order. Identical jobs
/// are matched one for one, so a duplicate left out is still reported.
pub fn discarded_jobs(jobs: &[Job], schedule: &Schedule) -> Vec<Job> {
    let mut scheduled: Vec<&Job> = schedule.jobs().collect();
    scheduled.sort();
    // Matches consumed so far, tracked at the first index of each run of equal jobs.
    let mut consumed = vec![0usize; scheduled.len()];

    jobs.iter()
        .filter(|&job| {
            let start = scheduled.partition_point(|&s| s < job);
            let next = start + consumed.get(start).copied().unwrap_or(0);
            if scheduled.get(next).is_some_and(|&s| s == job) {
                consumed[start] += 1;
                false
            } else {
                true
            }
        })
        .cloned()
        .collect()
}

/// Numbered listing of a job list.
#[derive(Debug, Clone, Copy)]
pub struct JobTable<'a>(pub &'a [Job]);

impl fmt::Display for JobTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No job to be displayed.");
        }
        writeln!(f, "{:<4}{:<24}{:>9}{:>12}", "No", "Job", "Deadline", "Profit")?;
        for (i, job) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{:<4}{:<24}{:>9}{:>12.2}",
                i + 1,
                job.name(),
                job.deadline(),
                job.profit()
            )?;
        }
        Ok(())
    }
}

/// Outcome of running one algorithm on one test case.
#[derive(Debug, Clone, Serialize)]
pub struct SequencingReport {
    /// Test case name.
    pub case: String,
    /// Algorithm that produced the schedule.
    pub algorithm: Algorithm,
    /// The schedule.
    pub schedule: Schedule,
    /// Input jobs left out, in input order.
    pub discarded: Vec<Job>,
    /// Quality metrics.
    pub kpi: ScheduleKpi,
    /// Wall-clock time of the scheduler call, if measured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_secs: Option<f64>,
}

impl SequencingReport {
    /// Builds a report for `schedule`, computed by `algorithm` from `jobs`.
    pub fn new(
        case: impl Into<String>,
        algorithm: Algorithm,
        jobs: &[Job],
        schedule: Schedule,
    ) -> Self {
        let kpi = ScheduleKpi::calculate(&schedule, jobs);
        Self {
            case: case.into(),
            algorithm,
            discarded: discarded_jobs(jobs, &schedule),
            schedule,
            kpi,
            elapsed_secs: None,
        }
    }

    /// Records how long the scheduler took.
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed_secs = Some(elapsed.as_secs_f64());
        self
    }
}

impl fmt::Display for SequencingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = format!("Using {}", self.algorithm);
        writeln!(f, "{title}")?;
        writeln!(f, "{}", "-".repeat(title.len()))?;

        if self.schedule.is_empty() {
            writeln!(f, "No job to be assigned.")?;
        } else {
            writeln!(f, "{:<4}{:<24}{:>9}{:>12}", "Day", "Job", "Deadline", "Profit")?;
            for slot in &self.schedule.slots {
                writeln!(
                    f,
                    "{:<4}{:<24}{:>9}{:>12.2}",
                    slot.day,
                    slot.job.name(),
                    slot.job.deadline(),
                    slot.job.profit()
                )?;
            }
            writeln!(f, "{:<37}{:>12.2}", "Total", self.kpi.total_profit)?;
        }

        if self.discarded.is_empty() {
            writeln!(f, "Discarded Job: None")?;
        } else {
            writeln!(f, "Discarded Job:")?;
            for job in &self.discarded {
                writeln!(f, "- {}", job.name())?;
            }
        }

        if let Some(secs) = self.elapsed_secs {
            writeln!(f, "Execution time: {secs:.8}s")?;
        }
        Ok(())
    }
}
