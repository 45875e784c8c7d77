//! Job sequencing domain models.
//!
//! Provides the data types for one-machine, one-job-per-day sequencing
//! problems with deadlines and profits, and for their solutions.
//!
//! # Domain Mappings
//!
//! | u-sequencing | Coursework | Consulting | Manufacturing |
//! |--------------|------------|------------|---------------|
//! | Job | Assignment/Exam | Engagement | Order |
//! | Deadline | Due day | Contract end | Ship date |
//! | Profit | Marks | Fee − cost | Margin |
//! | Schedule | Study plan | Calendar | Production plan |

mod job;
mod schedule;

pub use job::{Job, JobError};
pub use schedule::{Schedule, Slot};
