//! Test case loader.
//!
//! # Format
//!
//! ```text
//! Textbook example
//! A,4,20
//! B,1,10
//!
//! Second case
//! Essay,3,25.5
//! ```
//!
//! Each case is a name line followed by `name,deadline,profit` lines and
//! ends at a blank line or end of input. Extra blank lines between cases
//! are ignored. Fields are trimmed; the deadline is an integer and the
//! profit a real number.

use std::fs;
use std::num::{ParseFloatError, ParseIntError};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{Job, JobError};

/// A named list of jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Case name, taken from the header line.
    pub name: String,
    /// Jobs in file order.
    pub jobs: Vec<Job>,
}

impl TestCase {
    /// Creates a test case.
    pub fn new(name: impl Into<String>, jobs: Vec<Job>) -> Self {
        Self {
            name: name.into(),
            jobs,
        }
    }
}

/// Errors raised while loading test cases. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A job line has fewer than three fields.
    #[error("line {line}: missing {field} field")]
    MissingField {
        /// Line number.
        line: usize,
        /// Name of the absent field.
        field: &'static str,
    },

    /// A job line has more than three fields.
    #[error("line {line}: unexpected extra field '{value}'")]
    UnexpectedField {
        /// Line number.
        line: usize,
        /// First surplus field.
        value: String,
    },

    /// The deadline is not an integer.
    #[error("line {line}: invalid deadline '{value}': {source}")]
    InvalidDeadline {
        /// Line number.
        line: usize,
        /// Raw field text.
        value: String,
        /// Parse failure.
        #[source]
        source: ParseIntError,
    },

    /// The profit is not a number.
    #[error("line {line}: invalid profit '{value}': {source}")]
    InvalidProfit {
        /// Line number.
        line: usize,
        /// Raw field text.
        value: String,
        /// Parse failure.
        #[source]
        source: ParseFloatError,
    },

    /// The job itself was rejected.
    #[error("line {line}: {source}")]
    InvalidJob {
        /// Line number.
        line: usize,
        /// Construction failure.
        #[source]
        source: JobError,
    },
}

/// Reads and parses a test case file.
pub fn read_test_cases(path: impl AsRef<Path>) -> Result<Vec<TestCase>, InputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cases = parse_test_cases(&text)?;
    debug!(path = %path.display(), cases = cases.len(), "loaded test cases");
    Ok(cases)
}

/// Parses test cases from text.
///
/// # Example
///
/// ```
/// use u_sequencing::input::parse_test_cases;
///
/// let cases = parse_test_cases("Demo\nA,4,20\nB,1,10\n").unwrap();
/// assert_eq!(cases.len(), 1);
/// assert_eq!(cases[0].name, "Demo");
/// assert_eq!(cases[0].jobs.len(), 2);
/// ```
pub fn parse_test_cases(text: &str) -> Result<Vec<TestCase>, InputError> {
    let mut cases = Vec::new();
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

    while let Some((_, header)) = lines.by_ref().find(|(_, l)| !l.trim().is_empty()) {
        let mut case = TestCase::new(header.trim(), Vec::new());
        for (number, line) in lines.by_ref() {
            if line.trim().is_empty() {
                break;
            }
            case.jobs.push(parse_job_line(number, line)?);
        }
        cases.push(case);
    }

    Ok(cases)
}

fn parse_job_line(line: usize, text: &str) -> Result<Job, InputError> {
    let mut fields = text.split(',').map(str::trim);
    let mut next = |field: &'static str| {
        fields
            .next()
            .ok_or(InputError::MissingField { line, field })
    };

    let name = next("name")?;
    let deadline_text = next("deadline")?;
    let profit_text = next("profit")?;
    if let Some(extra) = fields.next() {
        return Err(InputError::UnexpectedField {
            line,
            value: extra.to_string(),
        });
    }

    let deadline = deadline_text
        .parse::<i64>()
        .map_err(|source| InputError::InvalidDeadline {
            line,
            value: deadline_text.to_string(),
            source,
        })?;
    let profit = profit_text
        .parse::<f64>()
        .map_err(|source| InputError::InvalidProfit {
            line,
            value: profit_text.to_string(),
            source,
        })?;

    Job::new(name, deadline, profit).map_err(|source| InputError::InvalidJob { line, source })
}
