//! Command-line driver.
//!
//! Loads test cases (or generates one), runs the selected sequencers on
//! each case, times them, and prints the schedules.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use u_sequencing::generate::{random_jobs, GeneratorConfig};
use u_sequencing::input::{read_test_cases, TestCase};
use u_sequencing::report::{JobTable, SequencingReport};
use u_sequencing::scheduler::{Algorithm, Sequencer};
use u_sequencing::validation::validate_case;

/// Sequence one-day jobs with deadlines for maximum profit.
#[derive(Parser)]
#[command(name = "u-sequencing", version, about = "Job sequencing with deadlines")]
struct Cli {
    /// Test case file: a name line, then `name,deadline,profit` lines per case
    #[arg(env = "U_SEQUENCING_INPUT", default_value = "data/test_input.txt")]
    input: PathBuf,

    /// Algorithm to run (repeatable): by-job, by-day, by-job-linear, by-day-linear
    #[arg(short, long = "algorithm", value_name = "ALG")]
    algorithms: Vec<Algorithm>,

    /// Run all four algorithms
    #[arg(long, conflicts_with = "algorithms")]
    all: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Generate a random case with this many jobs instead of reading a file
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 0, requires = "random")]
    seed: u64,

    /// Largest deadline for --random (defaults to the job count)
    #[arg(long, requires = "random")]
    max_deadline: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let algorithms = selected_algorithms(&cli);
    let cases = load_cases(&cli)?;
    info!(cases = cases.len(), algorithms = algorithms.len(), "starting");

    let mut reports = Vec::new();
    for (i, case) in cases.iter().enumerate() {
        if let Err(findings) = validate_case(&case.name, &case.jobs) {
            for finding in findings {
                warn!(kind = ?finding.kind, "{}", finding.message);
            }
        }

        if cli.format == OutputFormat::Table {
            println!();
            println!("Test Case {}: {}", i + 1, case.name);
            println!("{}", "-".repeat(38));
            println!("{}", JobTable(&case.jobs));
        }

        let mut reference_profit: Option<f64> = None;
        for &algorithm in &algorithms {
            let sequencer = Sequencer::new().with_algorithm(algorithm);
            let start = Instant::now();
            let schedule = sequencer.sequence(&case.jobs);
            let elapsed = start.elapsed();

            let report = SequencingReport::new(&case.name, algorithm, &case.jobs, schedule)
                .with_elapsed(elapsed);
            let total = report.kpi.total_profit;
            match reference_profit {
                None => reference_profit = Some(total),
                Some(expected) if (expected - total).abs() > 1e-6 => error!(
                    case = %case.name,
                    %algorithm,
                    expected,
                    total,
                    "algorithms disagree on total profit"
                ),
                Some(_) => {}
            }

            match cli.format {
                OutputFormat::Table => println!("{report}"),
                OutputFormat::Json => reports.push(report),
            }
        }
    }

    if cli.format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&reports).context("serializing reports")?;
        println!("{json}");
    }
    Ok(())
}

fn selected_algorithms(cli: &Cli) -> Vec<Algorithm> {
    if cli.all {
        Algorithm::ALL.to_vec()
    } else if cli.algorithms.is_empty() {
        Algorithm::PRIMARY.to_vec()
    } else {
        cli.algorithms.clone()
    }
}

fn load_cases(cli: &Cli) -> Result<Vec<TestCase>> {
    match cli.random {
        Some(count) => {
            let mut config = GeneratorConfig::new(count).with_unschedulable(true);
            if let Some(max_deadline) = cli.max_deadline {
                config = config.with_max_deadline(max_deadline);
            }
            let mut rng = SmallRng::seed_from_u64(cli.seed);
            let jobs = random_jobs(&config, &mut rng);
            Ok(vec![TestCase::new(
                format!("Random ({count} jobs, seed {})", cli.seed),
                jobs,
            )])
        }
        None => read_test_cases(&cli.input)
            .with_context(|| format!("loading test cases from {}", cli.input.display())),
    }
}
