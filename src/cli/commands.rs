//! Command implementation for the classroom report CLI
//!
//! This module contains the main execution logic: logging setup,
//! configuration, the student prompt, and report output.

use anyhow::Context;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use crate::app::services::record_parser::ClassroomParser;
use crate::app::services::statistics::{compute_statistics, lookup_average};
use crate::cli::args::{Args, OutputFormat};
use crate::cli::report::{ClassroomReport, LookupOutcome};
use crate::config::AppConfig;

/// Main command runner
///
/// 1. Set up logging and configuration
/// 2. Resolve the student name (flag or prompt)
/// 3. Parse both classroom files and compute statistics
/// 4. Print the report in the requested format
pub fn run(args: Args) -> anyhow::Result<ClassroomReport> {
    setup_logging(&args)?;

    info!("Starting classroom report");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = args.to_config();
    config.validate()?;

    let student = match &args.student {
        Some(name) => name.clone(),
        None => prompt_student_name(&mut io::stdin().lock(), &mut io::stdout())?,
    }
    .to_lowercase();

    let report = build_report(&config, &student)?;

    match args.format {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => println!(
            "{}",
            report.render_json().context("Failed to serialize report")?
        ),
    }

    Ok(report)
}

/// Parse both files, look the student up in each, and gather statistics
///
/// `student` is used as the exact lookup key.
pub fn build_report(config: &AppConfig, student: &str) -> crate::Result<ClassroomReport> {
    let parser = ClassroomParser::with_config(config.parser.clone());

    let simple = parser.parse_simple_file(&config.simple_path)?;
    let simple_avg = lookup_average(&simple.records, student);
    debug!("Simple lookup for '{}': {:?}", student, simple_avg);

    let complex = parser.parse_complex_file(&config.complex_path)?;
    let complex_avg = lookup_average(&complex.records, student);
    debug!("Complex lookup for '{}': {:?}", student, complex_avg);

    let statistics = compute_statistics(&complex.records)?;

    Ok(ClassroomReport::new(
        student,
        LookupOutcome::new(&config.simple_path, simple_avg, simple.stats),
        LookupOutcome::new(&config.complex_path, complex_avg, complex.stats),
        &statistics,
    ))
}

/// Ask for a student name on `output` and read one line from `input`
pub fn prompt_student_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<String> {
    write!(output, "Please write student's name: ")?;
    output.flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read student name")?;

    let name = line.trim();
    if name.is_empty() {
        anyhow::bail!("No student name given");
    }
    Ok(name.to_string())
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("classroom_stats={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
