//! Command-line argument definitions for the classroom report
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::{AppConfig, ParserConfig};
use crate::constants::{DEFAULT_COMPLEX_PATH, DEFAULT_LOG_LEVEL, DEFAULT_SIMPLE_PATH};
use crate::{ClassroomError, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the classroom statistics report
///
/// Reads a simple and a complex classroom file, looks up one student's
/// average in each, and prints classroom statistics for the complex file.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "classroom-stats",
    version,
    about = "Parse classroom record files and report grade statistics",
    long_about = "Parses a simple (five lines per student) and a complex (notes and attributes) \
                  classroom file, looks up a student's average grade in both, and reports the \
                  classroom average, median grade and a ranking of students by average."
)]
pub struct Args {
    /// Path to the simple-format classroom file
    #[arg(
        short = 's',
        long = "simple",
        value_name = "PATH",
        default_value = DEFAULT_SIMPLE_PATH,
        help = "Path to the simple-format classroom file"
    )]
    pub simple_path: PathBuf,

    /// Path to the complex-format classroom file
    #[arg(
        short = 'c',
        long = "complex",
        value_name = "PATH",
        default_value = DEFAULT_COMPLEX_PATH,
        help = "Path to the complex-format classroom file"
    )]
    pub complex_path: PathBuf,

    /// Student to look up
    ///
    /// Matched against lowercased names. If not given, the name is read
    /// from standard input.
    #[arg(
        short = 'n',
        long = "student",
        value_name = "NAME",
        help = "Student name to look up (prompted for if omitted)"
    )]
    pub student: Option<String>,

    /// Report output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format for the report"
    )]
    pub format: OutputFormat,

    /// Hand blank blocks to the decoders instead of dropping them
    ///
    /// A file that ends with a delimiter line then fails to parse.
    #[arg(
        long = "keep-blank-blocks",
        help = "Do not drop blank student blocks before decoding"
    )]
    pub keep_blank_blocks: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON for scripting
    Json,
}

impl Args {
    /// Validate argument consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(student) = &self.student {
            if student.trim().is_empty() {
                return Err(ClassroomError::configuration(
                    "student name must not be empty",
                ));
            }
        }
        Ok(())
    }

    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the run configuration from defaults and CLI overrides
    pub fn to_config(&self) -> AppConfig {
        let mut parser = ParserConfig::default();
        if self.keep_blank_blocks {
            parser = parser.with_blank_blocks();
        }

        AppConfig::default()
            .with_simple_path(&self.simple_path)
            .with_complex_path(&self.complex_path)
            .with_parser(parser)
    }
}
