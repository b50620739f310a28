//! Classroom Stats Library
//!
//! A Rust library for parsing flat-text classroom record files and computing
//! grade statistics over the parsed students.
//!
//! This library provides tools for:
//! - Splitting classroom files into per-student blocks
//! - Decoding the fixed five-line simple format and the extensible complex
//!   format (notes and `key=value` attributes)
//! - Looking up a student's average by name
//! - Computing classroom average, median grade and a ranking by average

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod record_parser;
        pub mod statistics;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod report;
}

// Re-export commonly used types
pub use app::models::{ClassroomCollection, ComplexStudent, SimpleStudent};
pub use app::services::record_parser::{
    ClassroomParser, ParseResult, ParseStats, parse_complex, parse_simple,
};
pub use app::services::statistics::{
    AverageLookup, ClassroomStatistics, compute_statistics, lookup_average,
};
pub use config::{AppConfig, ParserConfig};
pub use error::{ClassroomError, Result};
