//! Parser for flat-text classroom files
//!
//! ## Architecture
//!
//! - [`parser`] - Parser front-end: file reading, block filtering, dispatch
//! - [`splitter`] - Header removal and block splitting
//! - [`simple`] - Fixed five-line block decoder
//! - [`complex`] - Variable-length block decoder with notes and attributes
//! - [`field_parsers`] - Line-level helpers shared by the decoders
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use classroom_stats::app::services::record_parser::ClassroomParser;
//!
//! # fn example() -> classroom_stats::Result<()> {
//! let parser = ClassroomParser::new();
//! let result = parser.parse_complex_str("header\nBob\nSpain\n70\n80\n")?;
//!
//! assert_eq!(result.records.get("bob").map(|s| s.average), Some(75.0));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod complex;
pub mod field_parsers;
pub mod parser;
pub mod simple;
pub mod splitter;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use parser::ClassroomParser;
pub use stats::{ParseResult, ParseStats};

use crate::Result;
use crate::app::models::{ClassroomCollection, SimpleStudent};

/// Parse simple-format text with default settings
pub fn parse_simple(text: &str) -> Result<Vec<SimpleStudent>> {
    ClassroomParser::new()
        .parse_simple_str(text)
        .map(ParseResult::into_records)
}

/// Parse complex-format text with default settings
pub fn parse_complex(text: &str) -> Result<ClassroomCollection> {
    ClassroomParser::new()
        .parse_complex_str(text)
        .map(ParseResult::into_records)
}
