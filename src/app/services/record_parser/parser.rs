//! Core classroom parser implementation
//!
//! This module provides the parser front-end: whole-file reading, block
//! splitting and filtering, and dispatch to the format decoders.

use std::path::Path;
use tracing::{debug, info};

use super::complex::decode_complex_block;
use super::simple::decode_simple_block;
use super::splitter::{is_blank_block, split_blocks};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{ClassroomCollection, SimpleStudent};
use crate::config::ParserConfig;
use crate::{ClassroomError, Result};

/// Parser for simple and complex classroom files
#[derive(Debug, Clone, Default)]
pub struct ClassroomParser {
    config: ParserConfig,
}

impl ClassroomParser {
    /// Create a parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse simple-format text into records in file order
    pub fn parse_simple_str(&self, text: &str) -> Result<ParseResult<Vec<SimpleStudent>>> {
        let mut stats = ParseStats::new();
        let mut students = Vec::new();

        for (block, raw) in self.blocks(text, &mut stats) {
            students.push(decode_simple_block(raw, block)?);
            stats.records_parsed += 1;
        }

        debug!("{}", stats.summary());
        Ok(ParseResult::new(students, stats))
    }

    /// Parse complex-format text into a collection keyed by lowercased name
    pub fn parse_complex_str(&self, text: &str) -> Result<ParseResult<ClassroomCollection>> {
        let mut stats = ParseStats::new();
        let mut collection = ClassroomCollection::new();

        for (block, raw) in self.blocks(text, &mut stats) {
            let student = decode_complex_block(raw, block, &self.config, &mut stats)?;
            if let Some(previous) = collection.insert_student(student) {
                debug!(
                    "Block {}: replaced earlier record for '{}'",
                    block, previous.name
                );
                stats.duplicates_replaced += 1;
            }
            stats.records_parsed += 1;
        }

        debug!("{}", stats.summary());
        Ok(ParseResult::new(collection, stats))
    }

    /// Read and parse a simple-format file
    pub fn parse_simple_file(&self, path: &Path) -> Result<ParseResult<Vec<SimpleStudent>>> {
        info!("Parsing simple classroom file: {}", path.display());
        let text = read_file(path)?;
        self.parse_simple_str(&text)
    }

    /// Read and parse a complex-format file
    pub fn parse_complex_file(&self, path: &Path) -> Result<ParseResult<ClassroomCollection>> {
        info!("Parsing complex classroom file: {}", path.display());
        let text = read_file(path)?;
        self.parse_complex_str(&text)
    }

    /// Split text into numbered blocks, dropping blank ones when configured
    ///
    /// Block numbers are 1-based positions in the file, counted before
    /// filtering so error messages point at the right block.
    fn blocks<'a>(&self, text: &'a str, stats: &mut ParseStats) -> Vec<(usize, &'a str)> {
        let raw_blocks = split_blocks(text);
        stats.total_blocks = raw_blocks.len();

        let mut blocks = Vec::with_capacity(raw_blocks.len());
        for (i, raw) in raw_blocks.into_iter().enumerate() {
            let block = i + 1;
            if self.config.skip_blank_blocks && is_blank_block(raw) {
                debug!("Skipping blank block {}", block);
                stats.blank_blocks_skipped += 1;
                continue;
            }
            blocks.push((block, raw));
        }
        blocks
    }
}

/// Read a whole file; the handle is released before parsing starts
///
/// Line endings are normalized to `\n` so the delimiter line matches
/// regardless of the platform the file was written on.
fn read_file(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(|e| ClassroomError::io(path, e))?;
    Ok(normalize_line_endings(&text))
}

/// Convert `\r\n` and lone `\r` line endings to `\n`
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
