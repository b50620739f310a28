//! Parsing statistics and result structures for classroom files
//!
//! This module provides types for tracking what happened to each block
//! while decoding, alongside the decoded records themselves.

use serde::{Deserialize, Serialize};

/// Parsing result with records and basic statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult<T> {
    /// Decoded records
    pub records: T,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

impl<T> ParseResult<T> {
    pub fn new(records: T, stats: ParseStats) -> Self {
        Self { records, stats }
    }

    /// Discard the statistics and keep the records
    pub fn into_records(self) -> T {
        self.records
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Number of blocks produced by the splitter
    pub total_blocks: usize,

    /// Number of blocks decoded into records
    pub records_parsed: usize,

    /// Number of blank blocks dropped before decoding
    pub blank_blocks_skipped: usize,

    /// Complex-format lines that matched no pattern
    pub ignored_lines: usize,

    /// Attribute lines rejected because the key names a record field
    pub reserved_attributes_rejected: usize,

    /// Complex records that replaced an earlier record with the same key
    pub duplicates_replaced: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get summary of parsing statistics for logging
    pub fn summary(&self) -> String {
        format!(
            "Parsed {} records from {} blocks | blank skipped: {} | ignored lines: {} | \
             reserved keys rejected: {} | duplicates replaced: {}",
            self.records_parsed,
            self.total_blocks,
            self.blank_blocks_skipped,
            self.ignored_lines,
            self.reserved_attributes_rejected,
            self.duplicates_replaced
        )
    }
}
