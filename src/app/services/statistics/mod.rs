//! Grade statistics: per-student lookup and classroom aggregates
//!
//! - [`grade_math`] - mean and median over grade sequences
//! - [`lookup`] - average lookup by exact name key
//! - [`engine`] - classroom average, median and ranking

pub mod engine;
pub mod grade_math;
pub mod lookup;

#[cfg(test)]
pub mod tests;

pub use engine::{ClassroomStatistics, compute_statistics};
pub use grade_math::{mean, median};
pub use lookup::{AverageLookup, lookup_average};
