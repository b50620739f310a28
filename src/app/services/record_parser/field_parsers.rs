//! Line-level parsing utilities shared by the simple and complex decoders

use crate::constants::ATTRIBUTE_SEPARATOR;
use crate::{ClassroomError, Result};

/// Lines of a block with blank lines removed, in order
pub fn non_blank_lines(block: &str) -> Vec<&str> {
    block
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Parse a grade token as a signed integer
///
/// Surrounding whitespace is ignored.
pub fn parse_grade(token: &str, block: usize) -> Result<i64> {
    let trimmed = token.trim();
    trimmed
        .parse::<i64>()
        .map_err(|e| ClassroomError::parse(block, trimmed, e))
}

/// True when the line is made up entirely of ASCII digits
pub fn is_grade_line(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

/// Split a `key=value` line on its first separator
pub fn split_attribute(line: &str) -> Option<(&str, &str)> {
    line.split_once(ATTRIBUTE_SEPARATOR)
}
