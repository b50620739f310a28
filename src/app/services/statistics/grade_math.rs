//! Arithmetic over grade sequences

use crate::{ClassroomError, Result};

/// Arithmetic mean of a grade sequence
///
/// Integer sums are accumulated exactly before the final division.
pub fn mean(grades: &[i64]) -> Result<f64> {
    if grades.is_empty() {
        return Err(ClassroomError::average_undefined("an empty grade sequence"));
    }

    let sum: i128 = grades.iter().map(|&g| i128::from(g)).sum();
    Ok(sum as f64 / grades.len() as f64)
}

/// Statistical median of a grade sequence
///
/// For an even count this is the mean of the two middle values after
/// sorting; for an odd count, the middle value.
pub fn median(grades: &[i64]) -> Result<f64> {
    if grades.is_empty() {
        return Err(ClassroomError::average_undefined("an empty grade sequence"));
    }

    let mut sorted = grades.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid] as f64)
    } else {
        let pair = i128::from(sorted[mid - 1]) + i128::from(sorted[mid]);
        Ok(pair as f64 / 2.0)
    }
}
