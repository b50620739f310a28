//! Classroom-wide statistics over a complex collection

use serde::{Deserialize, Serialize};
use tracing::info;

use super::grade_math::{mean, median};
use crate::app::models::{ClassroomCollection, ComplexStudent};
use crate::{ClassroomError, Result};

/// Aggregate statistics for one classroom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassroomStatistics {
    /// Mean over every grade of every student (not a mean of averages)
    pub total_average: f64,

    /// Median over the same flattened grades
    pub median_grade: f64,

    /// Number of grades behind the average and median
    pub grade_count: usize,

    /// Students by average, highest first; ties keep collection order
    pub ranking: Vec<(String, ComplexStudent)>,
}

/// Compute classroom statistics
///
/// Fails with `AverageUndefined` when the collection holds no grades at all.
pub fn compute_statistics(collection: &ClassroomCollection) -> Result<ClassroomStatistics> {
    let all_grades: Vec<i64> = collection
        .values()
        .flat_map(|student| student.grades.iter().copied())
        .collect();

    let undefined = |_: ClassroomError| ClassroomError::average_undefined("the classroom");
    let total_average = mean(&all_grades).map_err(undefined)?;
    let median_grade = median(&all_grades).map_err(undefined)?;

    let mut ranking: Vec<(String, ComplexStudent)> = collection
        .iter()
        .map(|(key, student)| (key.to_string(), student.clone()))
        .collect();
    // Stable: equal averages keep their collection order
    ranking.sort_by(|a, b| b.1.average.total_cmp(&a.1.average));

    info!(
        "Classroom statistics: {} students, {} grades, average {:.2}, median {}",
        ranking.len(),
        all_grades.len(),
        total_average,
        median_grade
    );

    Ok(ClassroomStatistics {
        total_average,
        median_grade,
        grade_count: all_grades.len(),
        ranking,
    })
}
