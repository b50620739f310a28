//! Test utilities for grade statistics testing

use std::collections::BTreeMap;

use crate::app::models::{ClassroomCollection, ComplexStudent};

mod grade_math_tests;

/// Build a complex record with the given grades
pub fn student(name: &str, grades: &[i64]) -> ComplexStudent {
    ComplexStudent::new(name, "Testland", grades.to_vec(), Vec::new(), BTreeMap::new()).unwrap()
}

/// Build a collection from (name, grades) pairs, in order
pub fn classroom(students: &[(&str, &[i64])]) -> ClassroomCollection {
    students
        .iter()
        .map(|(name, grades)| student(name, grades))
        .collect()
}
