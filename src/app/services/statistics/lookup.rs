//! Per-student average lookup over either record collection
//!
//! Lookups use the exact key given. Keys are lowercased student names, so
//! callers are expected to lowercase the query themselves.

use std::collections::HashMap;

use super::grade_math::mean;
use crate::app::models::{ClassroomCollection, SimpleStudent};

/// Collections that can answer "what is this student's average?"
pub trait AverageLookup {
    /// Average for the exact `name` key, or `None` if absent
    fn lookup_average(&self, name: &str) -> Option<f64>;
}

impl AverageLookup for [SimpleStudent] {
    /// Keys are built from the lowercased names; a later student with the
    /// same key shadows an earlier one. Also `None` for a record without
    /// grades.
    fn lookup_average(&self, name: &str) -> Option<f64> {
        let grades_by_name: HashMap<String, &[i64]> = self
            .iter()
            .map(|student| (student.name.to_lowercase(), student.grades.as_slice()))
            .collect();

        grades_by_name
            .get(name)
            .and_then(|grades| mean(grades).ok())
    }
}

impl AverageLookup for Vec<SimpleStudent> {
    fn lookup_average(&self, name: &str) -> Option<f64> {
        self.as_slice().lookup_average(name)
    }
}

impl AverageLookup for ClassroomCollection {
    fn lookup_average(&self, name: &str) -> Option<f64> {
        self.get(name).map(|student| student.average)
    }
}

/// Look up a student's average in any supported collection
pub fn lookup_average<C: AverageLookup + ?Sized>(collection: &C, name: &str) -> Option<f64> {
    collection.lookup_average(name)
}
