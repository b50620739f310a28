//! Data models for classroom records
//!
//! This module contains the record types produced by the simple and complex
//! decoders and the insertion-ordered collection the complex path builds.

use crate::app::services::statistics::mean;
use crate::{ClassroomError, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

// =============================================================================
// Simple Format
// =============================================================================

/// Fixed-shape student record from the simple format
///
/// Always carries exactly three grades, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimpleStudent {
    pub name: String,
    pub country: String,
    pub grades: Vec<i64>,
}

impl SimpleStudent {
    pub fn new(name: impl Into<String>, country: impl Into<String>, grades: [i64; 3]) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            grades: grades.to_vec(),
        }
    }
}

// =============================================================================
// Complex Format
// =============================================================================

/// Extensible student record from the complex format
///
/// `average` is derived from `grades` when the record is built and is never
/// set independently. `notes` is `None` when the block had no note lines.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ComplexStudent {
    pub name: String,
    pub country: String,
    pub grades: Vec<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,

    /// Free-form `key=value` attributes, never shadowing the typed fields
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    pub average: f64,
}

impl ComplexStudent {
    /// Build a record, computing its average.
    ///
    /// Fails with `AverageUndefined` when `grades` is empty.
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        grades: Vec<i64>,
        notes: Vec<String>,
        attributes: BTreeMap<String, String>,
    ) -> Result<Self> {
        let name = name.into();
        let average = mean(&grades)
            .map_err(|_| ClassroomError::average_undefined(format!("student '{}'", name)))?;

        Ok(Self {
            name,
            country: country.into(),
            grades,
            notes: if notes.is_empty() { None } else { Some(notes) },
            attributes,
            average,
        })
    }

    /// Key under which this record is stored in a [`ClassroomCollection`]
    pub fn collection_key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

// =============================================================================
// Classroom Collection
// =============================================================================

/// Students keyed by lowercased name, in first-insertion order
///
/// Re-inserting an existing key replaces the record but keeps the slot of
/// the original insertion, so iteration order is the order in which each
/// distinct name first appeared in the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassroomCollection {
    entries: Vec<(String, ComplexStudent)>,
    index: HashMap<String, usize>,
}

impl ClassroomCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under an explicit key, returning the replaced record if any
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        student: ComplexStudent,
    ) -> Option<ComplexStudent> {
        let key = key.into();
        match self.index.get(&key) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, student)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, student));
                None
            }
        }
    }

    /// Insert under the student's lowercased name
    pub fn insert_student(&mut self, student: ComplexStudent) -> Option<ComplexStudent> {
        let key = student.collection_key();
        self.insert(key, student)
    }

    /// Exact, case-sensitive key lookup
    pub fn get(&self, key: &str) -> Option<&ComplexStudent> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComplexStudent)> {
        self.entries.iter().map(|(key, student)| (key.as_str(), student))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &ComplexStudent> {
        self.entries.iter().map(|(_, student)| student)
    }
}

impl FromIterator<ComplexStudent> for ClassroomCollection {
    fn from_iter<I: IntoIterator<Item = ComplexStudent>>(iter: I) -> Self {
        let mut collection = Self::new();
        for student in iter {
            collection.insert_student(student);
        }
        collection
    }
}

impl Serialize for ClassroomCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, student) in &self.entries {
            map.serialize_entry(key, student)?;
        }
        map.end()
    }
}

struct CollectionVisitor;

impl<'de> Visitor<'de> for CollectionVisitor {
    type Value = ClassroomCollection;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map from student key to student record")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut collection = ClassroomCollection::new();
        while let Some((key, student)) = access.next_entry::<String, ComplexStudent>()? {
            collection.insert(key, student);
        }
        Ok(collection)
    }
}

/// Entries are restored in map order
impl<'de> Deserialize<'de> for ClassroomCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(CollectionVisitor)
    }
}
