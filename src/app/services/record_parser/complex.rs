//! Decoder for the variable-length complex format
//!
//! After the positional name and country lines, every line is classified on
//! its own: note, attribute, grade, or ignored.

use std::collections::BTreeMap;
use tracing::{trace, warn};

use super::field_parsers::{is_grade_line, non_blank_lines, parse_grade, split_attribute};
use super::stats::ParseStats;
use crate::app::models::ComplexStudent;
use crate::config::ParserConfig;
use crate::constants::{COMPLEX_HEADER_LINES, NOTE_MARKER, is_reserved_key};
use crate::{ClassroomError, Result};

/// Classification of a single body line in a complex block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyLine<'a> {
    Note(&'a str),
    Attribute { key: &'a str, value: &'a str },
    Grade(&'a str),
    Ignored,
}

impl<'a> BodyLine<'a> {
    /// Classify a line; notes take precedence over attributes
    pub fn classify(line: &'a str) -> Self {
        if line.contains(NOTE_MARKER) {
            // Text after the first separator, which may itself contain '='
            match split_attribute(line) {
                Some((_, text)) => BodyLine::Note(text),
                None => BodyLine::Ignored,
            }
        } else if let Some((key, value)) = split_attribute(line) {
            BodyLine::Attribute { key, value }
        } else if is_grade_line(line) {
            BodyLine::Grade(line)
        } else {
            BodyLine::Ignored
        }
    }
}

/// Decode one block into a [`ComplexStudent`]
///
/// Fails with a shape error when name or country is missing, and with
/// `AverageUndefined` when the block carries no grades.
pub fn decode_complex_block(
    raw: &str,
    block: usize,
    config: &ParserConfig,
    stats: &mut ParseStats,
) -> Result<ComplexStudent> {
    let lines = non_blank_lines(raw);
    if lines.len() < COMPLEX_HEADER_LINES {
        return Err(ClassroomError::shape(
            block,
            format!("at least {}", COMPLEX_HEADER_LINES),
            lines.len(),
        ));
    }

    let name = lines[0];
    let country = lines[1];
    let mut grades = Vec::new();
    let mut notes = Vec::new();
    let mut attributes = BTreeMap::new();

    for &line in &lines[COMPLEX_HEADER_LINES..] {
        match BodyLine::classify(line) {
            BodyLine::Note(text) => notes.push(text.to_string()),
            BodyLine::Attribute { key, value } => {
                if config.protect_reserved_keys && is_reserved_key(key) {
                    warn!(
                        "Block {}: attribute '{}' would shadow a record field, rejected",
                        block, key
                    );
                    stats.reserved_attributes_rejected += 1;
                    continue;
                }
                attributes.insert(key.to_string(), value.to_string());
            }
            BodyLine::Grade(token) => grades.push(parse_grade(token, block)?),
            BodyLine::Ignored => {
                trace!("Block {}: ignoring line '{}'", block, line);
                stats.ignored_lines += 1;
            }
        }
    }

    ComplexStudent::new(name, country, grades, notes, attributes)
}
