//! Decoder for the fixed five-line simple format

use super::field_parsers::{non_blank_lines, parse_grade};
use crate::app::models::SimpleStudent;
use crate::constants::SIMPLE_BLOCK_LINES;
use crate::{ClassroomError, Result};

/// Decode one block into a [`SimpleStudent`]
///
/// The block must hold exactly five non-blank lines: name, country and three
/// grades. `block` is the 1-based block position used in error messages.
pub fn decode_simple_block(raw: &str, block: usize) -> Result<SimpleStudent> {
    let lines = non_blank_lines(raw);

    let [name, country, grade1, grade2, grade3] = lines.as_slice() else {
        return Err(ClassroomError::shape(
            block,
            format!("exactly {}", SIMPLE_BLOCK_LINES),
            lines.len(),
        ));
    };

    let grades = [
        parse_grade(grade1, block)?,
        parse_grade(grade2, block)?,
        parse_grade(grade3, block)?,
    ];

    Ok(SimpleStudent::new(*name, *country, grades))
}
