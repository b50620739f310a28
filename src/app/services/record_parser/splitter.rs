//! Record splitting for classroom files
//!
//! A classroom file is a header line followed by student blocks separated by
//! `###` delimiter lines. The header content is never used.

use crate::constants::BLOCK_DELIMITER;

/// Split raw file text into per-student blocks
///
/// The first line is discarded, then the remainder is split on the exact
/// delimiter line. A file ending with a delimiter yields a trailing empty
/// block; filtering is left to the caller (see [`is_blank_block`]).
pub fn split_blocks(text: &str) -> Vec<&str> {
    let body = match text.split_once('\n') {
        Some((_header, rest)) => rest,
        None => "",
    };

    body.split(BLOCK_DELIMITER).collect()
}

/// True when every line of the block is empty or whitespace
pub fn is_blank_block(block: &str) -> bool {
    block.lines().all(|line| line.trim().is_empty())
}
