//! Application constants for the classroom parser
//!
//! File-format markers, reserved field names and default paths used
//! throughout the crate.

// =============================================================================
// File Format
// =============================================================================

/// Line separating two student blocks, including its newline
pub const BLOCK_DELIMITER: &str = "###\n";

/// Marker identifying a note line in the complex format
pub const NOTE_MARKER: &str = "note=";

/// Separator between an attribute key and its value
pub const ATTRIBUTE_SEPARATOR: char = '=';

/// Number of non-blank lines in a simple-format block
pub const SIMPLE_BLOCK_LINES: usize = 5;

/// Number of grades in a simple-format block
pub const SIMPLE_GRADE_COUNT: usize = 3;

/// Number of mandatory positional lines (name, country) in a complex block
pub const COMPLEX_HEADER_LINES: usize = 2;

/// Field names a `key=value` line may not overwrite
pub const RESERVED_ATTRIBUTE_KEYS: &[&str] = &["name", "country", "grades", "notes", "average"];

// =============================================================================
// Defaults
// =============================================================================

/// Default path of the simple classroom file
pub const DEFAULT_SIMPLE_PATH: &str = "classroom_simple.txt";

/// Default path of the complex classroom file
pub const DEFAULT_COMPLEX_PATH: &str = "classroom_complex.txt";

/// Default log level when neither -v nor -q is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Check whether an attribute key collides with a typed record field
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_ATTRIBUTE_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_keys() {
        for key in ["name", "country", "grades", "notes", "average"] {
            assert!(is_reserved_key(key), "{} should be reserved", key);
        }
        assert!(!is_reserved_key("age"));
        assert!(!is_reserved_key("Grades"));
    }

    #[test]
    fn test_format_constants() {
        assert_eq!(SIMPLE_BLOCK_LINES, COMPLEX_HEADER_LINES + SIMPLE_GRADE_COUNT);
        assert!(BLOCK_DELIMITER.ends_with('\n'));
        assert!(NOTE_MARKER.ends_with(ATTRIBUTE_SEPARATOR));
    }
}
