//! Test utilities for classroom parser testing
//!
//! Fixture builders and file helpers shared by the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod simple_tests;

/// Helper to create a simple-format classroom file body
pub fn create_simple_classroom() -> String {
    "Simple classroom, grade 7
Alice
France
80
90
100
###
Bob
Spain
70
75
80
###
Chen
China
95
85
90
"
    .to_string()
}

/// Helper to create a complex-format classroom file body
pub fn create_complex_classroom() -> String {
    "Complex classroom, grade 7
Alice
France
age=12
80
90
100
note=excellent student
###
Bob
Spain
70
note=great effort
80
favorite=chess
###
Chen
China
hobby=painting

95
85
???
note=quiet
note=needs encouragement
###
"
    .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
