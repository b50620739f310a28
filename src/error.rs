//! Error handling for classroom parsing and statistics.
//!
//! Provides error types with context for file access, block decoding,
//! and grade arithmetic failures.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassroomError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed student block {block}: expected {expected} non-blank lines, found {found}")]
    Shape {
        block: usize,
        expected: String,
        found: usize,
    },

    #[error("Invalid grade '{token}' in student block {block}: {source}")]
    Parse {
        block: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Average is undefined for {context}: no grades recorded")]
    AverageUndefined { context: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ClassroomError {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a shape error for a block with the wrong number of lines
    pub fn shape(block: usize, expected: impl Into<String>, found: usize) -> Self {
        Self::Shape {
            block,
            expected: expected.into(),
            found,
        }
    }

    /// Create a grade parsing error
    pub fn parse(block: usize, token: impl Into<String>, source: ParseIntError) -> Self {
        Self::Parse {
            block,
            token: token.into(),
            source,
        }
    }

    pub fn average_undefined(context: impl Into<String>) -> Self {
        Self::AverageUndefined {
            context: context.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClassroomError>;
