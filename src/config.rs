//! Configuration management and validation.
//!
//! Provides configuration structures for the parser front-end and for the
//! command-line collaborator that resolves which classroom files to read.

use crate::constants::{DEFAULT_COMPLEX_PATH, DEFAULT_SIMPLE_PATH};
use crate::error::{ClassroomError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Parser behavior settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Drop blocks made only of blank lines before decoding.
    ///
    /// When disabled, a trailing delimiter produces an empty block that
    /// fails decoding with a shape error.
    pub skip_blank_blocks: bool,

    /// Reject `key=value` lines whose key names a typed record field.
    ///
    /// Typed fields are never overwritten; when disabled such lines land in
    /// the attribute map like any other key.
    pub protect_reserved_keys: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            skip_blank_blocks: true,
            protect_reserved_keys: true,
        }
    }
}

impl ParserConfig {
    /// Keep blank blocks and hand them to the decoders
    pub fn with_blank_blocks(mut self) -> Self {
        self.skip_blank_blocks = false;
        self
    }

    /// Keep reserved keys in the attribute map instead of rejecting them
    pub fn with_reserved_keys_as_attributes(mut self) -> Self {
        self.protect_reserved_keys = false;
        self
    }
}

/// Top-level configuration for a classroom report run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path of the simple-format classroom file
    pub simple_path: PathBuf,

    /// Path of the complex-format classroom file
    pub complex_path: PathBuf,

    /// Parser settings shared by both files
    pub parser: ParserConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            simple_path: PathBuf::from(DEFAULT_SIMPLE_PATH),
            complex_path: PathBuf::from(DEFAULT_COMPLEX_PATH),
            parser: ParserConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn with_simple_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.simple_path = path.into();
        self
    }

    pub fn with_complex_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.complex_path = path.into();
        self
    }

    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    /// Validate paths before any file is opened
    pub fn validate(&self) -> Result<()> {
        if self.simple_path.as_os_str().is_empty() {
            return Err(ClassroomError::configuration(
                "simple classroom path must not be empty",
            ));
        }
        if self.complex_path.as_os_str().is_empty() {
            return Err(ClassroomError::configuration(
                "complex classroom path must not be empty",
            ));
        }
        if self.simple_path.is_dir() {
            return Err(ClassroomError::configuration(format!(
                "simple classroom path is a directory: {}",
                self.simple_path.display()
            )));
        }
        if self.complex_path.is_dir() {
            return Err(ClassroomError::configuration(format!(
                "complex classroom path is a directory: {}",
                self.complex_path.display()
            )));
        }

        debug!("Validated configuration: {:?}", self);
        Ok(())
    }
}
