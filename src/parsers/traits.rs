//! Reader trait definitions and error types.
//!
//! This module defines the `RecordReader` trait implemented by the manifest
//! and match-report readers, and the confidence scoring used to recognise
//! which kind of document a file holds.

use crate::model::{RecordTable, TableSource};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading an input document
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("JSON parse error: {0}")]
    JsonError(String),

    #[error("Invalid document structure: {0}")]
    InvalidStructure(String),
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

/// Confidence level for document detection
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FormatConfidence(f32);

impl FormatConfidence {
    /// No confidence - definitely not this document kind
    pub const NONE: Self = Self(0.0);
    /// Low confidence - might be this document kind
    pub const LOW: Self = Self(0.25);
    /// Medium confidence - likely this document kind
    pub const MEDIUM: Self = Self(0.5);
    /// High confidence - almost certainly this document kind
    pub const HIGH: Self = Self(0.75);
    /// Certain - definitely this document kind
    pub const CERTAIN: Self = Self(1.0);

    /// Create a new confidence value
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the confidence value
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.0
    }

    /// Check if this confidence indicates the document can be read
    #[must_use]
    pub fn can_parse(&self) -> bool {
        self.0 >= 0.25
    }
}

impl Default for FormatConfidence {
    fn default() -> Self {
        Self::NONE
    }
}

/// Detection result from a reader
#[derive(Debug, Clone)]
pub struct FormatDetection {
    /// Confidence that this reader can handle the content
    pub confidence: FormatConfidence,
    /// Detected producer or variant (e.g. "SPDX JSON", "Syft JSON")
    pub variant: Option<String>,
    /// Any issues detected that might affect reading
    pub warnings: Vec<String>,
}

impl FormatDetection {
    /// Create a detection result indicating no match
    #[must_use]
    pub const fn no_match() -> Self {
        Self {
            confidence: FormatConfidence::NONE,
            variant: None,
            warnings: Vec::new(),
        }
    }

    /// Create a detection result with confidence
    #[must_use]
    pub const fn with_confidence(confidence: FormatConfidence) -> Self {
        Self {
            confidence,
            variant: None,
            warnings: Vec::new(),
        }
    }

    /// Set the detected variant
    #[must_use]
    pub fn variant(mut self, variant: &str) -> Self {
        self.variant = Some(variant.to_string());
        self
    }

    /// Add a warning
    #[must_use]
    pub fn warning(mut self, warning: &str) -> Self {
        self.warnings.push(warning.to_string());
        self
    }
}

/// Trait for input document readers
///
/// Implementors normalize one input document into a [`RecordTable`] via
/// `parse_str()` and provide a cheap structural check via `detect()`.
pub trait RecordReader {
    /// Read a document from a file path
    fn parse(&self, path: &Path) -> Result<RecordTable, ParseError> {
        let content = std::fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Read a document from string content
    fn parse_str(&self, content: &str) -> Result<RecordTable, ParseError>;

    /// Name of the document kind this reader handles
    fn format_name(&self) -> &str;

    /// Table source label for produced records
    fn source(&self) -> TableSource;

    /// Detect if this reader can handle the given content
    ///
    /// Performs lightweight string checks without a full parse.
    fn detect(&self, content: &str) -> FormatDetection;

    /// Quick check if this reader can likely handle the content
    fn can_parse(&self, content: &str) -> bool {
        self.detect(content).confidence.can_parse()
    }

    /// Get confidence score for reading this content
    fn confidence(&self, content: &str) -> FormatConfidence {
        self.detect(content).confidence
    }
}
