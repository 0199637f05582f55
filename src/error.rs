//! Unified error types for compliance-report.
//!
//! This module provides the error hierarchy for the library, with context
//! chaining for debugging and user-friendly messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for compliance-report operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ComplianceError {
    /// Errors while reading an input document
    #[error("Failed to parse input: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors while writing an output table
    #[error("Export failed: {context}")]
    Export {
        context: String,
        #[source]
        source: ExportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Unexpected document shape: {0}")]
    InvalidStructure(String),

    #[error("Cannot read input: {0}")]
    Unreadable(String),
}

/// Specific export error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExportErrorKind {
    #[error("Spreadsheet encoding failed: {0}")]
    Spreadsheet(String),

    #[error("CSV encoding failed: {0}")]
    Csv(String),

    #[error("Cannot write output file: {0}")]
    Write(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for compliance-report operations
pub type Result<T> = std::result::Result<T, ComplianceError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ComplianceError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an export error with context
    pub fn export(context: impl Into<String>, source: ExportErrorKind) -> Self {
        Self::Export {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }
}

// ============================================================================
// Conversions from module and library error types
// ============================================================================

impl From<std::io::Error> for ComplianceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ComplianceError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<crate::parsers::ParseError> for ComplianceError {
    fn from(err: crate::parsers::ParseError) -> Self {
        use crate::parsers::ParseError;
        match err {
            ParseError::IoError(msg) => {
                Self::parse("reading document", ParseErrorKind::Unreadable(msg))
            }
            ParseError::JsonError(msg) => {
                Self::parse("JSON deserialization", ParseErrorKind::InvalidJson(msg))
            }
            ParseError::InvalidStructure(msg) => {
                Self::parse("document shape", ParseErrorKind::InvalidStructure(msg))
            }
        }
    }
}

impl From<crate::reports::ExportError> for ComplianceError {
    fn from(err: crate::reports::ExportError) -> Self {
        use crate::reports::ExportError;
        match err {
            ExportError::IoError(e) => {
                Self::export("writing table", ExportErrorKind::Write(e.to_string()))
            }
            ExportError::Spreadsheet(msg) => {
                Self::export("encoding workbook", ExportErrorKind::Spreadsheet(msg))
            }
            ExportError::Csv(msg) => Self::export("encoding CSV", ExportErrorKind::Csv(msg)),
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// creating a chain that shows the path through the code.
///
/// # Example
///
/// ```ignore
/// use compliance_report::error::ErrorContext;
///
/// fn load(path: &Path) -> Result<RecordTable> {
///     let content = std::fs::read_to_string(path)
///         .context("reading manifest")?;
///
///     ManifestReader::new()
///         .parse_str(&content)
///         .with_context(|| format!("parsing manifest from {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ComplianceError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: ComplianceError, new_ctx: &str) -> ComplianceError {
    match err {
        ComplianceError::Parse {
            context: existing,
            source,
        } => ComplianceError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ComplianceError::Export {
            context: existing,
            source,
        } => ComplianceError::Export {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ComplianceError::Io {
            path,
            message,
            source,
        } => ComplianceError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
    }
}

/// Chain two context strings together.
///
/// Returns "`new_context`: `existing_context`", or just the new context
/// when nothing was recorded yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
