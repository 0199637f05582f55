//! Pipeline orchestration for reconciliation runs.
//!
//! This module provides the shared stages of a run: read both inputs →
//! merge → export three tables. The `cli` handler strings them together.

mod merge_stage;
mod output;
mod parse;
mod report_stage;

pub use merge_stage::merge_inputs;
pub use output::{
    write_completion_message, OutputPaths, DEFAULT_MANIFEST_STEM, DEFAULT_MATCHES_STEM,
    DEFAULT_MERGED_STEM,
};
pub use parse::{check_inputs_exist, parse_input, parse_inputs, ParsedInputs};
pub use report_stage::{export_tables, ReportTables};

use crate::error::ComplianceError;
use std::path::PathBuf;

/// Structured pipeline error types for exit-code mapping and diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// An input path does not exist
    #[error("{} not found.", path.display())]
    MissingInput { path: PathBuf },

    /// Failed to read or parse an input document
    #[error("Parse failed for {}: {source}", path.display())]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: ComplianceError,
    },

    /// Writing one of the output tables failed
    #[error("Export failed for {}: {source}", path.display())]
    ExportFailed {
        path: PathBuf,
        #[source]
        source: ComplianceError,
    },

    /// Effective configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PipelineError {
    /// Process exit code for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        exit_codes::ERROR
    }
}

/// Exit codes for scripting and CI integration
pub mod exit_codes {
    /// All three tables written
    pub const SUCCESS: i32 = 0;
    /// Missing input, unreadable input, invalid config, or export failure
    pub const ERROR: i32 = 1;
    /// Wrong command-line usage (reported by the argument parser)
    pub const USAGE: i32 = 2;
}
