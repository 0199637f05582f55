//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.

mod report;

pub use report::{run_report, ReportOutcome};

// Re-export config types used by handlers
pub use crate::config::{InputPaths, ReportConfig};
