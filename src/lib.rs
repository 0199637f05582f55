//! **License compliance tables from a component manifest and a code-match scan.**
//!
//! `compliance-report` reconciles two views of a codebase's third-party
//! content: a Syft manifest (declared packages) and a SCANOSS match report
//! (code fragments matched against known components). Each is normalized into
//! a four-column table of name, version, license and license URL, and the two
//! tables are merged into one deduplicated table for compliance review.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`ComponentRecord`] and [`RecordTable`], the normalized
//!   rows every reader produces. Missing values are filled with `"Unknown"`
//!   or `"N/A"`, never left empty.
//! - **[`parsers`]**: the [`RecordReader`] trait, [`ManifestReader`] and
//!   [`MatchReader`], plus content sniffing to tell the two documents apart.
//! - **[`merge`]**: the order-preserving deduplicating union of two tables.
//! - **[`reports`]**: [`TableWriter`] implementations for XLSX and CSV.
//! - **[`pipeline`]**: the stages of a run and output file naming.
//! - **[`config`]**: YAML configuration, discovery, and validation.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use compliance_report::{merge_tables, parse_manifest, parse_match_report};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manifest = parse_manifest(Path::new("syft-sbom.spdx.json"))?;
//!     let matches = parse_match_report(Path::new("scanoss-results.json"))?;
//!
//!     let merged = merge_tables(&manifest, &matches);
//!     for record in &merged {
//!         println!("{record}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Writing a table
//!
//! ```no_run
//! use std::path::Path;
//! use compliance_report::{parse_manifest, TableWriter, XlsxWriter};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manifest = parse_manifest(Path::new("syft-sbom.spdx.json"))?;
//!     XlsxWriter::new().write_to_path(&manifest, Path::new("syft-compliance-report.xlsx"))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `compliance-report` binary takes the manifest and the match report as
//! two positional arguments and writes three tables to the working directory.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors / # Panics sections are not written for every fn
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `manifest`/`matches` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod merge;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, BehaviorConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use config::{InputPaths, ReportConfig};
pub use error::{ComplianceError, ErrorContext, Result};
pub use merge::{merge_tables, merge_tables_with_stats, MergeStats};
pub use model::{ComponentRecord, RecordTable, TableSource};
pub use parsers::{
    parse_manifest, parse_manifest_str, parse_match_report, parse_match_report_str,
    ManifestReader, MatchReader, RecordReader,
};
pub use reports::{CsvWriter, ReportFormat, TableWriter, XlsxWriter};
