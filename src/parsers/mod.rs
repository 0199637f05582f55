//! Input document readers.
//!
//! This module provides readers for the two inventories the tool reconciles,
//! converting each into a [`RecordTable`] of normalized component records:
//!
//! - [`ManifestReader`]: Syft SBOM (`packages` list)
//! - [`MatchReader`]: SCANOSS scan results (file path → match list)
//!
//! ## Usage
//!
//! ```no_run
//! use compliance_report::parsers::{ManifestReader, RecordReader};
//! use std::path::Path;
//!
//! let table = ManifestReader::new().parse(Path::new("syft-sbom.spdx.json")).unwrap();
//! println!("{} packages", table.len());
//! ```

mod detection;
mod manifest;
mod matches;
mod traits;

pub use detection::{detect_document_kind, DetectionResult, DocumentKind, MIN_CONFIDENCE_THRESHOLD};
pub use manifest::ManifestReader;
pub use matches::MatchReader;
pub use traits::{FormatConfidence, FormatDetection, ParseError, RecordReader};

use crate::model::RecordTable;
use std::path::Path;

/// Read a manifest file into a record table.
pub fn parse_manifest(path: &Path) -> Result<RecordTable, ParseError> {
    ManifestReader::new().parse(path)
}

/// Read manifest content from a string.
pub fn parse_manifest_str(content: &str) -> Result<RecordTable, ParseError> {
    ManifestReader::new().parse_str(content)
}

/// Read a match report file into a record table.
pub fn parse_match_report(path: &Path) -> Result<RecordTable, ParseError> {
    MatchReader::new().parse(path)
}

/// Read match report content from a string.
pub fn parse_match_report_str(content: &str) -> Result<RecordTable, ParseError> {
    MatchReader::new().parse_str(content)
}
