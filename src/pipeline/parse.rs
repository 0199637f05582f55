//! Input reading stage.
//!
//! Checks that both inputs exist, then reads each with its reader.

use super::PipelineError;
use crate::config::InputPaths;
use crate::error::{ComplianceError, ErrorContext};
use crate::model::RecordTable;
use crate::parsers::{detect_document_kind, DocumentKind, ManifestReader, MatchReader, RecordReader};
use std::path::Path;

/// Both input documents, normalized
#[derive(Debug, Clone)]
pub struct ParsedInputs {
    /// Records from the manifest, in package order
    pub manifest: RecordTable,
    /// Records from the match report, in file/match order
    pub matches: RecordTable,
}

/// Verify that both inputs exist, manifest first.
///
/// Nothing is read here; the first missing path is reported.
pub fn check_inputs_exist(inputs: &InputPaths) -> Result<(), PipelineError> {
    for path in [&inputs.manifest, &inputs.match_report] {
        if !path.exists() {
            return Err(PipelineError::MissingInput { path: path.clone() });
        }
    }
    Ok(())
}

/// Read one input document with the given reader.
pub fn parse_input<R: RecordReader>(
    reader: &R,
    path: &Path,
    quiet: bool,
) -> Result<RecordTable, PipelineError> {
    if !quiet {
        tracing::info!("Reading {}: {:?}", reader.format_name(), path);
    }

    let fail = |source: ComplianceError| PipelineError::ParseFailed {
        path: path.to_path_buf(),
        source,
    };

    let content = std::fs::read_to_string(path).map_err(|e| fail(ComplianceError::io(path, e)))?;
    warn_on_unexpected_kind(reader, &content, path);

    let table = reader
        .parse_str(&content)
        .with_context(|| format!("reading {}", reader.format_name()))
        .map_err(fail)?;

    if !quiet {
        tracing::info!("Read {} records from {:?}", table.len(), path);
    }
    Ok(table)
}

/// Read both inputs. The manifest is read first; a failure there means the
/// match report is never opened.
pub fn parse_inputs(inputs: &InputPaths, quiet: bool) -> Result<ParsedInputs, PipelineError> {
    let manifest = parse_input(&ManifestReader::new(), &inputs.manifest, quiet)?;
    let matches = parse_input(&MatchReader::new(), &inputs.match_report, quiet)?;
    Ok(ParsedInputs { manifest, matches })
}

/// Log a warning when content looks like the other kind of input.
///
/// The intended reader is still used.
fn warn_on_unexpected_kind<R: RecordReader>(reader: &R, content: &str, path: &Path) {
    let own = reader.detect(content);
    for warning in &own.warnings {
        tracing::debug!("{}: {}", path.display(), warning);
    }
    if own.confidence.can_parse() {
        return;
    }

    let expected = DocumentKind::for_source(reader.source());
    let detected = detect_document_kind(content);
    if let Some(kind) = detected.kind {
        if Some(kind) != expected {
            tracing::warn!(
                "{} looks like a {} rather than a {}; were the arguments given in the wrong order?",
                path.display(),
                kind.name(),
                reader.format_name()
            );
        }
    }
}
