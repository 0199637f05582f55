//! Export stage.
//!
//! Writes the manifest, match, and merged tables, in that order. A failure
//! stops the run and leaves already written files in place.

use super::{OutputPaths, PipelineError};
use crate::error::{ComplianceError, ErrorContext};
use crate::model::RecordTable;
use crate::reports::{create_writer, ReportFormat, TableWriter};
use std::path::Path;

/// The three tables of one run.
#[derive(Debug, Clone, Copy)]
pub struct ReportTables<'a> {
    pub manifest: &'a RecordTable,
    pub matches: &'a RecordTable,
    pub merged: &'a RecordTable,
}

/// Write all three tables in `format` to `paths`.
pub fn export_tables(
    tables: ReportTables<'_>,
    paths: &OutputPaths,
    format: ReportFormat,
    quiet: bool,
) -> Result<(), PipelineError> {
    let writer = create_writer(format);

    for (table, path) in [
        (tables.manifest, paths.manifest_path()),
        (tables.matches, paths.matches_path()),
        (tables.merged, paths.merged_path()),
    ] {
        write_one(&*writer, table, &path).map_err(|source| {
            PipelineError::ExportFailed {
                path: path.clone(),
                source,
            }
        })?;
        if !quiet {
            tracing::info!("Wrote {} rows to {}", table.len(), path.display());
        }
    }
    Ok(())
}

fn write_one(
    writer: &dyn TableWriter,
    table: &RecordTable,
    path: &Path,
) -> Result<(), ComplianceError> {
    tracing::debug!(
        "Writing {} table as {} to {}",
        table.source,
        writer.format().display_name(),
        path.display()
    );
    writer
        .write_to_path(table, path)
        .with_context(|| format!("writing {} table", table.source))
}
