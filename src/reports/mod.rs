//! Tabular export of record tables.
//!
//! Every writer produces the same layout: a header row
//! `Name, Version, License, License URL` followed by one row per record, in
//! table order, with no index column.
//!
//! - XLSX: spreadsheet workbook, one worksheet (default)
//! - CSV: RFC 4180 comma-separated values

mod csv;
mod types;
mod xlsx;

pub use self::csv::CsvWriter;
pub use types::ReportFormat;
pub use xlsx::XlsxWriter;

use crate::model::RecordTable;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while exporting a table
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("CSV error: {0}")]
    Csv(String),
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Spreadsheet(err.to_string())
    }
}

impl From<::csv::Error> for ExportError {
    fn from(err: ::csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Trait for table writers
pub trait TableWriter {
    /// Encode a table into the output file's bytes
    fn render(&self, table: &RecordTable) -> Result<Vec<u8>, ExportError>;

    /// Write an encoded table to a writer
    fn write_table(&self, table: &RecordTable, writer: &mut dyn Write) -> Result<(), ExportError> {
        let bytes = self.render(table)?;
        writer.write_all(&bytes)?;
        Ok(())
    }

    /// Write an encoded table to a file, replacing any existing file
    fn write_to_path(&self, table: &RecordTable, path: &Path) -> Result<(), ExportError> {
        let bytes = self.render(table)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Get the format this writer produces
    fn format(&self) -> ReportFormat;
}

/// Create a writer for the given format.
#[must_use]
pub fn create_writer(format: ReportFormat) -> Box<dyn TableWriter> {
    match format {
        ReportFormat::Xlsx => Box::new(XlsxWriter::new()),
        ReportFormat::Csv => Box::new(CsvWriter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComponentRecord, TableSource};

    #[test]
    fn test_create_writer_matches_format() {
        assert_eq!(create_writer(ReportFormat::Xlsx).format(), ReportFormat::Xlsx);
        assert_eq!(create_writer(ReportFormat::Csv).format(), ReportFormat::Csv);
    }

    #[test]
    fn test_write_table_to_sink() {
        let table = RecordTable::from_records(
            TableSource::Merged,
            vec![ComponentRecord::new("libX", "1.0", "MIT", "http://x")],
        );
        let mut sink = Vec::new();
        CsvWriter::new()
            .write_table(&table, &mut sink)
            .expect("write should succeed");
        assert!(String::from_utf8(sink).unwrap().contains("libX,1.0,MIT,http://x"));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let result = CsvWriter::new().write_to_path(&RecordTable::new(TableSource::Merged), &path);
        assert!(matches!(result, Err(ExportError::IoError(_))));
    }
}
