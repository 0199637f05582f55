//! CSV table writer.
//!
//! Suitable for spreadsheet import and data analysis pipelines. Quoting
//! follows RFC 4180 and is applied only where a field needs it.

use super::{ExportError, ReportFormat, TableWriter};
use crate::model::{RecordTable, COLUMN_HEADERS};

/// CSV table writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvWriter;

impl CsvWriter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TableWriter for CsvWriter {
    fn render(&self, table: &RecordTable) -> Result<Vec<u8>, ExportError> {
        let mut writer = ::csv::Writer::from_writer(Vec::new());
        writer.write_record(COLUMN_HEADERS)?;
        for record in table {
            writer.write_record(record.cells())?;
        }
        writer
            .into_inner()
            .map_err(|e| ExportError::Csv(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComponentRecord, TableSource};

    fn render(table: &RecordTable) -> String {
        String::from_utf8(CsvWriter::new().render(table).unwrap()).unwrap()
    }

    #[test]
    fn test_empty_table_is_header_only() {
        let output = render(&RecordTable::new(TableSource::Manifest));
        assert_eq!(output, "Name,Version,License,License URL\n");
    }

    #[test]
    fn test_rows_in_table_order() {
        let table = RecordTable::from_records(
            TableSource::Merged,
            vec![
                ComponentRecord::new("libX", "1.0", "MIT", "http://x"),
                ComponentRecord::new("Unknown", "Unknown", "Unknown", "N/A"),
            ],
        );
        insta::assert_snapshot!(render(&table).trim_end(), @r"
        Name,Version,License,License URL
        libX,1.0,MIT,http://x
        Unknown,Unknown,Unknown,N/A
        ");
    }

    #[test]
    fn test_fields_needing_quotes() {
        let table = RecordTable::from_records(
            TableSource::Matches,
            vec![ComponentRecord::new(
                "acme, inc",
                "1.0",
                "MIT OR Apache-2.0",
                "say \"hi\"",
            )],
        );
        let output = render(&table);
        assert!(output.contains("\"acme, inc\",1.0,MIT OR Apache-2.0,\"say \"\"hi\"\"\""));
    }
}
