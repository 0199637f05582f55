//! XLSX table writer.
//!
//! Writes a single-worksheet workbook with a bold, frozen header row. The
//! worksheet is always named `Sheet1` so consumers selecting it by name keep
//! working regardless of which table it holds.

use super::{ExportError, ReportFormat, TableWriter};
use crate::model::{RecordTable, COLUMN_HEADERS};
use rust_xlsxwriter::{Format, Workbook};

const MIN_COLUMN_WIDTH: usize = 10;
const MAX_COLUMN_WIDTH: usize = 80;
const SHEET_NAME: &str = "Sheet1";

/// XLSX table writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxWriter;

impl XlsxWriter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TableWriter for XlsxWriter {
    fn render(&self, table: &RecordTable) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        let mut widths = COLUMN_HEADERS.map(str::len);
        for (col, header) in (0u16..).zip(COLUMN_HEADERS) {
            worksheet.write_string_with_format(0, col, header, &header_format)?;
        }

        for (index, record) in table.iter().enumerate() {
            let row = u32::try_from(index + 1).map_err(|_| {
                ExportError::Spreadsheet(format!("too many rows for a worksheet: {}", table.len()))
            })?;
            for ((col, value), width) in (0u16..).zip(record.cells()).zip(widths.iter_mut()) {
                worksheet.write_string(row, col, value)?;
                *width = (*width).max(value.chars().count());
            }
        }

        for (col, width) in (0u16..).zip(widths) {
            let width = width.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH) + 2;
            worksheet.set_column_width(col, width as f64)?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        Ok(workbook.save_to_buffer()?)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Xlsx
    }
}
