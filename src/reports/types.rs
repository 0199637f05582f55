//! Report type definitions.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for exported tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Excel workbook
    #[default]
    Xlsx,
    /// Comma-separated values
    Csv,
}

impl ReportFormat {
    /// File extension, without the dot.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }

    /// Name used in the completion message.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Xlsx => "Excel",
            Self::Csv => "CSV",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
