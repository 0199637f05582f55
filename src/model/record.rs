//! Component records and record tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder used when a name, version, or license is missing.
pub const UNKNOWN: &str = "Unknown";

/// Placeholder used when a license URL is missing.
pub const NOT_AVAILABLE: &str = "N/A";

/// Column headers, in export order.
pub const COLUMN_HEADERS: [&str; 4] = ["Name", "Version", "License", "License URL"];

/// A single normalized component.
///
/// Every field is always populated. Readers substitute [`UNKNOWN`] or
/// [`NOT_AVAILABLE`] for missing source values so that exported tables
/// never contain blank cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Component identifier
    pub name: String,
    /// Free-form version string
    pub version: String,
    /// SPDX identifier or free-form license name
    pub license: String,
    /// URI or reference to the license text
    pub license_url: String,
}

impl ComponentRecord {
    /// Create a record from already-normalized values.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        license: impl Into<String>,
        license_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            license: license.into(),
            license_url: license_url.into(),
        }
    }

    /// Build a record from optional source values, applying the placeholder
    /// defaults.
    #[must_use]
    pub fn from_parts(
        name: Option<String>,
        version: Option<String>,
        license: Option<String>,
        license_url: Option<String>,
    ) -> Self {
        Self {
            name: name.unwrap_or_else(|| UNKNOWN.to_string()),
            version: version.unwrap_or_else(|| UNKNOWN.to_string()),
            license: license.unwrap_or_else(|| UNKNOWN.to_string()),
            license_url: license_url.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }

    /// Cell values in column order.
    #[must_use]
    pub fn cells(&self) -> [&str; 4] {
        [
            self.name.as_str(),
            self.version.as_str(),
            self.license.as_str(),
            self.license_url.as_str(),
        ]
    }
}

impl fmt::Display for ComponentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} ({})", self.name, self.version, self.license)
    }
}

/// Where the records of a table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableSource {
    /// Syft manifest packages
    Manifest,
    /// SCANOSS file matches
    Matches,
    /// Deduplicated union of both
    Merged,
}

impl TableSource {
    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Manifest => "Manifest",
            Self::Matches => "Matches",
            Self::Merged => "Merged",
        }
    }
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An ordered sequence of records from one source.
///
/// Order is insertion order from the source document; tables are never
/// sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTable {
    /// Origin of the records
    pub source: TableSource,
    /// Records in source order
    pub records: Vec<ComponentRecord>,
}

impl RecordTable {
    /// Create an empty table.
    #[must_use]
    pub const fn new(source: TableSource) -> Self {
        Self {
            source,
            records: Vec::new(),
        }
    }

    /// Create a table from existing records.
    #[must_use]
    pub const fn from_records(source: TableSource, records: Vec<ComponentRecord>) -> Self {
        Self { source, records }
    }

    /// Append a record.
    pub fn push(&mut self, record: ComponentRecord) {
        self.records.push(record);
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ComponentRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RecordTable {
    type Item = &'a ComponentRecord;
    type IntoIter = std::slice::Iter<'a, ComponentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_applies_defaults() {
        let record = ComponentRecord::from_parts(None, None, None, None);
        assert_eq!(record.name, UNKNOWN);
        assert_eq!(record.version, UNKNOWN);
        assert_eq!(record.license, UNKNOWN);
        assert_eq!(record.license_url, NOT_AVAILABLE);
    }

    #[test]
    fn test_cells_follow_column_order() {
        let record = ComponentRecord::new("libX", "1.0", "MIT", "http://x");
        assert_eq!(record.cells(), ["libX", "1.0", "MIT", "http://x"]);
        assert_eq!(COLUMN_HEADERS[3], "License URL");
    }

    #[test]
    fn test_table_preserves_insertion_order() {
        let mut table = RecordTable::new(TableSource::Manifest);
        assert!(table.is_empty());
        table.push(ComponentRecord::new("zlib", "1.3", "Zlib", "N/A"));
        table.push(ComponentRecord::new("abseil", "2024", "Apache-2.0", "N/A"));

        let names: Vec<_> = table.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["zlib", "abseil"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_display() {
        let record = ComponentRecord::new("libX", "1.0", "MIT", "http://x");
        assert_eq!(record.to_string(), "libX@1.0 (MIT)");
        assert_eq!(TableSource::Merged.to_string(), "Merged");
    }
}
