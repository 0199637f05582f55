//! Order-preserving union of record tables.
//!
//! Manifest records come first, then match records. A record is dropped only
//! when an identical record (all four fields equal) was already kept, so two
//! records that differ in any field both survive.

use crate::model::{ComponentRecord, RecordTable, TableSource};
use indexmap::IndexSet;

/// Counts describing a merge, for logging and summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Records taken from the manifest table
    pub manifest_records: usize,
    /// Records taken from the match table
    pub match_records: usize,
    /// Records in the merged table
    pub merged_records: usize,
}

impl MergeStats {
    /// Records discarded as exact repeats.
    #[must_use]
    pub const fn duplicates_removed(&self) -> usize {
        self.manifest_records + self.match_records - self.merged_records
    }
}

/// Merge the manifest and match tables into the deduplicated merged table.
#[must_use]
pub fn merge_tables(manifest: &RecordTable, matches: &RecordTable) -> RecordTable {
    merge_tables_with_stats(manifest, matches).0
}

/// Merge and also report how many records were dropped.
#[must_use]
pub fn merge_tables_with_stats(
    manifest: &RecordTable,
    matches: &RecordTable,
) -> (RecordTable, MergeStats) {
    let merged = dedup_records(manifest.iter().chain(matches.iter()));

    let stats = MergeStats {
        manifest_records: manifest.len(),
        match_records: matches.len(),
        merged_records: merged.len(),
    };
    tracing::debug!(
        "Merged {} + {} records into {} ({} duplicates removed)",
        stats.manifest_records,
        stats.match_records,
        stats.merged_records,
        stats.duplicates_removed()
    );

    (
        RecordTable::from_records(TableSource::Merged, merged),
        stats,
    )
}

/// Stable deduplication keeping the first occurrence of each record.
fn dedup_records<'a>(records: impl Iterator<Item = &'a ComponentRecord>) -> Vec<ComponentRecord> {
    let unique: IndexSet<&ComponentRecord> = records.collect();
    unique.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(source: TableSource, records: &[(&str, &str, &str, &str)]) -> RecordTable {
        RecordTable::from_records(
            source,
            records
                .iter()
                .map(|(n, v, l, u)| ComponentRecord::new(*n, *v, *l, *u))
                .collect(),
        )
    }

    #[test]
    fn test_disjoint_tables_concatenate_manifest_first() {
        let manifest = table(
            TableSource::Manifest,
            &[("a", "1", "MIT", "N/A"), ("b", "1", "MIT", "N/A")],
        );
        let matches = table(TableSource::Matches, &[("c", "2", "BSD", "http://c")]);

        let (merged, stats) = merge_tables_with_stats(&manifest, &matches);
        assert_eq!(merged.source, TableSource::Merged);
        assert_eq!(merged.len(), 3);
        let names: Vec<_> = merged.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(stats.duplicates_removed(), 0);
    }

    #[test]
    fn test_shared_record_kept_once_at_first_position() {
        let shared = ("libX", "1.0", "MIT", "http://x");
        let manifest = table(TableSource::Manifest, &[("a", "1", "MIT", "N/A"), shared]);
        let matches = table(TableSource::Matches, &[shared, ("z", "9", "GPL", "N/A"), shared]);

        let (merged, stats) = merge_tables_with_stats(&manifest, &matches);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.records[1], ComponentRecord::new("libX", "1.0", "MIT", "http://x"));
        assert_eq!(merged.records[2].name, "z");
        assert_eq!(stats.duplicates_removed(), 2);
    }

    #[test]
    fn test_single_field_difference_is_distinct() {
        let manifest = table(TableSource::Manifest, &[("libX", "1.0", "MIT", "N/A")]);
        let matches = table(TableSource::Matches, &[("libX", "1.0", "MIT-0", "N/A")]);

        assert_eq!(merge_tables(&manifest, &matches).len(), 2);
    }

    #[test]
    fn test_duplicates_within_one_table_removed() {
        let manifest = table(TableSource::Manifest, &[]);
        let matches = table(
            TableSource::Matches,
            &[("zlib", "1.3", "Zlib", "N/A"), ("zlib", "1.3", "Zlib", "N/A")],
        );

        assert_eq!(merge_tables(&manifest, &matches).len(), 1);
    }

    #[test]
    fn test_empty_inputs() {
        let merged = merge_tables(
            &RecordTable::new(TableSource::Manifest),
            &RecordTable::new(TableSource::Matches),
        );
        assert!(merged.is_empty());
    }
}
