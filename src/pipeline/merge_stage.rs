//! Merge stage.

use super::ParsedInputs;
use crate::merge::{merge_tables_with_stats, MergeStats};
use crate::model::RecordTable;

/// Build the merged table from both inputs.
pub fn merge_inputs(inputs: &ParsedInputs, quiet: bool) -> (RecordTable, MergeStats) {
    let (merged, stats) = merge_tables_with_stats(&inputs.manifest, &inputs.matches);
    if !quiet {
        tracing::info!(
            "Merged table: {} records ({} duplicates removed)",
            stats.merged_records,
            stats.duplicates_removed()
        );
    }
    (merged, stats)
}
