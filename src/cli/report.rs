//! Report command handler.
//!
//! Reads the manifest and match report, merges them, and writes the three
//! compliance tables.

use crate::config::{ReportConfig, Validatable};
use crate::merge::MergeStats;
use crate::pipeline::{
    check_inputs_exist, export_tables, merge_inputs, parse_inputs, OutputPaths, PipelineError,
    ReportTables,
};
use anyhow::Result;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    /// Where the three tables were written
    pub outputs: OutputPaths,
    /// Record counts of the merge
    pub stats: MergeStats,
}

/// Run one reconciliation.
///
/// Inputs are checked before anything is read, and configuration is
/// validated before anything is written. Printing the completion message is
/// left to the caller.
#[allow(clippy::needless_pass_by_value)]
pub fn run_report(config: ReportConfig) -> Result<ReportOutcome> {
    let quiet = config.app.behavior.quiet;

    check_inputs_exist(&config.inputs)?;

    let problems = config.app.validate();
    if !problems.is_empty() {
        let message = problems
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(PipelineError::InvalidConfig(message).into());
    }

    let parsed = parse_inputs(&config.inputs, quiet)?;
    let (merged, stats) = merge_inputs(&parsed, quiet);

    let outputs = OutputPaths::from_config(&config.app.output);
    let tables = ReportTables {
        manifest: &parsed.manifest,
        matches: &parsed.matches,
        merged: &merged,
    };
    export_tables(tables, &outputs, config.app.output.format, quiet)?;

    Ok(ReportOutcome { outputs, stats })
}
