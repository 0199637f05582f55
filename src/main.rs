//! compliance-report: license compliance tables from Syft and SCANOSS output
//!
//! Reads a component manifest and a code-match report and writes three
//! spreadsheet tables: one per input and a deduplicated merge of both.

use anyhow::{Context, Result};
use clap::Parser;
use compliance_report::{
    cli,
    config::{load_config_file, load_or_default, AppConfig, CliOverrides, InputPaths, ReportConfig},
    pipeline::{exit_codes, write_completion_message, PipelineError},
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "compliance-report")]
#[command(version)]
#[command(about = "Generate license compliance tables from a Syft manifest and a SCANOSS report", long_about = None)]
#[command(after_help = "OUTPUTS:
    syft-compliance-report.xlsx      components declared in the manifest
    scanoss-compliance-report.xlsx   components matched by the scan
    compliance-report.xlsx           both, with exact duplicates removed

EXIT CODES:
    0  All three tables written
    1  Missing input, unreadable input, or write failure
    2  Invalid command-line usage

EXAMPLES:
    compliance-report syft-sbom.spdx.json scanoss-results.json
    compliance-report -f csv -o reports/ syft-sbom.spdx.json scanoss-results.json")]
struct Cli {
    /// Syft manifest (JSON with a top-level `packages` list)
    #[arg(value_name = "MANIFEST")]
    manifest: PathBuf,

    /// SCANOSS match report (JSON mapping file paths to match lists)
    #[arg(value_name = "MATCH_REPORT")]
    match_report: PathBuf,

    /// Directory for the three output tables
    #[arg(short, long, env = "COMPLIANCE_REPORT_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Output table format
    #[arg(short, long, value_enum, env = "COMPLIANCE_REPORT_FORMAT")]
    format: Option<ReportFormat>,

    /// Config file (default: discover .compliance-report.yaml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let code = match run(cli) {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => report_error(&err),
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<()> {
    let overrides = CliOverrides {
        output_dir: cli.output_dir,
        format: cli.format,
        quiet: cli.quiet,
    };
    let app = load_app_config(cli.config, &overrides)?;
    let format = app.output.format;
    let quiet = app.behavior.quiet;

    let outcome = cli::run_report(ReportConfig {
        inputs: InputPaths {
            manifest: cli.manifest,
            match_report: cli.match_report,
        },
        app,
    })?;

    if !quiet {
        write_completion_message(&mut io::stdout().lock(), &outcome.outputs, format)
            .context("Failed to write completion message")?;
    }
    Ok(())
}

/// An explicit `--config` must load; a discovered one only warns on failure.
fn load_app_config(explicit: Option<PathBuf>, overrides: &CliOverrides) -> Result<AppConfig> {
    let mut app = if let Some(path) = explicit {
        let app = load_config_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        app
    } else {
        let (app, loaded_from) = load_or_default(None);
        if let Some(path) = loaded_from {
            tracing::debug!("Loaded config from {}", path.display());
        }
        app
    };
    app.merge_cli(overrides);
    Ok(app)
}

fn report_error(err: &anyhow::Error) -> i32 {
    if let Some(pipeline_err) = err.downcast_ref::<PipelineError>() {
        eprintln!("Error: {pipeline_err}");
        pipeline_err.exit_code()
    } else {
        eprintln!("Error: {err:#}");
        exit_codes::ERROR
    }
}
