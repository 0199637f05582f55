//! Configuration types for compliance-report runs.

use crate::reports::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or
/// config files.
///
/// Constructed from a config file, CLI arguments, or both (with CLI
/// overriding file settings).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (directory, format, file names)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the output directory.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output.directory = dir.into();
        self
    }

    /// Set the output format.
    pub const fn format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Override the manifest table file name.
    pub fn manifest_file(mut self, name: impl Into<String>) -> Self {
        self.config.output.manifest_file = Some(name.into());
        self
    }

    /// Override the match table file name.
    pub fn matches_file(mut self, name: impl Into<String>) -> Self {
        self.config.output.matches_file = Some(name.into());
        self
    }

    /// Override the merged table file name.
    pub fn merged_file(mut self, name: impl Into<String>) -> Self {
        self.config.output.merged_file = Some(name.into());
        self
    }

    /// Suppress progress logging and the completion message.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section configs
// ============================================================================

/// Where and how the three tables are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the output files
    pub directory: PathBuf,
    /// Table encoding
    pub format: ReportFormat,
    /// File name for the manifest table (default depends on format)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_file: Option<String>,
    /// File name for the match table (default depends on format)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches_file: Option<String>,
    /// File name for the merged table (default depends on format)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_file: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            format: ReportFormat::default(),
            manifest_file: None,
            matches_file: None,
            merged_file: None,
        }
    }
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress progress logging and the completion message
    pub quiet: bool,
}

/// Input paths for one reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    /// Syft manifest
    pub manifest: PathBuf,
    /// SCANOSS match report
    pub match_report: PathBuf,
}

/// Everything needed to run one reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Input documents
    pub inputs: InputPaths,
    /// Effective application config
    pub app: AppConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.output.directory, PathBuf::from("."));
        assert_eq!(config.output.format, ReportFormat::Xlsx);
        assert!(config.output.merged_file.is_none());
        assert!(!config.behavior.quiet);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .output_dir("/tmp/reports")
            .format(ReportFormat::Csv)
            .merged_file("all.csv")
            .quiet(true)
            .build();
        assert_eq!(config.output.directory, PathBuf::from("/tmp/reports"));
        assert_eq!(config.output.format, ReportFormat::Csv);
        assert_eq!(config.output.merged_file.as_deref(), Some("all.csv"));
        assert!(config.behavior.quiet);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("output:\n  format: csv\n").unwrap();
        assert_eq!(config.output.format, ReportFormat::Csv);
        assert_eq!(config.output.directory, PathBuf::from("."));
    }
}
