//! Configuration module for compliance-report.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.compliance-report.yaml` file in the working directory or in
//! `~/.config/compliance-report/`:
//!
//! ```yaml
//! output:
//!   directory: reports
//!   format: csv
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, InputPaths, OutputConfig, ReportConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, load_config_file, load_or_default, CliOverrides, ConfigFileError,
};
