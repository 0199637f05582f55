//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".compliance-report.yaml",
    ".compliance-report.yml",
    "compliance-report.yaml",
    "compliance-report.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/compliance-report/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("compliance-report")) {
            return Some(path);
        }
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

/// Values given on the command line. `None` leaves the file value alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output_dir: Option<PathBuf>,
    pub format: Option<ReportFormat>,
    pub quiet: bool,
}

impl AppConfig {
    /// Layer CLI values over this (file-derived) config.
    pub fn merge_cli(&mut self, cli: &CliOverrides) {
        if let Some(dir) = &cli.output_dir {
            self.output.directory.clone_from(dir);
        }
        if let Some(format) = cli.format {
            self.output.format = format;
        }
        if cli.quiet {
            self.behavior.quiet = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "output:\n  format: csv\n  merged_file: merged.csv").unwrap();

        let config = load_config_file(file.path()).unwrap();
        assert_eq!(config.output.format, ReportFormat::Csv);
        assert_eq!(config.output.merged_file.as_deref(), Some("merged.csv"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config_file(Path::new("/no/such/.compliance-report.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "output: [unclosed").unwrap();
        assert!(matches!(
            load_config_file(file.path()),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_discover_explicit_path() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(
            discover_config_file(Some(file.path())),
            Some(file.path().to_path_buf())
        );
    }

    #[test]
    fn test_find_config_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_config_in_dir(dir.path()).is_none());

        std::fs::write(dir.path().join("compliance-report.yml"), "").unwrap();
        let found = find_config_in_dir(dir.path()).unwrap();
        assert!(found.ends_with("compliance-report.yml"));
    }

    #[test]
    fn test_merge_cli_overrides_file() {
        let mut config = AppConfig::builder().format(ReportFormat::Csv).build();
        config.merge_cli(&CliOverrides {
            output_dir: Some(PathBuf::from("out")),
            format: Some(ReportFormat::Xlsx),
            quiet: true,
        });
        assert_eq!(config.output.directory, PathBuf::from("out"));
        assert_eq!(config.output.format, ReportFormat::Xlsx);
        assert!(config.behavior.quiet);

        let mut config = AppConfig::builder().format(ReportFormat::Csv).build();
        config.merge_cli(&CliOverrides::default());
        assert_eq!(config.output.format, ReportFormat::Csv);
    }
}
