//! Configuration validation for compliance-report.

use super::types::{AppConfig, BehaviorConfig, OutputConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !self.directory.as_os_str().is_empty() && !self.directory.is_dir() {
            errors.push(ConfigError {
                field: "output.directory".to_string(),
                message: format!("Directory does not exist: {}", self.directory.display()),
            });
        }

        let names = [
            ("output.manifest_file", &self.manifest_file),
            ("output.matches_file", &self.matches_file),
            ("output.merged_file", &self.merged_file),
        ];
        for (field, name) in names {
            if let Some(name) = name {
                if let Some(message) = file_name_problem(name) {
                    errors.push(ConfigError {
                        field: field.to_string(),
                        message,
                    });
                }
            }
        }

        let effective = crate::pipeline::OutputPaths::from_config(self);
        if !effective.are_distinct() {
            errors.push(ConfigError {
                field: "output".to_string(),
                message: "The three output file names must be distinct".to_string(),
            });
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // Only boolean flags
        Vec::new()
    }
}

/// Describe why a configured file name is unusable, if it is.
fn file_name_problem(name: &str) -> Option<String> {
    if name.trim().is_empty() {
        Some("File name must not be empty".to_string())
    } else if name.contains('/') || name.contains('\\') {
        Some(format!(
            "'{name}' must be a bare file name; use output.directory for the location"
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_missing_directory_rejected() {
        let config = AppConfig::builder()
            .output_dir("/definitely/not/a/real/dir")
            .build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "output.directory");
    }

    #[test]
    fn test_file_names_validated() {
        let config = AppConfig::builder()
            .manifest_file("")
            .matches_file("out/scan.xlsx")
            .build();
        let fields: Vec<_> = config.validate().into_iter().map(|e| e.field).collect();
        assert!(fields.contains(&"output.manifest_file".to_string()));
        assert!(fields.contains(&"output.matches_file".to_string()));
    }

    #[test]
    fn test_duplicate_file_names_rejected() {
        let config = AppConfig::builder()
            .manifest_file("same.xlsx")
            .merged_file("same.xlsx")
            .build();
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.field == "output"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError {
            field: "output.directory".to_string(),
            message: "missing".to_string(),
        };
        assert_eq!(err.to_string(), "output.directory: missing");
    }
}
