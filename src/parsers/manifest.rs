//! Syft manifest reader.
//!
//! Reads the `packages` list of a Syft-produced SBOM (SPDX JSON or Syft's
//! own JSON layout) and emits one record per package entry.

use crate::model::{ComponentRecord, RecordTable, TableSource};
use crate::parsers::traits::{FormatConfidence, FormatDetection, ParseError, RecordReader};
use serde::Deserialize;
use serde_json::Value;

/// Reader for component manifests
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestReader;

impl ManifestReader {
    /// Create a new manifest reader
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Convert an already-parsed JSON document.
    pub fn read_value(&self, document: Value) -> Result<RecordTable, ParseError> {
        let mut root = match document {
            Value::Object(root) => root,
            other => {
                return Err(ParseError::InvalidStructure(format!(
                    "manifest must be a JSON object, found {}",
                    json_kind(&other)
                )));
            }
        };

        let packages = match root.remove("packages") {
            None => Vec::new(),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(ParseError::InvalidStructure(format!(
                    "'packages' must be a list, found {}",
                    json_kind(&other)
                )));
            }
        };

        let mut table = RecordTable::new(TableSource::Manifest);
        for (index, item) in packages.into_iter().enumerate() {
            if !item.is_object() {
                return Err(ParseError::InvalidStructure(format!(
                    "package entry {index} must be an object, found {}",
                    json_kind(&item)
                )));
            }
            let package: ManifestPackage = serde_json::from_value(item).map_err(|e| {
                ParseError::InvalidStructure(format!("package entry {index}: {e}"))
            })?;
            let record = package.into_record().map_err(|e| {
                ParseError::InvalidStructure(format!("package entry {index}: {e}"))
            })?;
            table.push(record);
        }

        tracing::debug!("Read {} manifest packages", table.len());
        Ok(table)
    }
}

impl RecordReader for ManifestReader {
    fn parse_str(&self, content: &str) -> Result<RecordTable, ParseError> {
        let document: Value = serde_json::from_str(content)?;
        self.read_value(document)
    }

    fn format_name(&self) -> &str {
        "Syft manifest"
    }

    fn source(&self) -> TableSource {
        TableSource::Manifest
    }

    fn detect(&self, content: &str) -> FormatDetection {
        let trimmed = content.trim_start();
        if !trimmed.starts_with('{') {
            return FormatDetection::no_match();
        }

        let has_packages = content.contains("\"packages\"");
        let has_spdx_version = content.contains("\"spdxVersion\"");
        let has_syft_markers =
            content.contains("\"artifacts\"") || content.contains("\"syft\"");

        if has_packages && has_spdx_version {
            FormatDetection::with_confidence(FormatConfidence::CERTAIN).variant("SPDX JSON")
        } else if has_packages && has_syft_markers {
            FormatDetection::with_confidence(FormatConfidence::HIGH).variant("Syft JSON")
        } else if has_packages {
            FormatDetection::with_confidence(FormatConfidence::MEDIUM).variant("JSON")
        } else if has_spdx_version {
            FormatDetection::with_confidence(FormatConfidence::LOW)
                .variant("SPDX JSON")
                .warning("Document has no 'packages' list")
        } else {
            FormatDetection::no_match()
        }
    }
}

/// One entry of the manifest's `packages` list.
///
/// Unknown keys are ignored. `null` values behave like absent keys.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ManifestPackage {
    name: Option<String>,
    version: Option<String>,
    /// SPDX JSON stores the version here
    version_info: Option<String>,
    license_concluded: Option<String>,
    /// Only element 0 is ever read
    found_licenses: Option<Vec<Value>>,
    homepage: Option<String>,
}

impl ManifestPackage {
    fn into_record(self) -> Result<ComponentRecord, String> {
        let name = self.name.filter(|n| !n.is_empty());
        let version = self.version.or(self.version_info);
        // Concluded license is taken verbatim, NOASSERTION included.
        let license = match self.license_concluded {
            Some(concluded) => Some(concluded),
            None => first_found_license(self.found_licenses)?,
        };
        let license_url = self.homepage.filter(|h| !h.is_empty());

        Ok(ComponentRecord::from_parts(name, version, license, license_url))
    }
}

fn first_found_license(found: Option<Vec<Value>>) -> Result<Option<String>, String> {
    match found.and_then(|found| found.into_iter().next()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(license)) => Ok(Some(license)),
        Some(other) => Err(format!(
            "first found license must be a string, found {}",
            json_kind(&other)
        )),
    }
}

/// Short description of a JSON value's type for error messages.
pub(crate) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
