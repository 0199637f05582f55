//! SCANOSS match report reader.
//!
//! A match report maps each scanned file path to a list of match objects.
//! Records are emitted file by file in document order, then match by match.
//! Several files commonly match the same component; duplicates are left for
//! the merge stage to remove.

use crate::model::{ComponentRecord, RecordTable, TableSource};
use crate::parsers::manifest::json_kind;
use crate::parsers::traits::{FormatConfidence, FormatDetection, ParseError, RecordReader};
use serde::Deserialize;
use serde_json::Value;

/// Reader for code-match scan reports
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchReader;

impl MatchReader {
    /// Create a new match report reader
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Convert an already-parsed JSON document.
    ///
    /// Key order of the top-level object is preserved (`serde_json` is built
    /// with `preserve_order`).
    pub fn read_value(&self, document: Value) -> Result<RecordTable, ParseError> {
        let root = match document {
            Value::Object(root) => root,
            other => {
                return Err(ParseError::InvalidStructure(format!(
                    "match report must be a JSON object, found {}",
                    json_kind(&other)
                )));
            }
        };

        let mut table = RecordTable::new(TableSource::Matches);
        let file_count = root.len();
        for (path, matches) in root {
            let matches = match matches {
                Value::Array(matches) => matches,
                other => {
                    return Err(ParseError::InvalidStructure(format!(
                        "matches for '{path}' must be a list, found {}",
                        json_kind(&other)
                    )));
                }
            };

            for (index, entry) in matches.into_iter().enumerate() {
                if !entry.is_object() {
                    return Err(ParseError::InvalidStructure(format!(
                        "match {index} for '{path}' must be an object, found {}",
                        json_kind(&entry)
                    )));
                }
                let scan_match: ScanMatch = serde_json::from_value(entry).map_err(|e| {
                    ParseError::InvalidStructure(format!("match {index} for '{path}': {e}"))
                })?;
                let record = scan_match.into_record().map_err(|e| {
                    ParseError::InvalidStructure(format!("match {index} for '{path}': {e}"))
                })?;
                table.push(record);
            }
        }

        tracing::debug!(
            "Read {} matches across {} scanned files",
            table.len(),
            file_count
        );
        Ok(table)
    }
}

impl RecordReader for MatchReader {
    fn parse_str(&self, content: &str) -> Result<RecordTable, ParseError> {
        let document: Value = serde_json::from_str(content)?;
        self.read_value(document)
    }

    fn format_name(&self) -> &str {
        "SCANOSS match report"
    }

    fn source(&self) -> TableSource {
        TableSource::Matches
    }

    fn detect(&self, content: &str) -> FormatDetection {
        let trimmed = content.trim_start();
        if !trimmed.starts_with('{') {
            return FormatDetection::no_match();
        }

        // Syft output also carries "licenses", so the manifest marker vetoes.
        if content.contains("\"packages\"") || content.contains("\"spdxVersion\"") {
            return FormatDetection::no_match();
        }

        let has_component = content.contains("\"component\"");
        let has_match_id = content.contains("\"id\"") && content.contains("\"matched\"");
        let has_licenses = content.contains("\"licenses\"");

        if has_component && has_match_id {
            FormatDetection::with_confidence(FormatConfidence::CERTAIN).variant("SCANOSS JSON")
        } else if has_component && has_licenses {
            FormatDetection::with_confidence(FormatConfidence::HIGH).variant("SCANOSS JSON")
        } else if has_component || trimmed.trim_end() == "{}" {
            FormatDetection::with_confidence(FormatConfidence::MEDIUM).variant("JSON")
        } else if content.contains(": [") || content.contains(":[") {
            FormatDetection::with_confidence(FormatConfidence::LOW)
                .variant("JSON")
                .warning("No match objects recognised")
        } else {
            FormatDetection::no_match()
        }
    }
}

/// One match object for a scanned file.
#[derive(Debug, Deserialize)]
struct ScanMatch {
    component: Option<String>,
    version: Option<String>,
    licenses: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct MatchLicense {
    name: Option<String>,
    url: Option<String>,
}

impl ScanMatch {
    /// Only element 0 of `licenses` is read; later elements are never
    /// inspected. A `licenses` value that is not a list counts as absent.
    fn into_record(self) -> Result<ComponentRecord, String> {
        let first = match self.licenses {
            Some(Value::Array(list)) => list.into_iter().next(),
            _ => None,
        };
        let (license, license_url) = match first {
            None => (None, None),
            Some(first @ Value::Object(_)) => {
                let license: MatchLicense = serde_json::from_value(first)
                    .map_err(|e| format!("first license: {e}"))?;
                (license.name, license.url)
            }
            Some(other) => {
                return Err(format!(
                    "first license must be an object, found {}",
                    json_kind(&other)
                ));
            }
        };

        Ok(ComponentRecord::from_parts(
            self.component,
            self.version,
            license,
            license_url,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NOT_AVAILABLE, UNKNOWN};

    fn read(json: &str) -> RecordTable {
        MatchReader::new().parse_str(json).expect("match report should parse")
    }

    #[test]
    fn test_record_count_is_sum_of_matches() {
        let table = read(
            r#"{
                "src/a.c": [{"component": "zlib"}, {"component": "libpng"}],
                "src/b.c": [],
                "src/c.c": [{"component": "zlib"}]
            }"#,
        );
        assert_eq!(table.len(), 3);
        assert_eq!(table.source, TableSource::Matches);
    }

    #[test]
    fn test_document_order_is_preserved() {
        let table = read(
            r#"{
                "z.c": [{"component": "zeta"}],
                "a.c": [{"component": "alpha"}, {"component": "beta"}]
            }"#,
        );
        let names: Vec<_> = table.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "beta"]);
    }

    #[test]
    fn test_defaults_without_licenses() {
        let table = read(
            r#"{"f": [
                {"id": "none"},
                {"component": "x", "version": "1", "licenses": []},
                {"component": "y", "licenses": null}
            ]}"#,
        );
        for record in &table {
            assert_eq!(record.license, UNKNOWN);
            assert_eq!(record.license_url, NOT_AVAILABLE);
        }
        assert_eq!(table.records[0].name, UNKNOWN);
        assert_eq!(table.records[0].version, UNKNOWN);
    }

    #[test]
    fn test_only_first_license_surfaces() {
        let table = read(
            r#"{"f": [{
                "component": "libX",
                "version": "1.0",
                "licenses": [
                    {"name": "MIT", "url": "http://x"},
                    {"name": "GPL-2.0", "url": "http://gpl"}
                ]
            }]}"#,
        );
        assert_eq!(
            table.records[0],
            ComponentRecord::new("libX", "1.0", "MIT", "http://x")
        );
    }

    #[test]
    fn test_later_licenses_are_never_inspected() {
        for second in [r#""GPL-2.0""#, r#"{"name": "GPL", "url": 7}"#, "null"] {
            let json = format!(
                r#"{{"f": [{{
                    "component": "libX",
                    "version": "1.0",
                    "licenses": [{{"name": "MIT", "url": "http://x"}}, {second}]
                }}]}}"#
            );
            let table = read(&json);
            assert_eq!(
                table.records[0],
                ComponentRecord::new("libX", "1.0", "MIT", "http://x"),
                "second license {second}"
            );
        }
    }

    #[test]
    fn test_malformed_first_license_is_error() {
        let reader = MatchReader::new();
        let wrong_type = reader.parse_str(
            r#"{"f": [{"component": "x", "licenses": [{"name": "MIT", "url": 7}]}]}"#,
        );
        match wrong_type {
            Err(ParseError::InvalidStructure(msg)) => {
                assert!(msg.contains("match 0 for 'f'"), "{msg}");
            }
            other => panic!("expected InvalidStructure, got {other:?}"),
        }

        assert!(matches!(
            reader.parse_str(r#"{"f": [{"component": "x", "licenses": ["MIT"]}]}"#),
            Err(ParseError::InvalidStructure(_))
        ));
    }

    #[test]
    fn test_first_license_missing_subfields() {
        let table = read(r#"{"f": [{"component": "x", "licenses": [{"source": "scancode"}]}]}"#);
        assert_eq!(table.records[0].license, UNKNOWN);
        assert_eq!(table.records[0].license_url, NOT_AVAILABLE);
    }

    #[test]
    fn test_non_list_licenses_treated_as_absent() {
        let table = read(r#"{"f": [{"component": "x", "licenses": "MIT"}]}"#);
        assert_eq!(table.records[0].license, UNKNOWN);
    }

    #[test]
    fn test_empty_report() {
        assert!(read("{}").is_empty());
    }

    #[test]
    fn test_rejects_malformed_documents() {
        let reader = MatchReader::new();
        assert!(matches!(reader.parse_str(""), Err(ParseError::JsonError(_))));
        assert!(matches!(
            reader.parse_str("[]"),
            Err(ParseError::InvalidStructure(_))
        ));
        assert!(matches!(
            reader.parse_str(r#"{"f": {"component": "x"}}"#),
            Err(ParseError::InvalidStructure(_))
        ));
        assert!(matches!(
            reader.parse_str(r#"{"f": ["zlib"]}"#),
            Err(ParseError::InvalidStructure(_))
        ));
    }

    #[test]
    fn test_detect() {
        let reader = MatchReader::new();
        let scan = r#"{"a.c": [{"id": "file", "matched": "100%", "component": "zlib"}]}"#;
        assert_eq!(reader.confidence(scan), FormatConfidence::CERTAIN);
        assert!(!reader.can_parse(r#"{"packages": []}"#));
        assert!(reader.can_parse("{}"));
    }
}
