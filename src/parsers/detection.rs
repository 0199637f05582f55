//! Document kind detection.
//!
//! Scores content against both readers so the pipeline can notice when the
//! two positional inputs were given in the wrong order.

use super::traits::{FormatConfidence, FormatDetection, RecordReader};
use super::{ManifestReader, MatchReader};
use crate::model::TableSource;

/// Minimum confidence threshold for accepting a detection.
pub const MIN_CONFIDENCE_THRESHOLD: f32 = 0.25;

/// Input document kind identified during detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Component manifest (Syft SBOM)
    Manifest,
    /// Code-match scan report (SCANOSS)
    MatchReport,
}

impl DocumentKind {
    /// Get the human-readable name for this document kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Manifest => "manifest",
            Self::MatchReport => "match report",
        }
    }

    /// The document kind a table of this source is read from.
    #[must_use]
    pub const fn for_source(source: TableSource) -> Option<Self> {
        match source {
            TableSource::Manifest => Some(Self::Manifest),
            TableSource::Matches => Some(Self::MatchReport),
            TableSource::Merged => None,
        }
    }
}

/// Result of document detection.
#[derive(Debug, Clone)]
pub struct DetectionResult {
    /// The document kind, if detected.
    pub kind: Option<DocumentKind>,
    /// Confidence level of the detection.
    pub confidence: FormatConfidence,
    /// Detected producer or variant.
    pub variant: Option<String>,
    /// Any warnings about the detection.
    pub warnings: Vec<String>,
}

impl DetectionResult {
    /// Create a result indicating no document kind was detected.
    #[must_use]
    pub fn unknown(reason: &str) -> Self {
        Self {
            kind: None,
            confidence: FormatConfidence::NONE,
            variant: None,
            warnings: vec![reason.to_string()],
        }
    }

    fn from_detection(kind: DocumentKind, detection: FormatDetection) -> Self {
        Self {
            kind: Some(kind),
            confidence: detection.confidence,
            variant: detection.variant,
            warnings: detection.warnings,
        }
    }

    /// Check if the detection is confident enough to act on.
    #[must_use]
    pub fn is_confident(&self) -> bool {
        self.kind.is_some() && self.confidence.value() >= MIN_CONFIDENCE_THRESHOLD
    }
}

/// Detect which kind of input document the content holds.
///
/// Ties go to the manifest reader.
#[must_use]
pub fn detect_document_kind(content: &str) -> DetectionResult {
    let manifest = ManifestReader::new().detect(content);
    let matches = MatchReader::new().detect(content);

    let result = if manifest.confidence >= matches.confidence {
        DetectionResult::from_detection(DocumentKind::Manifest, manifest)
    } else {
        DetectionResult::from_detection(DocumentKind::MatchReport, matches)
    };

    if result.is_confident() {
        result
    } else {
        DetectionResult::unknown("content does not look like a manifest or a match report")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_spdx_manifest() {
        let result = detect_document_kind(r#"{"spdxVersion": "SPDX-2.3", "packages": []}"#);
        assert_eq!(result.kind, Some(DocumentKind::Manifest));
        assert_eq!(result.variant.as_deref(), Some("SPDX JSON"));
    }

    #[test]
    fn test_detects_match_report() {
        let result = detect_document_kind(
            r#"{"src/zip.c": [{"id": "file", "matched": "100%", "component": "zlib"}]}"#,
        );
        assert_eq!(result.kind, Some(DocumentKind::MatchReport));
        assert!(result.is_confident());
    }

    #[test]
    fn test_unknown_content() {
        let result = detect_document_kind("not json at all");
        assert!(result.kind.is_none());
        assert!(!result.is_confident());
        assert_eq!(result.warnings.len(), 1);
    }
}
