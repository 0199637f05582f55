//! Output file naming and the completion message.

use crate::config::OutputConfig;
use crate::reports::ReportFormat;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File stem of the manifest table.
pub const DEFAULT_MANIFEST_STEM: &str = "syft-compliance-report";
/// File stem of the match table.
pub const DEFAULT_MATCHES_STEM: &str = "scanoss-compliance-report";
/// File stem of the merged table.
pub const DEFAULT_MERGED_STEM: &str = "compliance-report";

/// Resolved locations of the three output tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Directory holding all three files
    pub directory: PathBuf,
    /// Manifest table file name
    pub manifest: String,
    /// Match table file name
    pub matches: String,
    /// Merged table file name
    pub merged: String,
}

impl OutputPaths {
    /// Default file names for a format, placed in `directory`.
    pub fn in_dir(directory: impl Into<PathBuf>, format: ReportFormat) -> Self {
        let ext = format.extension();
        Self {
            directory: directory.into(),
            manifest: format!("{DEFAULT_MANIFEST_STEM}.{ext}"),
            matches: format!("{DEFAULT_MATCHES_STEM}.{ext}"),
            merged: format!("{DEFAULT_MERGED_STEM}.{ext}"),
        }
    }

    /// Effective paths for an output config; unset names fall back to the
    /// defaults for its format.
    #[must_use]
    pub fn from_config(output: &OutputConfig) -> Self {
        let defaults = Self::in_dir(&output.directory, output.format);
        Self {
            manifest: output.manifest_file.clone().unwrap_or(defaults.manifest),
            matches: output.matches_file.clone().unwrap_or(defaults.matches),
            merged: output.merged_file.clone().unwrap_or(defaults.merged),
            directory: defaults.directory,
        }
    }

    /// Whether the three names are pairwise different.
    #[must_use]
    pub fn are_distinct(&self) -> bool {
        self.manifest != self.matches && self.manifest != self.merged && self.matches != self.merged
    }

    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.directory.join(&self.manifest)
    }

    #[must_use]
    pub fn matches_path(&self) -> PathBuf {
        self.directory.join(&self.matches)
    }

    #[must_use]
    pub fn merged_path(&self) -> PathBuf {
        self.directory.join(&self.merged)
    }

    /// Paths in announcement order: merged, manifest, matches.
    #[must_use]
    pub fn announced(&self) -> [PathBuf; 3] {
        [self.merged_path(), self.manifest_path(), self.matches_path()]
    }

    /// How a written file is named in the completion message. Files in the
    /// working directory are shown by bare name.
    fn display_name(&self, name: &str) -> String {
        if is_current_dir(&self.directory) {
            name.to_string()
        } else {
            self.directory.join(name).display().to_string()
        }
    }
}

fn is_current_dir(dir: &Path) -> bool {
    dir.as_os_str().is_empty() || dir == Path::new(".")
}

/// Write the success confirmation and the three file names.
pub fn write_completion_message(
    out: &mut dyn Write,
    paths: &OutputPaths,
    format: ReportFormat,
) -> std::io::Result<()> {
    writeln!(out, "{} reports generated successfully:", format.display_name())?;
    for name in [&paths.merged, &paths.manifest, &paths.matches] {
        writeln!(out, "- {}", paths.display_name(name))?;
    }
    Ok(())
}
