//! Report type definitions.

use crate::diff::{DependencyDiff, DirectoryDiff, FindingDelta, RebaseWarning};
use crate::matching::TyposquatReport;
use crate::model::{Finding, PackageRef};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Resolves to the summary
    #[default]
    Auto,
    /// Human-readable summary
    Summary,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Everything one command found, in the shape reporters render.
///
/// Sections a command does not produce stay empty and are omitted from
/// JSON output.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewReport {
    /// Command that produced the report
    pub command: String,
    /// Package listing of a single lockfile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packages: Option<Vec<PackageRef>>,
    /// Print the source locator of every listed package
    #[serde(skip)]
    pub show_sources: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<DependencyDiff>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_diffs: Vec<FileDiffSection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scans: Vec<ScanSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typosquats: Option<TyposquatReport>,
    /// Packages a multi-package scan gave up on
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedPackage>,
}

impl ReviewReport {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Self::default()
        }
    }

    /// Any dependency or file changed.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.dependencies
            .as_ref()
            .is_some_and(DependencyDiff::has_changes)
            || self.file_diffs.iter().any(FileDiffSection::has_changes)
    }

    /// Any scan introduced a finding.
    #[must_use]
    pub fn has_findings(&self) -> bool {
        self.scans.iter().any(|s| !s.new_findings.is_empty())
    }

    #[must_use]
    pub fn has_typosquats(&self) -> bool {
        self.typosquats.as_ref().is_some_and(|t| !t.is_empty())
    }

    #[must_use]
    pub fn finding_count(&self) -> usize {
        self.scans.iter().map(|s| s.new_findings.len()).sum()
    }
}

/// Files that differ between two versions of one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDiffSection {
    pub label: String,
    pub before_root: PathBuf,
    pub after_root: PathBuf,
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub changed: Vec<String>,
}

impl FileDiffSection {
    pub fn from_diff(label: impl Into<String>, diff: &DirectoryDiff) -> Self {
        let owned = |paths: Vec<&str>| -> Vec<String> { paths.into_iter().map(str::to_string).collect() };
        Self {
            label: label.into(),
            before_root: diff.before_root().to_path_buf(),
            after_root: diff.after_root().to_path_buf(),
            added: owned(diff.added()),
            removed: owned(diff.removed()),
            changed: owned(diff.changed()),
        }
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        !(self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty())
    }
}

/// Findings one scan comparison introduced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanSection {
    pub label: String,
    pub new_findings: Vec<Finding>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<RebaseWarning>,
}

impl ScanSection {
    pub fn from_delta(label: impl Into<String>, delta: FindingDelta) -> Self {
        Self {
            label: label.into(),
            new_findings: delta.new_findings,
            warnings: delta.warnings,
        }
    }
}

/// A package left out of a multi-package scan, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedPackage {
    pub name: String,
    pub reason: String,
}
