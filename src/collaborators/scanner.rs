use crate::error::Result;
use crate::model::Finding;
use crate::parsers::parse_semgrep_report;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Runs static analysis over a set of files.
pub trait Scanner: Send + Sync {
    /// Backend call. Only invoked with a non-empty file list.
    fn scan_files(&self, rules: &Path, files: &[PathBuf]) -> Result<Vec<Finding>>;

    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Scan `files` with the rule set at `rules`.
    ///
    /// An empty file list returns no findings without reaching the backend.
    fn scan(&self, rules: &Path, files: &[PathBuf]) -> Result<Vec<Finding>> {
        if files.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!(scanner = self.name(), files = files.len(), "scanning");
        self.scan_files(rules, files)
    }
}

/// Scanner that serves findings from a semgrep JSON report produced ahead
/// of time over the whole tree.
///
/// Only findings whose path is among the requested files are returned.
#[derive(Debug, Clone, Default)]
pub struct ReportScanner {
    findings: Vec<Finding>,
}

impl ReportScanner {
    pub fn new(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    /// Load the report at `path`.
    pub fn from_report(path: &Path) -> Result<Self> {
        Ok(Self::new(parse_semgrep_report(path)?))
    }

    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }
}

impl Scanner for ReportScanner {
    fn scan_files(&self, rules: &Path, files: &[PathBuf]) -> Result<Vec<Finding>> {
        tracing::debug!(rules = %rules.display(), "serving findings from precomputed report");
        let wanted: HashSet<&Path> = files.iter().map(PathBuf::as_path).collect();
        Ok(self
            .findings
            .iter()
            .filter(|f| wanted.contains(f.path.as_path()))
            .cloned()
            .collect())
    }

    fn name(&self) -> &'static str {
        "semgrep-report"
    }
}
