//! Findings introduced between two scans.

use super::reconcile::subtract;
use crate::model::Finding;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A finding left out of a delta because it could not be rebased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RebaseWarning {
    pub path: PathBuf,
    pub rule_id: String,
    pub root: PathBuf,
    pub message: String,
}

/// Outcome of comparing two scans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[must_use]
pub struct FindingDelta {
    /// Findings only in the *after* scan, paths relative to its root,
    /// sorted by path then line
    pub new_findings: Vec<Finding>,
    /// Findings of either scan skipped because they lay outside their root
    pub warnings: Vec<RebaseWarning>,
}

impl FindingDelta {
    /// Rebase both scans onto their roots and keep the *after* findings
    /// whose identity no *before* finding shares.
    ///
    /// Identity is (relative path, rule id, matched lines). A finding that
    /// fails to rebase is skipped and recorded as a warning.
    pub fn compute(
        before_root: &Path,
        before: &[Finding],
        after_root: &Path,
        after: &[Finding],
    ) -> Self {
        let mut warnings = Vec::new();
        let before = rebase_all(before_root, before, &mut warnings);
        let after = rebase_all(after_root, after, &mut warnings);

        let mut new_findings = subtract(&before, after, Finding::key);
        new_findings.sort_by(|a, b| a.path.cmp(&b.path).then(a.line.cmp(&b.line)));

        Self {
            new_findings,
            warnings,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.new_findings.is_empty()
    }
}

/// Findings of `after` absent from `before`, both already relative to
/// their scan roots.
#[must_use]
pub fn new_only(before: &[Finding], after: &[Finding]) -> Vec<Finding> {
    subtract(before, after.to_vec(), Finding::key)
}

fn rebase_all(root: &Path, findings: &[Finding], warnings: &mut Vec<RebaseWarning>) -> Vec<Finding> {
    findings
        .iter()
        .filter_map(|finding| match finding.rebase(root) {
            Ok(rebased) => Some(rebased),
            Err(e) => {
                tracing::warn!(
                    path = %finding.path.display(),
                    root = %root.display(),
                    "skipping finding: {e}"
                );
                warnings.push(RebaseWarning {
                    path: finding.path.clone(),
                    rule_id: finding.rule_id.clone(),
                    root: root.to_path_buf(),
                    message: e.to_string(),
                });
                None
            }
        })
        .collect()
}
