//! Diff-then-scan stage.
//!
//! For one pair of trees: directory diff, files to scan on each side,
//! one scanner call per side, then the finding delta. For a dependency
//! diff the same steps run once per version change, in parallel.

use super::PipelineError;
use crate::collaborators::{Fetcher, Scanner};
use crate::diff::{DependencyDiff, DirectoryDiff, FindingDelta, VersionChange};
use crate::model::PackageRef;
use crate::reports::{FileDiffSection, ScanSection, SkippedPackage};
use rayon::prelude::*;
use std::path::Path;

/// Result of diffing and scanning one package or directory pair.
#[derive(Debug, Clone)]
pub struct PackageScan {
    pub files: FileDiffSection,
    pub scan: ScanSection,
}

/// Scanners and settings shared by every comparison of one run.
pub struct ScanStage<'a> {
    before_scanner: &'a dyn Scanner,
    after_scanner: &'a dyn Scanner,
    rules: &'a Path,
    ignore: &'a [String],
}

impl<'a> ScanStage<'a> {
    pub fn new(
        before_scanner: &'a dyn Scanner,
        after_scanner: &'a dyn Scanner,
        rules: &'a Path,
        ignore: &'a [String],
    ) -> Self {
        Self {
            before_scanner,
            after_scanner,
            rules,
            ignore,
        }
    }

    /// Diff two trees and scan only the files that differ.
    ///
    /// Identical trees never reach the scanners.
    pub fn scan_directories(
        &self,
        label: &str,
        before_root: &Path,
        after_root: &Path,
    ) -> Result<PackageScan, PipelineError> {
        let diff = DirectoryDiff::compute(before_root, after_root, self.ignore).map_err(
            |source| PipelineError::DiffFailed {
                label: label.to_string(),
                source,
            },
        )?;

        let delta = if diff.has_changes() {
            let scan_err = |source| PipelineError::ScanFailed {
                label: label.to_string(),
                source,
            };
            let before = self
                .before_scanner
                .scan(self.rules, &diff.before_files_to_scan())
                .map_err(scan_err)?;
            let after = self
                .after_scanner
                .scan(self.rules, &diff.after_files_to_scan())
                .map_err(scan_err)?;
            FindingDelta::compute(before_root, &before, after_root, &after)
        } else {
            tracing::debug!(label, "no file changes, skipping scan");
            FindingDelta::default()
        };

        Ok(PackageScan {
            files: FileDiffSection::from_diff(label, &diff),
            scan: ScanSection::from_delta(label, delta),
        })
    }

    /// Fetch two versions of a package and compare them.
    pub fn scan_package(
        &self,
        fetcher: &dyn Fetcher,
        before: &PackageRef,
        after: &PackageRef,
    ) -> Result<PackageScan, PipelineError> {
        let fetch = |pkg: &PackageRef| {
            fetcher.fetch(pkg).map_err(|source| PipelineError::FetchFailed {
                package: pkg.to_string(),
                source,
            })
        };
        let before_root = fetch(before)?;
        let after_root = fetch(after)?;
        self.scan_directories(&package_label(before, after), &before_root, &after_root)
    }

    /// Compare every version change of `diff`.
    ///
    /// A package whose fetch, diff or scan fails is skipped with a warning
    /// and does not stop the others. Results keep the diff's name order.
    pub fn scan_version_changes(
        &self,
        fetcher: &dyn Fetcher,
        diff: &DependencyDiff,
    ) -> (Vec<PackageScan>, Vec<SkippedPackage>) {
        let outcomes: Vec<(&VersionChange, Result<PackageScan, PipelineError>)> = diff
            .version_changes()
            .par_iter()
            .map(|change| (change, self.scan_package(fetcher, &change.before, &change.after)))
            .collect();

        let mut scans = Vec::new();
        let mut skipped = Vec::new();
        for (change, outcome) in outcomes {
            match outcome {
                Ok(scan) => scans.push(scan),
                Err(e) => {
                    tracing::warn!(package = %change.key, "skipping package: {e}");
                    skipped.push(SkippedPackage {
                        name: change.key.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        (scans, skipped)
    }
}

/// Display label of a version change, `name a → b`.
fn package_label(before: &PackageRef, after: &PackageRef) -> String {
    format!("{} {} → {}", after.name, before.version, after.version)
}
