//! Pipeline orchestration for review operations.
//!
//! This module provides shared orchestration logic for parse → diff →
//! scan → report workflows, reducing duplication across CLI command
//! handlers.

mod output;
mod parse;
mod report_stage;
mod scan_stage;

pub use output::{OutputTarget, should_use_color, write_output};
pub use parse::{load_diff_with_context, parse_lockfile_with_context};
pub use report_stage::output_report;
pub use scan_stage::{PackageScan, ScanStage};

use crate::config::BehaviorConfig;
use crate::error::GemDiffError;
use crate::reports::ReviewReport;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse an input file
    #[error("Parse failed for {path}: {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: GemDiffError,
    },

    /// A package could not be resolved to a local directory
    #[error("Fetch failed for {package}: {source}")]
    FetchFailed {
        package: String,
        #[source]
        source: GemDiffError,
    },

    /// Directory diff failed
    #[error("Diff failed for {label}: {source}")]
    DiffFailed {
        label: String,
        #[source]
        source: GemDiffError,
    },

    /// The scanner failed
    #[error("Scan failed for {label}: {source}")]
    ScanFailed {
        label: String,
        #[source]
        source: GemDiffError,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - nothing the behavior flags ask to fail on
    pub const SUCCESS: i32 = 0;
    /// Changes were detected
    pub const CHANGES_DETECTED: i32 = 1;
    /// New findings or typosquat candidates were introduced
    pub const FINDINGS_INTRODUCED: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Determine the exit code for a report under the configured fail flags.
///
/// Findings and typosquats outrank plain changes.
#[must_use]
pub fn determine_exit_code(behavior: &BehaviorConfig, report: &ReviewReport) -> i32 {
    if behavior.fail_on_findings && report.has_findings() {
        return exit_codes::FINDINGS_INTRODUCED;
    }
    if behavior.fail_on_typosquat && report.has_typosquats() {
        return exit_codes::FINDINGS_INTRODUCED;
    }
    if behavior.fail_on_change && report.has_changes() {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DependencyDiff;
    use crate::matching::TyposquatMatch;
    use crate::model::{DependencySnapshot, PackageRef, Source};

    fn changed_report() -> ReviewReport {
        let after: DependencySnapshot = [PackageRef::new("rai1s", "1.0.0", Source::default())]
            .into_iter()
            .collect();
        let mut report = ReviewReport::new("gemfile-diff");
        report.dependencies = Some(DependencyDiff::compute(&DependencySnapshot::new(), &after));
        report
    }

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::CHANGES_DETECTED, 1);
        assert_eq!(exit_codes::FINDINGS_INTRODUCED, 2);
        assert_eq!(exit_codes::ERROR, 3);
    }

    #[test]
    fn test_exit_code_without_flags_is_success() {
        assert_eq!(
            determine_exit_code(&BehaviorConfig::default(), &changed_report()),
            exit_codes::SUCCESS
        );
    }

    #[test]
    fn test_exit_code_fail_on_change() {
        let behavior = BehaviorConfig {
            fail_on_change: true,
            ..BehaviorConfig::default()
        };
        assert_eq!(
            determine_exit_code(&behavior, &changed_report()),
            exit_codes::CHANGES_DETECTED
        );
        assert_eq!(
            determine_exit_code(&behavior, &ReviewReport::new("gemfile-diff")),
            exit_codes::SUCCESS
        );
    }

    #[test]
    fn test_typosquat_outranks_change() {
        let behavior = BehaviorConfig {
            fail_on_change: true,
            fail_on_typosquat: true,
            ..BehaviorConfig::default()
        };
        let mut report = changed_report();
        report.typosquats = Some(
            [TyposquatMatch {
                candidate: "rai1s".to_string(),
                resembles: vec!["rails".to_string()],
            }]
            .into_iter()
            .collect(),
        );
        assert_eq!(
            determine_exit_code(&behavior, &report),
            exit_codes::FINDINGS_INTRODUCED
        );
    }
}
