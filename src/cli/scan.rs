//! Commands that scan changed files and report new findings.

use crate::collaborators::{LocalFetcher, ReportScanner};
use crate::config::AppConfig;
use crate::diff::FindingDelta;
use crate::model::{PackageRef, Source};
use crate::parsers::parse_semgrep_report;
use crate::pipeline::{
    PackageScan, ScanStage, determine_exit_code, load_diff_with_context, output_report,
};
use crate::reports::{ReviewReport, ScanSection};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Precomputed scanner output for the two sides of a comparison.
#[derive(Debug, Clone)]
pub struct ScanReports {
    pub before: PathBuf,
    pub after: PathBuf,
}

impl ScanReports {
    fn load(&self) -> Result<(ReportScanner, ReportScanner)> {
        let before = ReportScanner::from_report(&self.before)
            .with_context(|| format!("failed to load {}", self.before.display()))?;
        let after = ReportScanner::from_report(&self.after)
            .with_context(|| format!("failed to load {}", self.after.display()))?;
        Ok((before, after))
    }
}

/// Diff two versions of one package and report findings only the newer
/// version's changed files carry.
pub fn run_gem_diff_scan(
    config: &AppConfig,
    name: &str,
    before: &str,
    after: &str,
    reports: &ScanReports,
) -> Result<i32> {
    let (before_scanner, after_scanner) = reports.load()?;
    let stage = ScanStage::new(
        &before_scanner,
        &after_scanner,
        &config.scan.rules_path,
        &config.diff.ignore_files,
    );
    let fetcher = LocalFetcher::new(&config.fetch.gems_dir);

    let scan = stage.scan_package(
        &fetcher,
        &PackageRef::new(name, before, Source::default()),
        &PackageRef::new(name, after, Source::default()),
    )?;

    let mut report = ReviewReport::new("gem-diff-scan");
    push_scan(&mut report, scan);
    finish(config, &report)
}

/// Run the diff-then-scan comparison for every version change of a
/// persisted dependency diff.
///
/// Packages that cannot be fetched, diffed or scanned are skipped and
/// listed in the report.
pub fn run_gemfile_diff_scan(
    config: &AppConfig,
    diff_path: &Path,
    reports: &ScanReports,
) -> Result<i32> {
    let diff = load_diff_with_context(diff_path, config.behavior.quiet)?;
    let mut report = ReviewReport::new("gemfile-diff-scan");

    if diff.version_changes().is_empty() {
        tracing::info!("no version changes to scan");
    } else {
        let (before_scanner, after_scanner) = reports.load()?;
        let stage = ScanStage::new(
            &before_scanner,
            &after_scanner,
            &config.scan.rules_path,
            &config.diff.ignore_files,
        );
        let fetcher = LocalFetcher::new(&config.fetch.gems_dir);

        tracing::info!(
            packages = diff.version_changes().len(),
            "scanning changed packages"
        );
        let (scans, skipped) = stage.scan_version_changes(&fetcher, &diff);
        for scan in scans {
            push_scan(&mut report, scan);
        }
        report.skipped = skipped;
    }

    report.dependencies = Some(diff);
    finish(config, &report)
}

/// Compare two whole-tree scan reports taken over `before_dir` and
/// `after_dir`.
pub fn run_scan_diff(
    config: &AppConfig,
    before_dir: &Path,
    after_dir: &Path,
    reports: &ScanReports,
) -> Result<i32> {
    let before = parse_semgrep_report(&reports.before)
        .with_context(|| format!("failed to load {}", reports.before.display()))?;
    let after = parse_semgrep_report(&reports.after)
        .with_context(|| format!("failed to load {}", reports.after.display()))?;

    let delta = FindingDelta::compute(before_dir, &before, after_dir, &after);
    let label = format!("{} → {}", before_dir.display(), after_dir.display());

    let mut report = ReviewReport::new("scan-diff");
    report.scans.push(ScanSection::from_delta(label, delta));
    finish(config, &report)
}

fn push_scan(report: &mut ReviewReport, scan: PackageScan) {
    report.file_diffs.push(scan.files);
    report.scans.push(scan.scan);
}

fn finish(config: &AppConfig, report: &ReviewReport) -> Result<i32> {
    if !config.behavior.quiet {
        tracing::info!(
            new_findings = report.finding_count(),
            skipped = report.skipped.len(),
            "scan comparison complete"
        );
    }
    output_report(&config.output, config.behavior.quiet, report)?;
    Ok(determine_exit_code(&config.behavior, report))
}
