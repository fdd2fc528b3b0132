//! Lockfile commands: listing, dependency diff and typosquat checks.

use super::build_detector;
use crate::config::AppConfig;
use crate::diff::DependencyDiff;
use crate::matching::{TyposquatReport, flag_typosquats};
use crate::pipeline::{
    determine_exit_code, load_diff_with_context, output_report, parse_lockfile_with_context,
};
use crate::reports::ReviewReport;
use anyhow::{Context, Result};
use std::path::Path;

/// List every pinned package of one lockfile, sorted by name.
pub fn run_gems(config: &AppConfig, lockfile: &Path, show_source: bool) -> Result<i32> {
    let snapshot = parse_lockfile_with_context(lockfile, config.behavior.quiet)?;

    let mut report = ReviewReport::new("gems");
    report.packages = Some(snapshot.sorted().into_iter().cloned().collect());
    report.show_sources = show_source;

    output_report(&config.output, config.behavior.quiet, &report)?;
    Ok(determine_exit_code(&config.behavior, &report))
}

/// Diff two lockfiles, optionally persisting the diff document.
pub fn run_gemfile_diff(
    config: &AppConfig,
    before: &Path,
    after: &Path,
    save_to: Option<&Path>,
) -> Result<i32> {
    let quiet = config.behavior.quiet;
    let before = parse_lockfile_with_context(before, quiet)?;
    let after = parse_lockfile_with_context(after, quiet)?;
    let diff = DependencyDiff::compute(&before, &after);
    for pkg in diff.added_from_other_sources() {
        tracing::warn!(package = %pkg, source = %pkg.source, "added from a non-default source");
    }

    if let Some(path) = save_to {
        diff.save(path)
            .with_context(|| format!("failed to save diff to {}", path.display()))?;
    }

    let mut report = ReviewReport::new("gemfile-diff");
    report.dependencies = Some(diff);

    output_report(&config.output, quiet, &report)?;
    Ok(determine_exit_code(&config.behavior, &report))
}

/// Check the packages a persisted diff adds for typosquats.
pub fn run_gemfile_diff_typosquat(
    config: &AppConfig,
    diff_path: &Path,
    save_to: Option<&Path>,
) -> Result<i32> {
    let quiet = config.behavior.quiet;
    let diff = load_diff_with_context(diff_path, quiet)?;

    let typosquats = if config.typosquat.enabled {
        flag_typosquats(&diff, &build_detector(&config.typosquat))
    } else {
        tracing::warn!("typosquat detection disabled by configuration");
        TyposquatReport::default()
    };

    if let Some(path) = save_to {
        typosquats
            .save(path)
            .with_context(|| format!("failed to save typosquat report to {}", path.display()))?;
    }

    let mut report = ReviewReport::new("gemfile-diff-typosquat");
    report.typosquats = Some(typosquats);

    output_report(&config.output, quiet, &report)?;
    Ok(determine_exit_code(&config.behavior, &report))
}

/// Check arbitrary names against the popular-gem corpus.
pub fn run_typosquat(config: &AppConfig, names: &[String]) -> Result<i32> {
    let typosquats: TyposquatReport = if config.typosquat.enabled {
        let detector = build_detector(&config.typosquat);
        names
            .iter()
            .filter_map(|name| detector.check(name))
            .collect()
    } else {
        tracing::warn!("typosquat detection disabled by configuration");
        TyposquatReport::default()
    };

    let mut report = ReviewReport::new("typosquat");
    report.typosquats = Some(typosquats);

    output_report(&config.output, config.behavior.quiet, &report)?;
    Ok(determine_exit_code(&config.behavior, &report))
}
