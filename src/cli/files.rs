//! Directory diff commands.

use crate::collaborators::{Fetcher, LocalFetcher};
use crate::config::AppConfig;
use crate::diff::DirectoryDiff;
use crate::model::{PackageRef, Source};
use crate::pipeline::{PipelineError, determine_exit_code, output_report};
use crate::reports::{FileDiffSection, ReviewReport};
use anyhow::Result;
use std::path::Path;

/// Diff two extracted versions of a package found under the configured
/// gems directory.
pub fn run_gem_diff(config: &AppConfig, name: &str, before: &str, after: &str) -> Result<i32> {
    let fetcher = LocalFetcher::new(&config.fetch.gems_dir);
    let before = PackageRef::new(name, before, Source::default());
    let after = PackageRef::new(name, after, Source::default());

    let fetch = |pkg: &PackageRef| {
        fetcher.fetch(pkg).map_err(|source| PipelineError::FetchFailed {
            package: pkg.to_string(),
            source,
        })
    };
    let before_root = fetch(&before)?;
    let after_root = fetch(&after)?;

    let label = format!("{name} {} → {}", before.version, after.version);
    run_directory_diff(config, "gem-diff", &label, &before_root, &after_root)
}

/// Diff two arbitrary directory trees.
pub fn run_dir_diff(config: &AppConfig, before: &Path, after: &Path) -> Result<i32> {
    let label = format!("{} → {}", before.display(), after.display());
    run_directory_diff(config, "dir-diff", &label, before, after)
}

fn run_directory_diff(
    config: &AppConfig,
    command: &str,
    label: &str,
    before: &Path,
    after: &Path,
) -> Result<i32> {
    let diff = DirectoryDiff::compute(before, after, &config.diff.ignore_files).map_err(
        |source| PipelineError::DiffFailed {
            label: label.to_string(),
            source,
        },
    )?;
    if !config.behavior.quiet {
        tracing::info!(
            added = diff.added().len(),
            removed = diff.removed().len(),
            changed = diff.changed().len(),
            "compared {label}"
        );
    }

    let mut report = ReviewReport::new(command);
    report.file_diffs.push(FileDiffSection::from_diff(label, &diff));

    output_report(&config.output, config.behavior.quiet, &report)?;
    Ok(determine_exit_code(&config.behavior, &report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::exit_codes;
    use crate::reports::ReportFormat;

    fn config_for(gems_dir: &Path) -> AppConfig {
        AppConfig::builder()
            .gems_dir(gems_dir)
            .output_format(ReportFormat::Json)
            .output_file(Some(gems_dir.join("report.json")))
            .fail_on_change(true)
            .quiet(true)
            .build()
    }

    #[test]
    fn test_gem_diff_detects_changes() {
        let gems = tempfile::tempdir().unwrap();
        let v1 = gems.path().join("rack-1.0.0");
        let v2 = gems.path().join("rack-1.1.0");
        std::fs::create_dir_all(&v1).unwrap();
        std::fs::create_dir_all(&v2).unwrap();
        std::fs::write(v1.join("rack.rb"), "one").unwrap();
        std::fs::write(v2.join("rack.rb"), "two").unwrap();

        let config = config_for(gems.path());
        let code = run_gem_diff(&config, "rack", "1.0.0", "1.1.0").unwrap();
        assert_eq!(code, exit_codes::CHANGES_DETECTED);

        let report: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(gems.path().join("report.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(report["file_diffs"][0]["changed"][0], "rack.rb");
    }

    #[test]
    fn test_gem_diff_missing_version_fails() {
        let gems = tempfile::tempdir().unwrap();
        let config = config_for(gems.path());
        let err = run_gem_diff(&config, "rack", "1.0.0", "1.1.0").unwrap_err();
        assert!(err.to_string().contains("rack (1.0.0)"));
    }

    #[test]
    fn test_dir_diff_identical_trees() {
        let before = tempfile::tempdir().unwrap();
        let after = tempfile::tempdir().unwrap();
        std::fs::write(before.path().join("a.rb"), "same").unwrap();
        std::fs::write(after.path().join("a.rb"), "same").unwrap();

        let out = tempfile::tempdir().unwrap();
        let config = config_for(out.path());
        assert_eq!(
            run_dir_diff(&config, before.path(), after.path()).unwrap(),
            exit_codes::SUCCESS
        );
    }
}
