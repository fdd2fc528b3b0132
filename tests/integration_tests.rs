//! Integration tests for gemdiff
//!
//! These tests verify end-to-end functionality of lockfile parsing, the
//! three diffs, typosquat flagging and the diff-then-scan pipeline.

use gemdiff::{
    collaborators::{LocalFetcher, ReportScanner},
    diff::{DependencyDiff, DirectoryDiff, FindingDelta, default_ignore_list},
    matching::{TyposquatDetector, flag_typosquats},
    model::{Finding, SourceKind},
    parsers::{parse_lockfile, parse_semgrep_str},
    pipeline::ScanStage,
};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn fixture_diff() -> DependencyDiff {
    let before = parse_lockfile(&fixture_path("Gemfile.lock.before")).expect("before lockfile");
    let after = parse_lockfile(&fixture_path("Gemfile.lock.after")).expect("after lockfile");
    DependencyDiff::compute(&before, &after)
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn names<'a>(pkgs: impl IntoIterator<Item = &'a gemdiff::PackageRef>) -> Vec<&'a str> {
    pkgs.into_iter().map(|p| p.name.as_str()).collect()
}

// ============================================================================
// Lockfile and Dependency Diff
// ============================================================================

mod dependency_tests {
    use super::*;

    #[test]
    fn test_parse_fixture_sections() {
        let after = parse_lockfile(&fixture_path("Gemfile.lock.after")).unwrap();

        assert_eq!(after.len(), 9);
        assert_eq!(after.get("widget").unwrap().source.kind, SourceKind::Git);
        assert_eq!(after.get("billing").unwrap().source.kind, SourceKind::Path);
        assert_eq!(
            after.get("billing").unwrap().source.url,
            "vendor/engines/billing"
        );
        assert!(after.get("rack").unwrap().is_from_default_registry());
    }

    #[test]
    fn test_fixture_diff_buckets() {
        let diff = fixture_diff();

        assert_eq!(names(diff.added()), vec!["billing", "rakke"]);
        assert_eq!(names(diff.removed()), vec!["json", "rake"]);
        let changed: Vec<&str> = diff
            .version_changes()
            .iter()
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(changed, vec!["nokogiri", "rack", "widget"]);

        let rack = &diff.version_changes()[1];
        assert_eq!(rack.before.version, "2.2.7");
        assert_eq!(rack.after.version, "2.2.8");
    }

    #[test]
    fn test_persisted_diff_round_trip() {
        let diff = fixture_diff();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diff.json");

        diff.save(&path).unwrap();
        let loaded = DependencyDiff::load(&path).unwrap();
        assert_eq!(loaded, diff);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"version_changes\""));
        assert!(text.contains("\n  \"added\""));
    }

    #[test]
    fn test_legacy_document_spelling() {
        let legacy = DependencyDiff::load(&fixture_path("diff_legacy.json")).unwrap();

        assert_eq!(names(legacy.added()), vec!["rakke"]);
        assert_eq!(legacy.added()[0].source.kind, SourceKind::Registry);
        assert_eq!(names(legacy.removed()), vec!["json"]);
        assert_eq!(legacy.version_changes().len(), 1);
        assert_eq!(legacy.version_changes()[0].after.version, "2.2.8");

        let canonical = DependencyDiff::from_json(&legacy.to_json().unwrap()).unwrap();
        assert_eq!(canonical, legacy);
    }

    #[test]
    fn test_self_diff_is_empty() {
        let snapshot = parse_lockfile(&fixture_path("Gemfile.lock.before")).unwrap();
        assert!(!DependencyDiff::compute(&snapshot, &snapshot).has_changes());
    }
}

// ============================================================================
// Risk Flagging
// ============================================================================

mod typosquat_tests {
    use super::*;

    #[test]
    fn test_added_lookalike_is_flagged() {
        let report = flag_typosquats(&fixture_diff(), TyposquatDetector::builtin());

        let resembles = report
            .candidates
            .get("rakke")
            .expect("rakke should be flagged");
        assert!(resembles.contains(&"rake".to_string()));
        // Only added packages are checked
        assert!(!report.candidates.contains_key("rack"));
        assert!(!report.candidates.contains_key("json"));
    }

    #[test]
    fn test_report_document_shape() {
        let report = flag_typosquats(&fixture_diff(), TyposquatDetector::builtin());
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert!(value["possible_typos"]["rakke"].is_array());
    }
}

// ============================================================================
// Directory Diff and Finding Delta
// ============================================================================

mod scan_tests {
    use super::*;

    fn semgrep_json(results: &[(PathBuf, &str, u32, &str)]) -> String {
        let results: Vec<serde_json::Value> = results
            .iter()
            .map(|(path, rule, line, lines)| {
                serde_json::json!({
                    "check_id": rule,
                    "path": path,
                    "start": {"line": line, "col": 1},
                    "end": {"line": line, "col": 10},
                    "extra": {"message": format!("{rule} detected"), "lines": lines, "severity": "WARNING"}
                })
            })
            .collect();
        serde_json::json!({ "results": results, "errors": [] }).to_string()
    }

    #[test]
    fn test_ignored_files_never_reach_the_scanner() {
        let before = tempfile::tempdir().unwrap();
        let after = tempfile::tempdir().unwrap();
        write(before.path(), "Gemfile.lock", "old");
        write(after.path(), "Gemfile.lock", "new");
        write(after.path(), "lib/new.rb", "puts 1");

        let diff =
            DirectoryDiff::compute(before.path(), after.path(), &default_ignore_list()).unwrap();

        assert_eq!(diff.added(), vec!["lib/new.rb"]);
        assert!(diff.changed().is_empty());
        assert_eq!(diff.after_files_to_scan(), vec![after.path().join("lib/new.rb")]);
        assert!(diff.before_files_to_scan().is_empty());
    }

    #[test]
    fn test_finding_delta_from_semgrep_reports() {
        let v1 = PathBuf::from("/scans/rack-2.2.7");
        let v2 = PathBuf::from("/scans/rack-2.2.8");
        let before = parse_semgrep_str(&semgrep_json(&[(
            v1.join("lib/rack/utils.rb"),
            "ruby.lang.security.dangerous-eval",
            10,
            "eval(str)",
        )]))
        .unwrap();
        let after = parse_semgrep_str(&semgrep_json(&[
            (
                v2.join("lib/rack/utils.rb"),
                "ruby.lang.security.dangerous-eval",
                14,
                "eval(str)",
            ),
            (
                v2.join("lib/rack/request.rb"),
                "ruby.lang.security.dangerous-exec",
                3,
                "system(cmd)",
            ),
            (
                PathBuf::from("/elsewhere/x.rb"),
                "ruby.lang.security.dangerous-exec",
                1,
                "exec(x)",
            ),
        ]))
        .unwrap();

        let delta = FindingDelta::compute(&v1, &before, &v2, &after);

        assert_eq!(delta.new_findings.len(), 1);
        let finding: &Finding = &delta.new_findings[0];
        assert_eq!(finding.path, PathBuf::from("lib/rack/request.rb"));
        assert_eq!(finding.rule_id, "ruby.lang.security.dangerous-exec");
        assert_eq!(delta.warnings.len(), 1);
    }

    #[test]
    fn test_version_change_pipeline() {
        let gems = tempfile::tempdir().unwrap();
        let v1 = gems.path().join("rack-2.2.7");
        let v2 = gems.path().join("rack-2.2.8");
        write(&v1, "lib/rack.rb", "module Rack; end");
        write(&v1, "lib/rack/utils.rb", "eval(str)");
        write(&v2, "lib/rack.rb", "module Rack; end");
        write(&v2, "lib/rack/utils.rb", "eval(str)\nsystem(cmd)");
        write(&v2, "lib/rack/extra.rb", "open(path)");

        let before_scanner = ReportScanner::new(
            parse_semgrep_str(&semgrep_json(&[(
                v1.join("lib/rack/utils.rb"),
                "eval",
                1,
                "eval(str)",
            )]))
            .unwrap(),
        );
        let after_scanner = ReportScanner::new(
            parse_semgrep_str(&semgrep_json(&[
                (v2.join("lib/rack/utils.rb"), "eval", 1, "eval(str)"),
                (v2.join("lib/rack/utils.rb"), "exec", 2, "system(cmd)"),
                (v2.join("lib/rack/extra.rb"), "open", 1, "open(path)"),
                // Unchanged file: never requested, so never reported
                (v2.join("lib/rack.rb"), "noise", 1, "module Rack; end"),
            ]))
            .unwrap(),
        );

        let diff = fixture_diff();
        let ignore = default_ignore_list();
        let stage = ScanStage::new(&before_scanner, &after_scanner, Path::new("rules"), &ignore);
        let (scans, skipped) = stage.scan_version_changes(&LocalFetcher::new(gems.path()), &diff);

        // nokogiri and widget are not extracted locally
        let skipped_names: Vec<&str> = skipped.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(skipped_names, vec!["nokogiri", "widget"]);

        assert_eq!(scans.len(), 1);
        let rack = &scans[0];
        assert_eq!(rack.files.changed, vec!["lib/rack/utils.rb"]);
        assert_eq!(rack.files.added, vec!["lib/rack/extra.rb"]);
        let rules: Vec<&str> = rack
            .scan
            .new_findings
            .iter()
            .map(|f| f.rule_id.as_str())
            .collect();
        assert_eq!(rules, vec!["open", "exec"]);
    }
}
