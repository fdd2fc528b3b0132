//! Golden output tests: the exact summary text for the fixture lockfiles.

use gemdiff::{
    DependencyDiff, ReviewReport, TyposquatDetector, flag_typosquats, parse_lockfile,
    reports::{ReportFormat, create_reporter_with_options},
};
use std::path::Path;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_diff() -> DependencyDiff {
    let dir = Path::new(FIXTURES_DIR);
    let before = parse_lockfile(&dir.join("Gemfile.lock.before")).unwrap();
    let after = parse_lockfile(&dir.join("Gemfile.lock.after")).unwrap();
    DependencyDiff::compute(&before, &after)
}

fn render(report: &ReviewReport) -> String {
    create_reporter_with_options(ReportFormat::Summary, false)
        .generate(report)
        .unwrap()
}

#[test]
fn golden_gemfile_diff_summary() {
    let mut report = ReviewReport::new("gemfile-diff");
    report.dependencies = Some(fixture_diff());

    let expected = "\
Added gems:
  + billing (0.1.0)
    source: vendor/engines/billing (path)
  + rakke (13.1.0)

Removed gems:
  - json (2.6.3)
  - rake (13.0.6)

Version changes:
  ~ nokogiri: 1.15.4-x86_64-linux → 1.15.5-x86_64-linux
  ~ rack: 2.2.7 → 2.2.8
  ~ widget: 0.4.0 → 0.5.0
";
    assert_eq!(render(&report), expected);
}

#[test]
fn golden_typosquat_summary() {
    let mut report = ReviewReport::new("gemfile-diff-typosquat");
    let typosquats = flag_typosquats(&fixture_diff(), TyposquatDetector::builtin());
    let rakke = typosquats.candidates.get("rakke").cloned().unwrap();
    report.typosquats = Some(typosquats);

    let rendered = render(&report);
    let mut expected =
        String::from("Warning: rakke might be a typosquat of these popular packages:\n");
    for name in &rakke {
        expected.push_str(&format!("  - {name}\n"));
    }
    assert!(rendered.contains(&expected), "unexpected output:\n{rendered}");
}

#[test]
fn golden_empty_gemfile_diff() {
    let dir = Path::new(FIXTURES_DIR);
    let snapshot = parse_lockfile(&dir.join("Gemfile.lock.after")).unwrap();

    let mut report = ReviewReport::new("gemfile-diff");
    report.dependencies = Some(DependencyDiff::compute(&snapshot, &snapshot));

    assert_eq!(
        render(&report),
        "No changes found between the Gemfile.lock files\n"
    );
}
