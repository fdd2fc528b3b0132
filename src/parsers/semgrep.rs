//! Decoder for semgrep `--json` reports.
//!
//! Only the fields a [`Finding`] needs are read; everything else in the
//! report (errors, paths scanned, version) is ignored.

use crate::error::{ErrorContext, Result};
use crate::model::Finding;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct RawReport {
    results: Vec<RawResult>,
}

#[derive(Debug, Deserialize)]
struct RawResult {
    check_id: String,
    path: PathBuf,
    start: RawPosition,
    extra: RawExtra,
}

#[derive(Debug, Deserialize)]
struct RawPosition {
    line: u32,
}

#[derive(Debug, Deserialize)]
struct RawExtra {
    message: String,
    lines: String,
}

impl From<RawResult> for Finding {
    fn from(raw: RawResult) -> Self {
        Self {
            rule_id: raw.check_id,
            message: raw.extra.message,
            lines: raw.extra.lines,
            line: raw.start.line,
            path: raw.path,
        }
    }
}

/// Decode a semgrep JSON report.
///
/// A result missing any required field rejects the whole report.
pub fn parse_semgrep_str(content: &str) -> Result<Vec<Finding>> {
    let report: RawReport = serde_json::from_str(content).context("decoding semgrep report")?;
    Ok(report.results.into_iter().map(Finding::from).collect())
}

/// Read and decode a semgrep JSON report from disk.
pub fn parse_semgrep_report(path: &Path) -> Result<Vec<Finding>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading semgrep report {}", path.display()))?;
    parse_semgrep_str(&content).with_context(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GemDiffError;

    const REPORT: &str = r#"{
        "version": "1.50.0",
        "errors": [],
        "results": [
            {
                "check_id": "rules.ruby-eval",
                "path": "/tmp/after/lib/x.rb",
                "start": {"line": 7, "col": 5, "offset": 80},
                "end": {"line": 7, "col": 30, "offset": 105},
                "extra": {"message": "eval detected", "lines": "    eval(input)", "severity": "WARNING"}
            }
        ]
    }"#;

    #[test]
    fn test_parse_report() {
        let findings = parse_semgrep_str(REPORT).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule_id, "rules.ruby-eval");
        assert_eq!(findings[0].line, 7);
        assert_eq!(findings[0].lines, "    eval(input)");
        assert_eq!(findings[0].path, PathBuf::from("/tmp/after/lib/x.rb"));
    }

    #[test]
    fn test_missing_field_rejects_report() {
        let broken = r#"{"results": [{"check_id": "r", "path": "x", "start": {"line": 1}, "extra": {}}]}"#;
        let err = parse_semgrep_str(broken).unwrap_err();
        assert!(matches!(err, GemDiffError::Format { .. }));
    }

    #[test]
    fn test_empty_results() {
        assert!(parse_semgrep_str(r#"{"results": []}"#).unwrap().is_empty());
    }
}
