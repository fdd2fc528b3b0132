//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator, ReviewReport};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, report: &ReviewReport) -> Result<String, ReportError> {
        let document = JsonReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: "gemdiff".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                generated_at: Utc::now().to_rfc3339(),
                command: report.command.clone(),
            },
            summary: JsonSummary {
                has_changes: report.has_changes(),
                new_findings: report.finding_count(),
                possible_typosquats: report
                    .typosquats
                    .as_ref()
                    .map_or(0, |t| t.candidates.len()),
                skipped_packages: report.skipped.len(),
            },
            report,
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };
        rendered.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: JsonReportMetadata,
    summary: JsonSummary,
    #[serde(flatten)]
    report: &'a ReviewReport,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    command: String,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[derive(Serialize)]
struct JsonSummary {
    has_changes: bool,
    new_findings: usize,
    possible_typosquats: usize,
    skipped_packages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DependencyDiff;
    use crate::model::{DependencySnapshot, PackageRef, Source};

    #[test]
    fn test_metadata_and_sections() {
        let before = DependencySnapshot::new();
        let after: DependencySnapshot = [PackageRef::new("rack", "3.0.0", Source::default())]
            .into_iter()
            .collect();
        let mut report = ReviewReport::new("gemfile-diff");
        report.dependencies = Some(DependencyDiff::compute(&before, &after));

        let json = JsonReporter::new().generate(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metadata"]["tool"]["name"], "gemdiff");
        assert_eq!(value["metadata"]["command"], "gemfile-diff");
        assert_eq!(value["summary"]["has_changes"], true);
        assert_eq!(value["dependencies"]["added"][0]["name"], "rack");
        assert_eq!(value["dependencies"]["added"][0]["source"]["type"], "registry");
        assert!(value.get("scans").is_none());
        assert!(value.get("typosquats").is_none());
    }

    #[test]
    fn test_compact_output() {
        let json = JsonReporter::new()
            .pretty(false)
            .generate(&ReviewReport::new("typosquat"))
            .unwrap();
        assert!(!json.contains('\n'));
    }
}
