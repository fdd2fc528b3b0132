//! Report output stage.

use super::{OutputTarget, PipelineError, should_use_color, write_output};
use crate::config::OutputConfig;
use crate::reports::{ReviewReport, create_reporter_with_options};

/// Render `report` in the configured format and write it to the
/// configured destination.
pub fn output_report(
    output: &OutputConfig,
    quiet: bool,
    report: &ReviewReport,
) -> Result<(), PipelineError> {
    let target = OutputTarget::from_option(output.file.clone());
    let use_color = should_use_color(output.no_color, &target);
    let reporter = create_reporter_with_options(output.format, use_color);

    let rendered = reporter
        .generate(report)
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;
    write_output(&rendered, &target, quiet).map_err(|source| PipelineError::ReportFailed { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;

    #[test]
    fn test_json_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let output = OutputConfig {
            format: ReportFormat::Json,
            file: Some(path.clone()),
            no_color: false,
        };

        output_report(&output, true, &ReviewReport::new("typosquat")).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["metadata"]["command"], "typosquat");
    }
}
