//! Report generation for review results.
//!
//! Two output formats are supported:
//! - Summary: line-oriented text for terminals and logs
//! - JSON: structured data for programmatic integration
//!
//! Every command collects its results into a [`ReviewReport`] and hands
//! it to a [`ReportGenerator`].

mod json;
mod summary;
mod types;

pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::{FileDiffSection, ReportFormat, ReviewReport, ScanSection, SkippedPackage};

use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render the report
    fn generate(&self, report: &ReviewReport) -> Result<String, ReportError>;

    /// Write the rendered report to a writer
    fn write_report(
        &self,
        report: &ReviewReport,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let rendered = self.generate(report)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_formats() {
        assert_eq!(create_reporter(ReportFormat::Json).format(), ReportFormat::Json);
        assert_eq!(create_reporter(ReportFormat::Summary).format(), ReportFormat::Summary);
        assert_eq!(create_reporter(ReportFormat::Auto).format(), ReportFormat::Summary);
    }

    #[test]
    fn test_write_report_to_buffer() {
        let reporter = create_reporter_with_options(ReportFormat::Summary, false);
        let mut buf = Vec::new();
        reporter
            .write_report(&ReviewReport::new("gemfile-diff"), &mut buf)
            .unwrap();
        assert!(!buf.is_empty());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(ReportFormat::Auto.to_string(), "auto");
        assert_eq!(ReportFormat::Json.to_string(), "json");
    }
}
