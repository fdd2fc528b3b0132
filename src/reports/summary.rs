//! Summary report generator.

use super::types::{FileDiffSection, ScanSection, SkippedPackage};
use super::{ReportError, ReportFormat, ReportGenerator, ReviewReport};
use crate::diff::DependencyDiff;
use crate::matching::TyposquatReport;
use crate::model::PackageRef;
use std::fmt::Write;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn paint(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn write_packages(
        &self,
        out: &mut String,
        packages: &[PackageRef],
        show_sources: bool,
    ) -> std::fmt::Result {
        writeln!(out, "Found {} dependencies", packages.len())?;
        for pkg in packages {
            if show_sources {
                writeln!(out, "{pkg} from {}", self.paint(&pkg.source.url, "dim"))?;
            } else {
                writeln!(out, "{pkg}")?;
            }
        }
        Ok(())
    }

    fn write_source(&self, out: &mut String, pkg: &PackageRef) -> std::fmt::Result {
        if !pkg.is_from_default_registry() {
            let line = format!("source: {} ({})", pkg.source.url, pkg.source.kind);
            writeln!(out, "    {}", self.paint(&line, "dim"))?;
        }
        Ok(())
    }

    fn write_dependencies(&self, out: &mut String, diff: &DependencyDiff) -> std::fmt::Result {
        if !diff.has_changes() {
            return writeln!(out, "No changes found between the Gemfile.lock files");
        }

        if !diff.added().is_empty() {
            writeln!(out, "\n{}", self.paint("Added gems:", "bold"))?;
            for pkg in diff.added() {
                writeln!(out, "  {}", self.paint(&format!("+ {pkg}"), "green"))?;
                self.write_source(out, pkg)?;
            }
        }

        if !diff.removed().is_empty() {
            writeln!(out, "\n{}", self.paint("Removed gems:", "bold"))?;
            for pkg in diff.removed() {
                writeln!(out, "  {}", self.paint(&format!("- {pkg}"), "red"))?;
                self.write_source(out, pkg)?;
            }
        }

        if !diff.version_changes().is_empty() {
            writeln!(out, "\n{}", self.paint("Version changes:", "bold"))?;
            for change in diff.version_changes() {
                let line = format!(
                    "~ {}: {} → {}",
                    change.key, change.before.version, change.after.version
                );
                writeln!(out, "  {}", self.paint(&line, "yellow"))?;
                if DependencyDiff::source_changed(change) {
                    writeln!(
                        out,
                        "    source changed: {} ({}) → {} ({})",
                        change.before.source.url,
                        change.before.source.kind,
                        change.after.source.url,
                        change.after.source.kind
                    )?;
                }
            }
        }
        Ok(())
    }

    fn write_file_diff(&self, out: &mut String, section: &FileDiffSection) -> std::fmt::Result {
        if !section.has_changes() {
            return writeln!(out, "\nNo changes found in {}", section.label);
        }

        writeln!(out, "\n{}", self.paint(&format!("Changes in {}:", section.label), "bold"))?;
        for (title, files, marker, color) in [
            ("Added files:", &section.added, '+', "green"),
            ("Removed files:", &section.removed, '-', "red"),
            ("Modified files:", &section.changed, '~', "yellow"),
        ] {
            if files.is_empty() {
                continue;
            }
            writeln!(out, "\n{title}")?;
            for file in files {
                writeln!(out, "  {}", self.paint(&format!("{marker} {file}"), color))?;
            }
        }
        Ok(())
    }

    fn write_scan(&self, out: &mut String, scan: &ScanSection) -> std::fmt::Result {
        for warning in &scan.warnings {
            let line = format!("warning: skipped finding: {}", warning.message);
            writeln!(out, "  {}", self.paint(&line, "yellow"))?;
        }

        if scan.new_findings.is_empty() {
            return writeln!(out, "\n{}: no new issues found", scan.label);
        }

        let heading = format!(
            "Found {} new issues in {}:",
            scan.new_findings.len(),
            scan.label
        );
        writeln!(out, "\n{}", self.paint(&heading, "red"))?;
        for finding in &scan.new_findings {
            writeln!(out, "\n{}", self.paint(&finding.path.display().to_string(), "dim"))?;
            writeln!(out, "{finding}")?;
        }
        Ok(())
    }

    fn write_typosquats(&self, out: &mut String, report: &TyposquatReport) -> std::fmt::Result {
        if report.is_empty() {
            return writeln!(out, "\nNo potential typosquatting issues found!");
        }
        for (candidate, resembles) in &report.candidates {
            let line =
                format!("Warning: {candidate} might be a typosquat of these popular packages:");
            writeln!(out, "\n{}", self.paint(&line, "red"))?;
            for name in resembles {
                writeln!(out, "  - {name}")?;
            }
        }
        Ok(())
    }

    fn write_skipped(&self, out: &mut String, skipped: &[SkippedPackage]) -> std::fmt::Result {
        writeln!(out, "\n{}", self.paint("Skipped packages:", "yellow"))?;
        for pkg in skipped {
            writeln!(out, "  ! {}: {}", pkg.name, pkg.reason)?;
        }
        Ok(())
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, report: &ReviewReport) -> Result<String, ReportError> {
        let mut out = String::new();

        if let Some(packages) = &report.packages {
            self.write_packages(&mut out, packages, report.show_sources)?;
        }
        if let Some(diff) = &report.dependencies {
            self.write_dependencies(&mut out, diff)?;
        }
        for section in &report.file_diffs {
            self.write_file_diff(&mut out, section)?;
        }
        for scan in &report.scans {
            self.write_scan(&mut out, scan)?;
        }
        if let Some(typosquats) = &report.typosquats {
            self.write_typosquats(&mut out, typosquats)?;
        }
        if !report.skipped.is_empty() {
            self.write_skipped(&mut out, &report.skipped)?;
        }

        if out.trim().is_empty() {
            out = "Nothing to report\n".to_string();
        }
        Ok(out.trim_start_matches('\n').to_string())
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
