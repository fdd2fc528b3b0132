//! Configuration types for gemdiff operations.

use super::defaults::{DEFAULT_RULES_PATH, default_gems_dir};
use crate::diff::default_ignore_list;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are merged over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Directory diff options
    pub diff: DiffConfig,
    /// Static-analysis options
    pub scan: ScanConfig,
    /// Where extracted packages are found
    pub fetch: FetchConfig,
    /// Typosquat detection options
    pub typosquat: TyposquatConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Replace the ignore list.
    pub fn ignore_files(mut self, files: Vec<String>) -> Self {
        self.config.diff.ignore_files = files;
        self
    }

    pub fn rules_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.scan.rules_path = path.into();
        self
    }

    pub fn gems_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.fetch.gems_dir = dir.into();
        self
    }

    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_change = fail;
        self
    }

    pub const fn fail_on_findings(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_findings = fail;
        self
    }

    pub const fn fail_on_typosquat(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_typosquat = fail;
        self
    }

    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Directory diff options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DiffConfig {
    /// Base file names excluded from directory diffs at any depth
    pub ignore_files: Vec<String>,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            ignore_files: default_ignore_list(),
        }
    }
}

/// Static-analysis options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScanConfig {
    /// Rule set handed to the scanner
    pub rules_path: PathBuf,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            rules_path: PathBuf::from(DEFAULT_RULES_PATH),
        }
    }
}

/// Location of extracted packages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FetchConfig {
    /// Directory holding `<name>-<version>` trees
    pub gems_dir: PathBuf,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            gems_dir: default_gems_dir(),
        }
    }
}

/// Typosquat detection options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TyposquatConfig {
    /// Run typosquat detection where a command supports it
    pub enabled: bool,
    /// Names added to the built-in popular-gem corpus
    pub extra_popular: Vec<String>,
    /// Candidate names never reported
    pub allow: Vec<String>,
}

impl Default for TyposquatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            extra_popular: Vec::new(),
            allow: Vec::new(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    pub no_color: bool,
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 if any dependency or file changed
    pub fail_on_change: bool,
    /// Exit with code 2 if a scan introduced findings
    pub fail_on_findings: bool,
    /// Exit with code 2 if an added package looks like a typosquat
    pub fail_on_typosquat: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}
