//! Default values and presets for gemdiff.

use super::types::{AppConfig, BehaviorConfig, OutputConfig};
use crate::reports::ReportFormat;
use std::path::PathBuf;

/// Rule set handed to the scanner when none is configured.
pub const DEFAULT_RULES_PATH: &str = "./semgrep-rules";

/// Directory holding extracted `<name>-<version>` package trees.
#[must_use]
pub fn default_gems_dir() -> PathBuf {
    std::env::temp_dir().join("gems")
}

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Human-readable output, never fails on findings
    Default,
    /// Machine-readable output, fails on every risk signal
    Ci,
}

impl ConfigPreset {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ci => "ci",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "ci" | "ci-cd" | "pipeline" => Some(Self::Ci),
            _ => None,
        }
    }
}

impl AppConfig {
    /// Build a configuration from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Ci => Self {
                output: OutputConfig {
                    format: ReportFormat::Json,
                    no_color: true,
                    ..OutputConfig::default()
                },
                behavior: BehaviorConfig {
                    fail_on_change: false,
                    fail_on_findings: true,
                    fail_on_typosquat: true,
                    quiet: true,
                },
                ..Self::default()
            },
        }
    }
}
