//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[".gemdiff.yaml", ".gemdiff.yml", "gemdiff.yaml", "gemdiff.yml"];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/gemdiff/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path
        && path.exists()
    {
        return Some(path.to_path_buf());
    }

    if let Ok(cwd) = std::env::current_dir()
        && let Some(path) = find_config_in_dir(&cwd)
    {
        return Some(path);
    }

    if let Some(git_root) = find_git_root()
        && let Some(path) = find_config_in_dir(&git_root)
    {
        return Some(path);
    }

    if let Some(config_dir) = dirs::config_dir()
        && let Some(path) = find_config_in_dir(&config_dir.join("gemdiff"))
    {
        return Some(path);
    }

    if let Some(home) = dirs::home_dir()
        && let Some(path) = find_config_in_dir(&home)
    {
        return Some(path);
    }

    None
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from their defaults are taken from `other`.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        if other.diff.ignore_files != defaults.diff.ignore_files {
            self.diff.ignore_files.clone_from(&other.diff.ignore_files);
        }

        if other.scan.rules_path != defaults.scan.rules_path {
            self.scan.rules_path.clone_from(&other.scan.rules_path);
        }

        if other.fetch.gems_dir != defaults.fetch.gems_dir {
            self.fetch.gems_dir.clone_from(&other.fetch.gems_dir);
        }

        if !other.typosquat.enabled {
            self.typosquat.enabled = false;
        }
        self.typosquat
            .extra_popular
            .extend(other.typosquat.extra_popular.iter().cloned());
        self.typosquat
            .allow
            .extend(other.typosquat.allow.iter().cloned());

        if other.output.format != ReportFormat::Auto {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        if other.behavior.fail_on_change {
            self.behavior.fail_on_change = true;
        }
        if other.behavior.fail_on_findings {
            self.behavior.fail_on_findings = true;
        }
        if other.behavior.fail_on_typosquat {
            self.behavior.fail_on_typosquat = true;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# gemdiff configuration file
#
# Place it at:
#   - .gemdiff.yaml in your project root
#   - ~/.config/gemdiff/gemdiff.yaml for global config
#
# CLI arguments always override file settings.

# Directory diff options
diff:
  # Base file names skipped at any depth
  ignore_files:
    - Gemfile.lock
    - .gitignore
    - gem.deps.rb

# Static analysis
scan:
  rules_path: ./semgrep-rules

# Extracted packages live at <gems_dir>/<name>-<version>
fetch:
  gems_dir: /tmp/gems

# Typosquat detection
typosquat:
  enabled: true
  # Extra names treated as popular, e.g. internal gems
  extra_popular: []
  # Candidate names never reported
  allow: []

# Output configuration
output:
  # Format: auto, summary, json
  format: auto
  # Output file path (omit for stdout)
  # file: report.json
  no_color: false

# Behavior flags
behavior:
  # Exit with code 1 if any dependency or file changed
  fail_on_change: false
  # Exit with code 2 if a scan introduced findings
  fail_on_findings: false
  # Exit with code 2 if an added package looks like a typosquat
  fail_on_typosquat: false
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".gemdiff.yaml");
        std::fs::write(&config_path, "scan:\n  rules_path: ./rules\n").unwrap();

        assert_eq!(find_config_in_dir(tmp.path()), Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
diff:
  ignore_files: [Gemfile.lock]
typosquat:
  extra_popular: [internal-billing]
behavior:
  fail_on_typosquat: true
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.diff.ignore_files, vec!["Gemfile.lock"]);
        assert_eq!(config.typosquat.extra_popular, vec!["internal-billing"]);
        assert!(config.typosquat.enabled);
        assert!(config.behavior.fail_on_typosquat);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_invalid_yaml() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("bad.yaml");
        std::fs::write(&config_path, "diff: [unclosed").unwrap();

        assert!(matches!(
            load_config_file(&config_path),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::default();
        base.typosquat.extra_popular.push("from-file".to_string());

        let overrides = AppConfig::builder()
            .rules_path("/opt/rules")
            .output_format(ReportFormat::Json)
            .fail_on_findings(true)
            .build();

        base.merge(&overrides);

        assert_eq!(base.scan.rules_path, PathBuf::from("/opt/rules"));
        assert_eq!(base.output.format, ReportFormat::Json);
        assert!(base.behavior.fail_on_findings);
        assert_eq!(base.typosquat.extra_popular, vec!["from-file"]);
        assert_eq!(base.diff.ignore_files, AppConfig::default().diff.ignore_files);
    }

    #[test]
    fn test_full_example_config_parses() {
        let config: AppConfig = serde_yaml::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(config.diff.ignore_files.len(), 3);
        assert!(config.typosquat.enabled);
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        std::fs::write(&config_path, "behavior:\n  quiet: true\n").unwrap();

        assert_eq!(discover_config_file(Some(&config_path)), Some(config_path));
    }
}
