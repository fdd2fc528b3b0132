//! Configuration validation for gemdiff.

use super::types::{
    AppConfig, BehaviorConfig, DiffConfig, FetchConfig, OutputConfig, ScanConfig, TyposquatConfig,
};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.diff.validate());
        errors.extend(self.scan.validate());
        errors.extend(self.fetch.validate());
        errors.extend(self.typosquat.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for DiffConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for name in &self.ignore_files {
            if name.trim().is_empty() {
                errors.push(ConfigError::new(
                    "diff.ignore_files",
                    "Ignore entries must not be empty",
                ));
            } else if name.contains('/') || name.contains('\\') {
                errors.push(ConfigError::new(
                    "diff.ignore_files",
                    format!("'{name}' contains a path separator; entries match base names only"),
                ));
            }
        }
        errors
    }
}

impl Validatable for ScanConfig {
    fn validate(&self) -> Vec<ConfigError> {
        if self.rules_path.as_os_str().is_empty() {
            vec![ConfigError::new("scan.rules_path", "Rules path must not be empty")]
        } else {
            Vec::new()
        }
    }
}

impl Validatable for FetchConfig {
    fn validate(&self) -> Vec<ConfigError> {
        if self.gems_dir.as_os_str().is_empty() {
            vec![ConfigError::new("fetch.gems_dir", "Gems directory must not be empty")]
        } else {
            Vec::new()
        }
    }
}

impl Validatable for TyposquatConfig {
    fn validate(&self) -> Vec<ConfigError> {
        self.extra_popular
            .iter()
            .chain(&self.allow)
            .filter(|name| name.is_empty() || name.chars().any(char::is_whitespace))
            .map(|name| {
                ConfigError::new(
                    "typosquat",
                    format!("Invalid package name '{name}': must be non-empty without whitespace"),
                )
            })
            .collect()
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(parent) = self.file.as_deref().and_then(std::path::Path::parent)
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            errors.push(ConfigError::new(
                "output.file",
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }
        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_ignore_entries_are_base_names() {
        let config = DiffConfig {
            ignore_files: vec![String::new(), "lib/x.rb".to_string(), "ok.rb".to_string()],
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.field == "diff.ignore_files"));
    }

    #[test]
    fn test_empty_rules_path() {
        let config = ScanConfig {
            rules_path: PathBuf::new(),
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_typosquat_names() {
        let config = TyposquatConfig {
            extra_popular: vec!["good".to_string(), "bad name".to_string()],
            allow: vec![String::new()],
            ..TyposquatConfig::default()
        };
        assert_eq!(config.validate().len(), 2);
    }

    #[test]
    fn test_output_parent_must_exist() {
        let config = OutputConfig {
            file: Some(PathBuf::from("/nonexistent/gemdiff/dir/report.json")),
            ..OutputConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "output.file");

        let relative = OutputConfig {
            file: Some(PathBuf::from("report.json")),
            ..OutputConfig::default()
        };
        assert!(relative.is_valid());
    }
}
