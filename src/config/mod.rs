//! Configuration module for gemdiff.
//!
//! - Type-safe configuration structures with validation
//! - Named presets (`default`, `ci`)
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.gemdiff.yaml` file in your project root or `~/.config/gemdiff/`:
//!
//! ```yaml
//! diff:
//!   ignore_files: [Gemfile.lock, .gitignore, gem.deps.rb]
//! typosquat:
//!   extra_popular: [internal-billing]
//! behavior:
//!   fail_on_typosquat: true
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{ConfigPreset, DEFAULT_RULES_PATH, default_gems_dir};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, DiffConfig, FetchConfig, OutputConfig,
    ScanConfig, TyposquatConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    CONFIG_FILE_NAMES, ConfigFileError, discover_config_file, generate_full_example_config, load_config_file,
    load_or_default,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and complete `.gemdiff.yaml` files.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}
