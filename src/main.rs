//! gemdiff: supply-chain review for Ruby gem upgrades
//!
//! Diffs lockfiles, extracted gem trees and static-analysis results so a
//! reviewer only looks at what an upgrade actually changed.

#![allow(clippy::struct_excessive_bools, clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use gemdiff::{
    cli::{self, ScanReports},
    GemDiffError, OptionContext,
    config::{
        AppConfig, AppConfigBuilder, CONFIG_FILE_NAMES, ConfigPreset, Validatable,
        discover_config_file, generate_full_example_config, generate_json_schema, load_or_default,
    },
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gemdiff")]
#[command(version)]
#[command(about = "Review what a Ruby gem upgrade actually changed", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Nothing the fail flags ask to fail on
    1  Changes detected (with --fail-on-change)
    2  New findings or typosquat candidates (with --fail-on-findings / --fail-on-typosquat)
    3  Error occurred

EXAMPLES:
    # What changed between two lockfiles, persisted for later steps
    gemdiff gemfile-diff Gemfile.lock.orig Gemfile.lock --save diff.json

    # Flag newly added gems that imitate popular names
    gemdiff gemfile-diff-typosquat diff.json --fail-on-typosquat

    # Scan only the files an upgrade touched
    gemdiff gemfile-diff-scan diff.json --before-report old.json --after-report new.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "GEMDIFF_CONFIG")]
    config: Option<PathBuf>,

    /// Configuration preset applied before the config file (default, ci)
    #[arg(long, global = true, default_value = "default")]
    preset: String,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Shared argument groups
// ============================================================================

/// Output options shared by every reporting command
#[derive(Args)]
struct OutputArgs {
    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if anything changed
    #[arg(long)]
    fail_on_change: bool,
}

impl OutputArgs {
    fn apply(&self, builder: AppConfigBuilder) -> AppConfigBuilder {
        let builder = builder
            .output_file(self.output_file.clone())
            .fail_on_change(self.fail_on_change);
        match self.output {
            Some(format) => builder.output_format(format),
            None => builder,
        }
    }
}

/// Scanner inputs shared by the scanning commands
#[derive(Args)]
struct ScanArgs {
    /// Semgrep JSON report covering the older tree(s)
    #[arg(long)]
    before_report: PathBuf,

    /// Semgrep JSON report covering the newer tree(s)
    #[arg(long)]
    after_report: PathBuf,

    /// Rule set path recorded with each scan
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Exit with code 2 if a scan introduced findings
    #[arg(long)]
    fail_on_findings: bool,
}

impl ScanArgs {
    fn apply(&self, builder: AppConfigBuilder) -> AppConfigBuilder {
        let builder = builder.fail_on_findings(self.fail_on_findings);
        match &self.rules {
            Some(rules) => builder.rules_path(rules),
            None => builder,
        }
    }

    fn reports(&self) -> ScanReports {
        ScanReports {
            before: self.before_report.clone(),
            after: self.after_report.clone(),
        }
    }
}

/// Location of extracted packages
#[derive(Args)]
struct FetchArgs {
    /// Directory holding extracted `<name>-<version>` trees
    #[arg(long, env = "GEMDIFF_GEMS_DIR")]
    gems_dir: Option<PathBuf>,
}

impl FetchArgs {
    fn apply(&self, builder: AppConfigBuilder) -> AppConfigBuilder {
        match &self.gems_dir {
            Some(dir) => builder.gems_dir(dir),
            None => builder,
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

#[derive(Subcommand)]
enum Commands {
    /// List all gems pinned by a Gemfile.lock
    Gems {
        lockfile: PathBuf,

        /// Show the source URL of each gem
        #[arg(short, long)]
        show_source: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compare two Gemfile.lock files
    GemfileDiff {
        before: PathBuf,
        after: PathBuf,

        /// Persist the diff document for later commands
        #[arg(short, long)]
        save: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check gems added by a persisted diff for typosquatting
    GemfileDiffTyposquat {
        diff: PathBuf,

        /// Write the `possible_typos` document to a file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Exit with code 2 if a candidate is found
        #[arg(long)]
        fail_on_typosquat: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check gem names against the popular-gem corpus
    Typosquat {
        #[arg(required = true)]
        names: Vec<String>,

        /// Exit with code 2 if a candidate is found
        #[arg(long)]
        fail_on_typosquat: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compare two extracted versions of a gem
    GemDiff {
        name: String,
        before: String,
        after: String,

        #[command(flatten)]
        fetch: FetchArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compare two directory trees
    DirDiff {
        before: PathBuf,
        after: PathBuf,

        /// Base file names to skip (replaces the configured list)
        #[arg(long = "ignore", value_name = "NAME")]
        ignore: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compare two versions of a gem and report findings new in changed files
    GemDiffScan {
        name: String,
        before: String,
        after: String,

        #[command(flatten)]
        fetch: FetchArgs,

        #[command(flatten)]
        scan: ScanArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Scan every version change of a persisted diff
    GemfileDiffScan {
        diff: PathBuf,

        #[command(flatten)]
        fetch: FetchArgs,

        #[command(flatten)]
        scan: ScanArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compare two whole-tree scan reports
    ScanDiff {
        /// Root the older report was taken over
        #[arg(long)]
        before_dir: PathBuf,

        /// Root the newer report was taken over
        #[arg(long)]
        after_dir: PathBuf,

        #[command(flatten)]
        scan: ScanArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from preset + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .gemdiff.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();
    let log = Logging::init(&cli);

    match run(cli, &log) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Log filter installed before the config is known, tightened once it is.
struct Logging {
    filter: reload::Handle<EnvFilter, Registry>,
    /// `RUST_LOG`, `--verbose` or `--quiet` already fixed the level
    pinned: bool,
}

impl Logging {
    fn init(cli: &Cli) -> Self {
        let env = std::env::var("RUST_LOG").ok();
        let pinned = env.is_some() || cli.verbose || cli.quiet;
        let log_level = if cli.verbose {
            "debug"
        } else if cli.quiet {
            "warn"
        } else {
            "info"
        };

        // Logs go to stderr so stdout stays machine-readable
        let (filter, handle) =
            reload::Layer::new(EnvFilter::new(env.unwrap_or_else(|| log_level.to_string())));
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(io::stderr),
            )
            .init();

        Self {
            filter: handle,
            pinned,
        }
    }

    /// Apply the quietness of the resolved config (preset or file).
    fn apply(&self, config: &AppConfig) {
        if let Some(directive) = quiet_directive(config, self.pinned)
            && let Err(e) = self.filter.modify(|f| *f = EnvFilter::new(directive))
        {
            eprintln!("Warning: failed to adjust log level: {e}");
        }
    }
}

/// Filter directive a resolved config asks for, unless the level is pinned.
fn quiet_directive(config: &AppConfig, pinned: bool) -> Option<&'static str> {
    (!pinned && config.behavior.quiet).then_some("warn")
}

fn run(cli: Cli, log: &Logging) -> Result<i32> {
    match &cli.command {
        Commands::Gems {
            lockfile,
            show_source,
            output,
        } => {
            let config = resolve_config(&cli, log, |b| output.apply(b))?;
            cli::run_gems(&config, lockfile, *show_source)
        }

        Commands::GemfileDiff {
            before,
            after,
            save,
            output,
        } => {
            let config = resolve_config(&cli, log, |b| output.apply(b))?;
            cli::run_gemfile_diff(&config, before, after, save.as_deref())
        }

        Commands::GemfileDiffTyposquat {
            diff,
            save,
            fail_on_typosquat,
            output,
        } => {
            let config =
                resolve_config(&cli, log, |b| output.apply(b).fail_on_typosquat(*fail_on_typosquat))?;
            cli::run_gemfile_diff_typosquat(&config, diff, save.as_deref())
        }

        Commands::Typosquat {
            names,
            fail_on_typosquat,
            output,
        } => {
            let config =
                resolve_config(&cli, log, |b| output.apply(b).fail_on_typosquat(*fail_on_typosquat))?;
            cli::run_typosquat(&config, names)
        }

        Commands::GemDiff {
            name,
            before,
            after,
            fetch,
            output,
        } => {
            let config = resolve_config(&cli, log, |b| fetch.apply(output.apply(b)))?;
            cli::run_gem_diff(&config, name, before, after)
        }

        Commands::DirDiff {
            before,
            after,
            ignore,
            output,
        } => {
            let config = resolve_config(&cli, log, |b| {
                let b = output.apply(b);
                if ignore.is_empty() {
                    b
                } else {
                    b.ignore_files(ignore.clone())
                }
            })?;
            cli::run_dir_diff(&config, before, after)
        }

        Commands::GemDiffScan {
            name,
            before,
            after,
            fetch,
            scan,
            output,
        } => {
            let config = resolve_config(&cli, log, |b| scan.apply(fetch.apply(output.apply(b))))?;
            cli::run_gem_diff_scan(&config, name, before, after, &scan.reports())
        }

        Commands::GemfileDiffScan {
            diff,
            fetch,
            scan,
            output,
        } => {
            let config = resolve_config(&cli, log, |b| scan.apply(fetch.apply(output.apply(b))))?;
            cli::run_gemfile_diff_scan(&config, diff, &scan.reports())
        }

        Commands::ScanDiff {
            before_dir,
            after_dir,
            scan,
            output,
        } => {
            let config = resolve_config(&cli, log, |b| scan.apply(output.apply(b)))?;
            cli::run_scan_diff(&config, before_dir, after_dir, &scan.reports())
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "gemdiff", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => run_config_action(&cli, log, action),
    }
}

fn run_config_action(cli: &Cli, log: &Logging, action: &ConfigAction) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            let config = resolve_config(cli, log, |b| b)?;
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir()
                    .ok()
                    .map(|p| p.display().to_string()),
                dirs::config_dir().map(|p| p.join("gemdiff").display().to_string()),
                dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match discover_config_file(cli.config.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".gemdiff.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, generate_full_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(exit_codes::SUCCESS)
}

/// Layer preset, config file and command-line overrides, in that order,
/// and reject invalid results.
fn resolve_config(
    cli: &Cli,
    log: &Logging,
    overrides: impl FnOnce(AppConfigBuilder) -> AppConfigBuilder,
) -> Result<AppConfig> {
    let preset = ConfigPreset::from_name(&cli.preset).context_none(format!(
        "unknown preset '{}' (expected default or ci)",
        cli.preset
    ))?;
    let mut config = AppConfig::from_preset(preset);

    let (file_config, loaded_from) = load_or_default(cli.config.as_deref());
    if let Some(path) = &loaded_from {
        tracing::debug!(path = %path.display(), "loaded config file");
    }
    config.merge(&file_config);

    let cli_config = overrides(
        AppConfig::builder()
            .no_color(cli.no_color)
            .quiet(cli.quiet),
    )
    .build();
    config.merge(&cli_config);

    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(GemDiffError::config(messages.join("; ")).into());
    }
    log.apply(&config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ci_preset_quiets_logging() {
        let config = AppConfig::from_preset(ConfigPreset::Ci);
        assert_eq!(quiet_directive(&config, false), Some("warn"));
    }

    #[test]
    fn test_pinned_level_is_kept() {
        let config = AppConfig::from_preset(ConfigPreset::Ci);
        assert_eq!(quiet_directive(&config, true), None);
        assert_eq!(
            quiet_directive(&AppConfig::from_preset(ConfigPreset::Default), false),
            None
        );
    }
}
