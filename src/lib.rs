//! **Differential supply-chain review for Ruby gem upgrades.**
//!
//! `gemdiff` answers one question for a dependency upgrade: what actually
//! changed, and does any of it look dangerous? Every check is a diff of two
//! snapshots, so a reviewer only looks at the delta.
//!
//! ## Core Concepts & Modules
//!
//! - **[`parsers`]**: reads `Gemfile.lock` files into a [`DependencySnapshot`]
//!   and semgrep JSON reports into [`Finding`]s.
//! - **[`diff`]**: one set-reconciliation engine ([`diff::reconcile`]) behind
//!   three diffs: [`DependencyDiff`] (lockfile to lockfile), [`DirectoryDiff`]
//!   (extracted tree to extracted tree, by SHA-256 content fingerprint) and
//!   [`FindingDelta`] (scan to scan).
//! - **[`matching`]**: the [`TyposquatDetector`] and risk flagging of newly
//!   added packages.
//! - **[`collaborators`]**: the [`Fetcher`](collaborators::Fetcher) and
//!   [`Scanner`](collaborators::Scanner) seams to the outside world.
//! - **[`pipeline`]** and **[`reports`]**: orchestration and output used by
//!   the `gemdiff` binary.
//!
//! ## Diffing Two Lockfiles
//!
//! ```no_run
//! use std::path::Path;
//! use gemdiff::{DependencyDiff, parse_lockfile};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let before = parse_lockfile(Path::new("Gemfile.lock.orig"))?;
//!     let after = parse_lockfile(Path::new("Gemfile.lock"))?;
//!
//!     let diff = DependencyDiff::compute(&before, &after);
//!     for pkg in diff.added() {
//!         println!("+ {pkg}");
//!     }
//!     diff.save(Path::new("diff.json"))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Checking New Packages for Typosquats
//!
//! ```no_run
//! use std::path::Path;
//! use gemdiff::{DependencyDiff, TyposquatDetector, flag_typosquats};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let diff = DependencyDiff::load(Path::new("diff.json"))?;
//!     let report = flag_typosquats(&diff, TyposquatDetector::builtin());
//!     for (candidate, resembles) in &report.candidates {
//!         println!("{candidate} resembles {}", resembles.join(", "));
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod collaborators;
pub mod config;
pub mod diff;
pub mod error;
pub mod matching;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, ConfigPreset, Validatable};
pub use diff::{ChangeSet, DependencyDiff, DirectoryDiff, FindingDelta, reconcile};
pub use error::{ErrorContext, GemDiffError, OptionContext, Result};
pub use matching::{TyposquatDetector, TyposquatReport, flag_typosquats};
pub use model::{DependencySnapshot, Finding, FingerprintIndex, PackageRef, Source, SourceKind};
pub use parsers::{parse_lockfile, parse_lockfile_str, parse_semgrep_report};
pub use reports::{ReportFormat, ReportGenerator, ReviewReport};
