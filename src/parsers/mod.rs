//! Input parsers.
//!
//! - [`lockfile`]: Bundler `Gemfile.lock` text into a [`DependencySnapshot`]
//! - [`semgrep`]: semgrep JSON reports into [`Finding`]s
//!
//! [`DependencySnapshot`]: crate::model::DependencySnapshot
//! [`Finding`]: crate::model::Finding

pub mod lockfile;
pub mod semgrep;

pub use lockfile::{parse_lockfile, parse_lockfile_str};
pub use semgrep::{parse_semgrep_report, parse_semgrep_str};
