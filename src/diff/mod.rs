//! Differential analysis.
//!
//! All diffs share one engine, [`reconcile`], that splits two keyed
//! snapshots into added, removed and changed buckets:
//!
//! - [`DependencyDiff`]: two lockfile snapshots, changed means a different
//!   version string
//! - [`DirectoryDiff`]: two extracted trees, changed means different content
//! - [`FindingDelta`]: two scans, reduced to the findings only the later
//!   scan reports
//!
//! # Example
//!
//! ```no_run
//! use gemdiff::diff::DependencyDiff;
//! use gemdiff::parsers::parse_lockfile;
//! use std::path::Path;
//!
//! let before = parse_lockfile(Path::new("Gemfile.lock.old")).unwrap();
//! let after = parse_lockfile(Path::new("Gemfile.lock")).unwrap();
//! let diff = DependencyDiff::compute(&before, &after);
//! for change in diff.version_changes() {
//!     println!("{}: {} -> {}", change.key, change.before.version, change.after.version);
//! }
//! ```

mod dependencies;
mod files;
mod findings;
pub mod reconcile;

pub use dependencies::{DependencyDiff, VersionChange};
pub use files::{DEFAULT_IGNORED_FILES, DirectoryDiff, default_ignore_list};
pub use findings::{FindingDelta, RebaseWarning, new_only};
pub use reconcile::{Change, ChangeSet, Keyed, reconcile, subtract};
