//! Bundler lockfile parser.
//!
//! Reads the `specs:` blocks of `GEM`, `GIT` and `PATH` sections and records
//! every package pinned to an exact version, together with the `remote:`
//! of the section it was declared in.
//!
//! ```text
//! GEM
//!   remote: https://rubygems.org/
//!   specs:
//!     rack (2.2.3)          <- recorded
//!     rack-test (2.1.0)     <- recorded
//!       rack (>= 1.3)       <- constraint, discarded
//!
//! DEPENDENCIES
//!   rack (~> 2.2)           <- never recorded
//! ```

use crate::error::{ErrorContext, Result};
use crate::model::{DependencySnapshot, PackageRef, Source, SourceKind};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static SPEC_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+([^\s(]+)\s*\(([^)]+)\)").expect("static regex"));
static REMOTE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*remote:\s*(.+)").expect("static regex"));
static SECTION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(GEM|GIT|PATH|PLATFORMS|DEPENDENCIES|BUNDLED WITH)\s*$").expect("static regex")
});

/// Characters that mark a version requirement rather than a resolved version.
const CONSTRAINT_CHARS: &[char] = &['~', '<', '>', '='];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    /// Inside `GEM`/`GIT`/`PATH`, before `specs:`
    SourceSection(SourceKind),
    Specs(SourceKind),
    /// `DEPENDENCIES` lists requirements, never pins
    Dependencies,
}

/// Parse lockfile text into a snapshot.
///
/// Text without any recognised section yields an empty snapshot.
#[must_use]
pub fn parse_lockfile_str(content: &str) -> DependencySnapshot {
    let mut snapshot = DependencySnapshot::new();
    let mut state = State::Outside;
    let mut source: Option<Source> = None;

    for line in content.lines() {
        let trimmed = line.trim();

        if let Some(caps) = SECTION_HEADER.captures(trimmed) {
            let section = &caps[1];
            state = match SourceKind::from_section(section) {
                Some(kind) => {
                    // The locator carries over until the next `remote:`
                    source = source.take().map(|s| Source::new(kind, s.url));
                    State::SourceSection(kind)
                }
                None if section == "DEPENDENCIES" => State::Dependencies,
                None => State::Outside,
            };
            continue;
        }

        if let Some(caps) = REMOTE_LINE.captures(line) {
            if let State::SourceSection(kind) | State::Specs(kind) = state {
                source = Some(Source::new(kind, caps[1].trim()));
            }
            continue;
        }

        if trimmed == "specs:" {
            if let State::SourceSection(kind) = state {
                state = State::Specs(kind);
            }
            continue;
        }

        let State::Specs(kind) = state else {
            continue;
        };

        let Some(caps) = SPEC_LINE.captures(line) else {
            continue;
        };
        let version = caps[2].trim();
        if version.contains(CONSTRAINT_CHARS) {
            continue;
        }

        let pkg_source = source
            .clone()
            .unwrap_or_else(|| Source::new(kind, String::new()));
        snapshot.insert(PackageRef::new(&caps[1], version, pkg_source));
    }

    tracing::debug!(packages = snapshot.len(), "parsed lockfile");
    snapshot
}

/// Read and parse a lockfile from disk.
pub fn parse_lockfile(path: &Path) -> Result<DependencySnapshot> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading lockfile {}", path.display()))?;
    Ok(parse_lockfile_str(&content))
}
