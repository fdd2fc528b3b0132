//! Input loading with context for error messages.

use super::PipelineError;
use crate::diff::DependencyDiff;
use crate::model::DependencySnapshot;
use crate::parsers::parse_lockfile;
use std::path::Path;

/// Parse a lockfile, tagging failures with its path.
pub fn parse_lockfile_with_context(
    path: &Path,
    quiet: bool,
) -> Result<DependencySnapshot, PipelineError> {
    let snapshot = parse_lockfile(path).map_err(|source| PipelineError::ParseFailed {
        path: path.display().to_string(),
        source,
    })?;
    if !quiet {
        tracing::info!(path = %path.display(), packages = snapshot.len(), "parsed lockfile");
    }
    Ok(snapshot)
}

/// Load a persisted dependency diff, tagging failures with its path.
pub fn load_diff_with_context(path: &Path, quiet: bool) -> Result<DependencyDiff, PipelineError> {
    let diff = DependencyDiff::load(path).map_err(|source| PipelineError::ParseFailed {
        path: path.display().to_string(),
        source,
    })?;
    if !quiet {
        tracing::info!(
            path = %path.display(),
            added = diff.added().len(),
            removed = diff.removed().len(),
            changed = diff.version_changes().len(),
            "loaded dependency diff"
        );
    }
    Ok(diff)
}
