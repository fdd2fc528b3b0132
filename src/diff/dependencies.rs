//! Lockfile-to-lockfile dependency diff and its persisted form.

use super::reconcile::{Change, ChangeSet, reconcile};
use crate::error::{ErrorContext, FormatErrorKind, GemDiffError, Result};
use crate::model::{DependencySnapshot, PackageRef};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A package whose pinned version moved.
pub type VersionChange = Change<String, PackageRef>;

/// Added, removed and re-versioned packages between two snapshots.
///
/// A package counts as changed only when its version string differs; a
/// source move alone is not a change but is reported alongside version
/// changes by [`DependencyDiff::source_changed`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[must_use]
pub struct DependencyDiff {
    changes: ChangeSet<String, PackageRef>,
}

impl DependencyDiff {
    /// Diff two snapshots. Buckets are sorted by package name.
    pub fn compute(before: &DependencySnapshot, after: &DependencySnapshot) -> Self {
        let mut changes = reconcile(before.as_map(), after.as_map(), PackageRef::same_version);
        changes.sort_by(|p| p.name.clone());
        tracing::debug!(
            added = changes.added.len(),
            removed = changes.removed.len(),
            changed = changes.changed.len(),
            "computed dependency diff"
        );
        Self { changes }
    }

    pub fn from_changes(changes: ChangeSet<String, PackageRef>) -> Self {
        Self { changes }
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    #[must_use]
    pub fn added(&self) -> &[PackageRef] {
        &self.changes.added
    }

    #[must_use]
    pub fn removed(&self) -> &[PackageRef] {
        &self.changes.removed
    }

    #[must_use]
    pub fn version_changes(&self) -> &[VersionChange] {
        &self.changes.changed
    }

    #[must_use]
    pub fn changes(&self) -> &ChangeSet<String, PackageRef> {
        &self.changes
    }

    /// Whether a version change also moved the package to another source.
    #[must_use]
    pub fn source_changed(change: &VersionChange) -> bool {
        !change.before.same_source(&change.after)
    }

    /// Added packages resolved from somewhere other than the public registry.
    pub fn added_from_other_sources(&self) -> impl Iterator<Item = &PackageRef> {
        self.changes
            .added
            .iter()
            .filter(|p| !p.is_from_default_registry())
    }

    /// Serialize to the persisted JSON document (two-space indent).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restore a diff from its persisted JSON document.
    pub fn from_json(content: &str) -> Result<Self> {
        let doc: DiffDocument =
            serde_json::from_str(content).context("decoding dependency diff document")?;
        doc.try_into()
    }

    /// Write the persisted document to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| GemDiffError::io(path, e))?;
        tracing::info!(path = %path.display(), "saved dependency diff");
        Ok(())
    }

    /// Read a persisted document from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GemDiffError::io(path, e))?;
        Self::from_json(&content).with_context(|| path.display().to_string())
    }
}

/// Flat document shape of a persisted diff.
#[derive(Debug, Serialize, Deserialize)]
struct DiffDocument {
    #[serde(default)]
    added: Vec<PackageRef>,
    #[serde(default)]
    removed: Vec<PackageRef>,
    #[serde(default, alias = "versionChanges")]
    version_changes: Vec<VersionChangeRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct VersionChangeRecord {
    name: String,
    before: PackageRef,
    after: PackageRef,
}

impl From<&DependencyDiff> for DiffDocument {
    fn from(diff: &DependencyDiff) -> Self {
        Self {
            added: diff.changes.added.clone(),
            removed: diff.changes.removed.clone(),
            version_changes: diff
                .changes
                .changed
                .iter()
                .map(|c| VersionChangeRecord {
                    name: c.key.clone(),
                    before: c.before.clone(),
                    after: c.after.clone(),
                })
                .collect(),
        }
    }
}

impl TryFrom<DiffDocument> for DependencyDiff {
    type Error = GemDiffError;

    fn try_from(doc: DiffDocument) -> Result<Self> {
        let changed = doc
            .version_changes
            .into_iter()
            .map(|record| {
                if record.before.name != record.name || record.after.name != record.name {
                    return Err(GemDiffError::format(
                        format!("version change '{}'", record.name),
                        FormatErrorKind::InvalidDocument(
                            "before/after package names do not match the entry name".to_string(),
                        ),
                    ));
                }
                Ok(Change {
                    key: record.name,
                    before: record.before,
                    after: record.after,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            changes: ChangeSet {
                added: doc.added,
                removed: doc.removed,
                changed,
            },
        })
    }
}

impl Serialize for DependencyDiff {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        DiffDocument::from(self).serialize(serializer)
    }
}
