//! Directory diff over content fingerprints.

use super::reconcile::{ChangeSet, reconcile};
use crate::error::{ErrorContext, Result};
use crate::model::{FileFingerprint, FingerprintIndex};
use std::path::{Path, PathBuf};

/// Base names left out of every directory diff unless configured otherwise.
pub const DEFAULT_IGNORED_FILES: &[&str] = &["Gemfile.lock", ".gitignore", "gem.deps.rb"];

/// Added, removed and content-changed files between two trees.
///
/// Files are keyed by their path relative to each root, so identical
/// content under a different path is an add plus a remove.
#[derive(Debug, Clone)]
#[must_use]
pub struct DirectoryDiff {
    before_root: PathBuf,
    after_root: PathBuf,
    changes: ChangeSet<String, FileFingerprint>,
}

impl DirectoryDiff {
    /// Fingerprint both roots and diff them.
    ///
    /// Either walk failing fails the whole diff.
    pub fn compute(before_root: &Path, after_root: &Path, ignore: &[String]) -> Result<Self> {
        let before = FingerprintIndex::build(before_root, ignore)
            .context("failed to read before directory")?;
        let after = FingerprintIndex::build(after_root, ignore)
            .context("failed to read after directory")?;
        Ok(Self::from_indexes(&before, &after))
    }

    /// Diff two prebuilt indexes.
    pub fn from_indexes(before: &FingerprintIndex, after: &FingerprintIndex) -> Self {
        let mut changes = reconcile(before.as_map(), after.as_map(), FileFingerprint::same_content);
        changes.sort_by(|f| f.path.clone());
        tracing::debug!(
            added = changes.added.len(),
            removed = changes.removed.len(),
            changed = changes.changed.len(),
            "computed directory diff"
        );
        Self {
            before_root: before.root().to_path_buf(),
            after_root: after.root().to_path_buf(),
            changes,
        }
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    #[must_use]
    pub fn before_root(&self) -> &Path {
        &self.before_root
    }

    #[must_use]
    pub fn after_root(&self) -> &Path {
        &self.after_root
    }

    #[must_use]
    pub fn changes(&self) -> &ChangeSet<String, FileFingerprint> {
        &self.changes
    }

    #[must_use]
    pub fn added(&self) -> Vec<&str> {
        self.changes.added.iter().map(|f| f.path.as_str()).collect()
    }

    #[must_use]
    pub fn removed(&self) -> Vec<&str> {
        self.changes.removed.iter().map(|f| f.path.as_str()).collect()
    }

    #[must_use]
    pub fn changed(&self) -> Vec<&str> {
        self.changes.changed.iter().map(|c| c.key.as_str()).collect()
    }

    /// Files of the *before* tree worth scanning: every changed file.
    #[must_use]
    pub fn before_files_to_scan(&self) -> Vec<PathBuf> {
        join_sorted(&self.before_root, self.changed())
    }

    /// Files of the *after* tree worth scanning: changed plus added files.
    ///
    /// Removed files are never scanned.
    #[must_use]
    pub fn after_files_to_scan(&self) -> Vec<PathBuf> {
        let mut rel = self.changed();
        rel.extend(self.added());
        join_sorted(&self.after_root, rel)
    }
}

fn join_sorted(root: &Path, rel: Vec<&str>) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = rel.into_iter().map(|p| root.join(p)).collect();
    paths.sort();
    paths
}

/// Owned copy of [`DEFAULT_IGNORED_FILES`].
#[must_use]
pub fn default_ignore_list() -> Vec<String> {
    DEFAULT_IGNORED_FILES.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_added_removed_changed() {
        let before = tempfile::tempdir().unwrap();
        let after = tempfile::tempdir().unwrap();

        write(before.path(), "lib/same.rb", "same");
        write(after.path(), "lib/same.rb", "same");
        write(before.path(), "lib/edit.rb", "v1");
        write(after.path(), "lib/edit.rb", "v2");
        write(before.path(), "lib/gone.rb", "bye");
        write(after.path(), "lib/new.rb", "hi");

        let diff = DirectoryDiff::compute(before.path(), after.path(), &[]).unwrap();

        assert_eq!(diff.added(), vec!["lib/new.rb"]);
        assert_eq!(diff.removed(), vec!["lib/gone.rb"]);
        assert_eq!(diff.changed(), vec!["lib/edit.rb"]);
    }

    #[test]
    fn test_moved_content_is_add_and_remove() {
        let before = tempfile::tempdir().unwrap();
        let after = tempfile::tempdir().unwrap();
        write(before.path(), "a.rb", "identical");
        write(after.path(), "b.rb", "identical");

        let diff = DirectoryDiff::compute(before.path(), after.path(), &[]).unwrap();
        assert_eq!(diff.added(), vec!["b.rb"]);
        assert_eq!(diff.removed(), vec!["a.rb"]);
        assert!(diff.changed().is_empty());
    }

    #[test]
    fn test_ignore_list_applies_to_both_roots() {
        let before = tempfile::tempdir().unwrap();
        let after = tempfile::tempdir().unwrap();
        write(before.path(), "Gemfile.lock", "old");
        write(after.path(), "Gemfile.lock", "new");
        write(after.path(), "sub/.gitignore", "x");

        let diff =
            DirectoryDiff::compute(before.path(), after.path(), &default_ignore_list()).unwrap();
        assert!(!diff.has_changes());
    }

    #[test]
    fn test_files_to_scan() {
        let before = tempfile::tempdir().unwrap();
        let after = tempfile::tempdir().unwrap();
        write(before.path(), "edit.rb", "v1");
        write(after.path(), "edit.rb", "v2");
        write(before.path(), "gone.rb", "x");
        write(after.path(), "added.rb", "y");

        let diff = DirectoryDiff::compute(before.path(), after.path(), &[]).unwrap();

        assert_eq!(diff.before_files_to_scan(), vec![before.path().join("edit.rb")]);
        assert_eq!(
            diff.after_files_to_scan(),
            vec![after.path().join("added.rb"), after.path().join("edit.rb")]
        );
    }

    #[test]
    fn test_from_prebuilt_indexes() {
        use crate::model::ContentDigest;

        let before = FingerprintIndex::from_entries(
            "/gems/rack-2.2.7",
            [
                ("lib/rack.rb".to_string(), ContentDigest::of_bytes(b"same")),
                ("lib/utils.rb".to_string(), ContentDigest::of_bytes(b"v1")),
            ],
        );
        let after = FingerprintIndex::from_entries(
            "/gems/rack-2.2.8",
            [
                ("lib/rack.rb".to_string(), ContentDigest::of_bytes(b"same")),
                ("lib/utils.rb".to_string(), ContentDigest::of_bytes(b"v2")),
            ],
        );

        let diff = DirectoryDiff::from_indexes(&before, &after);
        assert_eq!(diff.changed(), vec!["lib/utils.rb"]);
        assert_eq!(
            diff.after_files_to_scan(),
            vec![PathBuf::from("/gems/rack-2.2.8/lib/utils.rb")]
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_names_never_collapse_into_one_entry() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let before = tempfile::tempdir().unwrap();
        let after = tempfile::tempdir().unwrap();
        for (root, second) in [(before.path(), "v1"), (after.path(), "v2-evil")] {
            fs::write(root.join(OsStr::from_bytes(b"a\xff.rb")), "same").unwrap();
            fs::write(root.join(OsStr::from_bytes(b"a\xfe.rb")), second).unwrap();
        }

        // A lossy key would hide the modified file; the diff must fail instead
        assert!(DirectoryDiff::compute(before.path(), after.path(), &[]).is_err());
    }

    #[test]
    fn test_unreadable_root_fails() {
        let before = tempfile::tempdir().unwrap();
        let missing = before.path().join("missing");
        let err = DirectoryDiff::compute(before.path(), &missing, &[]).unwrap_err();
        assert!(err.to_string().contains("after directory"));
    }
}
