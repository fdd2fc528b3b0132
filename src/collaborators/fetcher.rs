use crate::error::{CollaboratorErrorKind, GemDiffError, Result};
use crate::model::PackageRef;
use std::path::{Path, PathBuf};

/// Resolves a package to a local directory of its extracted files.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, package: &PackageRef) -> Result<PathBuf>;

    /// Name used in logs.
    fn name(&self) -> &'static str;
}

/// Fetcher over a directory of already extracted packages.
///
/// A package resolves to `<gems_dir>/<name>-<version>`, whatever its
/// source.
#[derive(Debug, Clone)]
pub struct LocalFetcher {
    gems_dir: PathBuf,
}

impl LocalFetcher {
    pub fn new(gems_dir: impl Into<PathBuf>) -> Self {
        Self {
            gems_dir: gems_dir.into(),
        }
    }

    #[must_use]
    pub fn gems_dir(&self) -> &Path {
        &self.gems_dir
    }
}

impl Fetcher for LocalFetcher {
    fn fetch(&self, package: &PackageRef) -> Result<PathBuf> {
        let dir = self.gems_dir.join(package.full_name());
        if dir.is_dir() {
            tracing::debug!(package = %package, dir = %dir.display(), "resolved package");
            Ok(dir)
        } else {
            Err(GemDiffError::collaborator(
                format!("fetching {package}"),
                CollaboratorErrorKind::NotFound(dir.display().to_string()),
            ))
        }
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Source;

    #[test]
    fn test_resolves_extracted_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("rack-2.2.3")).unwrap();
        let fetcher = LocalFetcher::new(dir.path());

        let rack = PackageRef::new("rack", "2.2.3", Source::default());
        assert_eq!(fetcher.fetch(&rack).unwrap(), dir.path().join("rack-2.2.3"));

        let missing = PackageRef::new("rack", "3.0.0", Source::default());
        let err = fetcher.fetch(&missing).unwrap_err();
        assert!(matches!(
            err,
            GemDiffError::Collaborator {
                source: CollaboratorErrorKind::NotFound(_),
                ..
            }
        ));
    }
}
