//! Content fingerprints of extracted package trees.

use crate::error::{FormatErrorKind, GemDiffError, Result};
use crate::utils::{RelativePathError, relative_slash_path, sha256_bytes, sha256_file};
use rayon::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// SHA-256 digest of a file's content.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    #[must_use]
    pub fn of_bytes(data: &[u8]) -> Self {
        Self(sha256_bytes(data))
    }

    pub fn of_file(path: &Path) -> Result<Self> {
        sha256_file(path).map(Self)
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| {
            GemDiffError::format(
                format!("decoding digest '{s}'"),
                FormatErrorKind::InvalidDocument(e.to_string()),
            )
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentDigest({})", self.to_hex())
    }
}

impl Serialize for ContentDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ContentDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// One file of a fingerprinted tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFingerprint {
    /// Path relative to the tree root, `/`-separated
    pub path: String,
    pub digest: ContentDigest,
}

impl FileFingerprint {
    /// Content equality; the path is the key, not part of the value compared.
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.digest == other.digest
    }
}

/// Mapping of root-relative path to content digest for one directory tree.
///
/// Paths use `/` separators. Directories are never entries themselves, and
/// files whose base name is on the ignore list are left out at any depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintIndex {
    root: PathBuf,
    entries: BTreeMap<String, FileFingerprint>,
}

impl FingerprintIndex {
    /// Walk `root` and hash every file in it.
    ///
    /// Any unreadable directory or file fails the whole build; a partial
    /// index is never returned. So does a file name that is not valid
    /// UTF-8, since it has no faithful `/`-separated key.
    pub fn build(root: &Path, ignore: &[String]) -> Result<Self> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(false) {
            let entry = entry.map_err(GemDiffError::from)?;
            if entry.file_type().is_dir() {
                continue;
            }
            if ignore.iter().any(|i| entry.file_name() == OsStr::new(i)) {
                continue;
            }
            if entry.path_is_symlink() {
                let target = std::fs::metadata(entry.path())
                    .map_err(|e| GemDiffError::io(entry.path(), e))?;
                if target.is_dir() {
                    continue;
                }
            }
            files.push(entry.into_path());
        }

        let hashed: Vec<FileFingerprint> = files
            .par_iter()
            .map(|path| -> Result<FileFingerprint> {
                let rel = relative_slash_path(root, path).map_err(|e| match e {
                    RelativePathError::NonUtf8 => GemDiffError::format(
                        "fingerprinting tree",
                        FormatErrorKind::NonUtf8Path(path.display().to_string()),
                    ),
                    RelativePathError::OutsideRoot => GemDiffError::path_mismatch(
                        path.display().to_string(),
                        root.display().to_string(),
                    ),
                })?;
                Ok(FileFingerprint {
                    path: rel,
                    digest: ContentDigest::of_file(path)?,
                })
            })
            .collect::<Result<_>>()?;

        tracing::debug!(root = %root.display(), files = hashed.len(), "fingerprinted tree");

        Ok(Self {
            root: root.to_path_buf(),
            entries: hashed.into_iter().map(|f| (f.path.clone(), f)).collect(),
        })
    }

    /// Build an index from precomputed entries.
    pub fn from_entries(
        root: impl Into<PathBuf>,
        entries: impl IntoIterator<Item = (String, ContentDigest)>,
    ) -> Self {
        Self {
            root: root.into(),
            entries: entries
                .into_iter()
                .map(|(path, digest)| (path.clone(), FileFingerprint { path, digest }))
                .collect(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&FileFingerprint> {
        self.entries.get(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileFingerprint> {
        self.entries.values()
    }

    pub(crate) fn as_map(&self) -> &BTreeMap<String, FileFingerprint> {
        &self.entries
    }
}
