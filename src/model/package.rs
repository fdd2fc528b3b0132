//! Pinned packages and the snapshots that hold them.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Locator of the public gem registry.
pub const DEFAULT_REGISTRY_URL: &str = "https://rubygems.org/";

/// Where a package was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A gem server (`GEM` section)
    #[serde(alias = "gem", alias = "rubygems")]
    Registry,
    /// A git checkout (`GIT` section)
    Git,
    /// A local path (`PATH` section)
    Path,
}

impl SourceKind {
    /// Map a lockfile section header to the source kind it declares.
    #[must_use]
    pub fn from_section(section: &str) -> Option<Self> {
        match section {
            "GEM" => Some(Self::Registry),
            "GIT" => Some(Self::Git),
            "PATH" => Some(Self::Path),
            _ => None,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registry => write!(f, "registry"),
            Self::Git => write!(f, "git"),
            Self::Path => write!(f, "path"),
        }
    }
}

/// Source provenance of a package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Source {
    #[serde(rename = "type", alias = "Type")]
    pub kind: SourceKind,
    #[serde(alias = "URL")]
    pub url: String,
}

impl Source {
    pub fn new(kind: SourceKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
        }
    }

    /// True when the locator is the public gem registry.
    #[must_use]
    pub fn is_default_registry(&self) -> bool {
        self.url.trim_end_matches('/') == DEFAULT_REGISTRY_URL.trim_end_matches('/')
    }
}

impl Default for Source {
    fn default() -> Self {
        Self::new(SourceKind::Registry, DEFAULT_REGISTRY_URL)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.url)
    }
}

/// A package pinned to an exact version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct PackageRef {
    pub name: String,
    pub version: String,
    pub source: Source,
}

impl PackageRef {
    pub fn new(name: impl Into<String>, version: impl Into<String>, source: Source) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            source,
        }
    }

    /// Version equality: exact string comparison, no semver ordering.
    ///
    /// This is the equality that decides membership of a dependency diff's
    /// changed bucket.
    #[must_use]
    pub fn same_version(&self, other: &Self) -> bool {
        self.version == other.version
    }

    /// Source equality, used only to annotate changes for display.
    #[must_use]
    pub fn same_source(&self, other: &Self) -> bool {
        self.source == other.source
    }

    #[must_use]
    pub fn is_from_default_registry(&self) -> bool {
        self.source.is_default_registry()
    }

    /// Directory name of the extracted package, `<name>-<version>`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }
}

impl fmt::Display for PackageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.version)
    }
}

/// Pinned packages of one lockfile, keyed by name.
///
/// Iteration follows first-insertion order; a later entry for the same
/// name replaces the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySnapshot {
    packages: IndexMap<String, PackageRef>,
}

impl DependencySnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a package, replacing any prior entry of the same name.
    pub fn insert(&mut self, package: PackageRef) -> Option<PackageRef> {
        self.packages.insert(package.name.clone(), package)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PackageRef> {
        self.packages.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PackageRef> {
        self.packages.values()
    }

    /// Packages sorted by name.
    #[must_use]
    pub fn sorted(&self) -> Vec<&PackageRef> {
        let mut packages: Vec<_> = self.packages.values().collect();
        packages.sort_by(|a, b| a.name.cmp(&b.name));
        packages
    }

    pub(crate) fn as_map(&self) -> &IndexMap<String, PackageRef> {
        &self.packages
    }
}

impl FromIterator<PackageRef> for DependencySnapshot {
    fn from_iter<I: IntoIterator<Item = PackageRef>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for package in iter {
            snapshot.insert(package);
        }
        snapshot
    }
}
