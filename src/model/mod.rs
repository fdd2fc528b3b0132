//! Core data model shared by every diff.
//!
//! Snapshots are produced by the parsers ([`DependencySnapshot`]) or by
//! walking an extracted package tree ([`FingerprintIndex`]); findings come
//! from the static-analysis collaborator ([`Finding`]).

mod finding;
mod fingerprint;
mod package;

pub use finding::{Finding, FindingKey};
pub use fingerprint::{ContentDigest, FileFingerprint, FingerprintIndex};
pub use package::{DEFAULT_REGISTRY_URL, DependencySnapshot, PackageRef, Source, SourceKind};
