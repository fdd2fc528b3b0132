//! Name-similarity risk signals.
//!
//! [`TyposquatDetector`] compares a package name against a curated corpus
//! of popular gems; [`flag_typosquats`] applies it to the packages a
//! [`DependencyDiff`](crate::diff::DependencyDiff) introduces.

mod corpus;
mod risk;
mod typosquat;

pub use corpus::POPULAR_GEMS;
pub use risk::{TyposquatReport, flag_typosquats};
pub use typosquat::{TyposquatDetector, TyposquatMatch, variants};
