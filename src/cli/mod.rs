//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler builds a [`ReviewReport`](crate::reports::ReviewReport),
//! writes it through the report stage and returns the exit code the caller
//! should terminate with.

mod files;
mod lockfile;
mod scan;

pub use files::{run_dir_diff, run_gem_diff};
pub use lockfile::{run_gemfile_diff, run_gemfile_diff_typosquat, run_gems, run_typosquat};
pub use scan::{ScanReports, run_gem_diff_scan, run_gemfile_diff_scan, run_scan_diff};

use crate::config::TyposquatConfig;
use crate::matching::TyposquatDetector;
use std::borrow::Cow;

/// Detector for the configured corpus additions and allow list.
///
/// Without either, the shared built-in detector is reused.
fn build_detector(config: &TyposquatConfig) -> Cow<'static, TyposquatDetector> {
    if config.extra_popular.is_empty() && config.allow.is_empty() {
        Cow::Borrowed(TyposquatDetector::builtin())
    } else {
        Cow::Owned(
            TyposquatDetector::with_extra(config.extra_popular.iter().cloned())
                .allowing(&config.allow),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_detector_default_is_builtin() {
        let detector = build_detector(&TyposquatConfig::default());
        assert!(matches!(detector, Cow::Borrowed(_)));
    }

    #[test]
    fn test_build_detector_with_allow_list() {
        let config = TyposquatConfig {
            allow: vec!["rai1s".to_string()],
            ..TyposquatConfig::default()
        };
        let detector = build_detector(&config);
        assert!(detector.detect("rai1s").is_empty());
        assert!(!detector.detect("rak").is_empty());
    }
}
