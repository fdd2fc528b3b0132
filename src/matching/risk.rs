//! Risk flagging over newly introduced packages.

use super::typosquat::{TyposquatDetector, TyposquatMatch};
use crate::diff::DependencyDiff;
use crate::error::{GemDiffError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Possible typosquats among added packages, keyed by candidate name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TyposquatReport {
    #[serde(rename = "possible_typos")]
    pub candidates: BTreeMap<String, Vec<String>>,
}

impl TyposquatReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Matches in candidate-name order.
    #[must_use]
    pub fn matches(&self) -> Vec<TyposquatMatch> {
        self.candidates
            .iter()
            .map(|(candidate, resembles)| TyposquatMatch {
                candidate: candidate.clone(),
                resembles: resembles.clone(),
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?).map_err(|e| GemDiffError::io(path, e))
    }
}

impl FromIterator<TyposquatMatch> for TyposquatReport {
    fn from_iter<I: IntoIterator<Item = TyposquatMatch>>(iter: I) -> Self {
        Self {
            candidates: iter
                .into_iter()
                .map(|m| (m.candidate, m.resembles))
                .collect(),
        }
    }
}

/// Run the detector over every package the diff adds.
///
/// Removed and re-versioned packages are not checked: their names were
/// already trusted by the earlier lockfile.
pub fn flag_typosquats(diff: &DependencyDiff, detector: &TyposquatDetector) -> TyposquatReport {
    let report: TyposquatReport = diff
        .added()
        .iter()
        .filter_map(|pkg| detector.check(&pkg.name))
        .inspect(|m| {
            tracing::warn!(
                candidate = %m.candidate,
                resembles = ?m.resembles,
                "possible typosquat"
            );
        })
        .collect();
    tracing::info!(
        checked = diff.added().len(),
        flagged = report.candidates.len(),
        "typosquat check complete"
    );
    report
}
