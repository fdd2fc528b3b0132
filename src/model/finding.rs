//! Static-analysis findings.

use crate::error::{GemDiffError, Result};
use crate::utils::relative_slash_path;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A single issue reported by the static-analysis collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub rule_id: String,
    pub message: String,
    /// Source text the rule matched, as reported by the scanner
    pub lines: String,
    pub line: u32,
    pub path: PathBuf,
}

/// Identity of a finding for deduplication.
///
/// Message and line number are not part of it: a finding whose code
/// moved but kept the same matched text is the same finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FindingKey {
    pub path: String,
    pub rule_id: String,
    pub lines: String,
}

impl fmt::Display for FindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.rule_id, self.lines)
    }
}

impl Finding {
    /// Rewrite the path relative to `root`.
    ///
    /// Fails with a path-mismatch error when the finding does not live
    /// under `root`, including paths that climb out of it through `..`.
    pub fn rebase(&self, root: &Path) -> Result<Self> {
        let relative = relative_slash_path(root, &self.path).map_err(|_| {
            GemDiffError::path_mismatch(
                self.path.display().to_string(),
                root.display().to_string(),
            )
        })?;
        Ok(Self {
            path: PathBuf::from(relative),
            ..self.clone()
        })
    }

    /// Identity key of an already rebased finding.
    #[must_use]
    pub fn key(&self) -> FindingKey {
        FindingKey {
            path: self.path.to_string_lossy().replace('\\', "/"),
            rule_id: self.rule_id.clone(),
            lines: self.lines.clone(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] line {}: {}\n    {}",
            self.rule_id,
            self.line,
            self.message,
            self.lines.trim()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(path: &str) -> Finding {
        Finding {
            rule_id: "ruby.lang.security.eval".to_string(),
            message: "eval on user input".to_string(),
            lines: "eval(params[:code])".to_string(),
            line: 12,
            path: PathBuf::from(path),
        }
    }

    #[test]
    fn test_rebase_under_root() {
        let rebased = finding("/scan/after/lib/x.rb")
            .rebase(Path::new("/scan/after"))
            .unwrap();
        assert_eq!(rebased.path, PathBuf::from("lib/x.rb"));
        assert_eq!(rebased.line, 12);
    }

    #[test]
    fn test_rebase_outside_root_fails() {
        let err = finding("/elsewhere/lib/x.rb")
            .rebase(Path::new("/scan/after"))
            .unwrap_err();
        assert!(err.is_path_mismatch());
    }

    #[test]
    fn test_rebase_through_parent_dir_fails() {
        let err = finding("/scan/v2/../v1/lib/x.rb")
            .rebase(Path::new("/scan/v2"))
            .unwrap_err();
        assert!(err.is_path_mismatch());
    }

    #[test]
    fn test_key_ignores_message_and_line() {
        let a = finding("lib/x.rb");
        let b = Finding {
            message: "different".to_string(),
            line: 40,
            ..a.clone()
        };
        assert_eq!(a.key(), b.key());
        assert_eq!(
            a.key().to_string(),
            "lib/x.rb:ruby.lang.security.eval:eval(params[:code])"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            finding("lib/x.rb").to_string(),
            "[ruby.lang.security.eval] line 12: eval on user input\n    eval(params[:code])"
        );
    }
}
