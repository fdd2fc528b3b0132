//! Path helpers shared by fingerprinting and finding rebasing.

use std::path::{Component, Path};

/// Why a path could not be expressed relative to a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativePathError {
    /// Not under the root, or escapes it through `..`
    OutsideRoot,
    /// A component below the root is not valid UTF-8
    NonUtf8,
}

/// Express `path` relative to `root` with `/` separators.
///
/// Only plain components may follow the root: a remainder containing
/// `..`, `.` or a root component is outside the root. Non-UTF-8 names are
/// rejected rather than lossily converted, so two distinct files never
/// share a key.
pub fn relative_slash_path(root: &Path, path: &Path) -> Result<String, RelativePathError> {
    let rel = path
        .strip_prefix(root)
        .map_err(|_| RelativePathError::OutsideRoot)?;
    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => {
                parts.push(part.to_str().ok_or(RelativePathError::NonUtf8)?);
            }
            _ => return Err(RelativePathError::OutsideRoot),
        }
    }
    Ok(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_slash_path() {
        let root = Path::new("/tmp/gems/rack-2.2.3");
        assert_eq!(
            relative_slash_path(root, Path::new("/tmp/gems/rack-2.2.3/lib/rack.rb")).as_deref(),
            Ok("lib/rack.rb")
        );
        assert_eq!(
            relative_slash_path(root, Path::new("/tmp/other/x.rb")),
            Err(RelativePathError::OutsideRoot)
        );
    }

    #[test]
    fn test_prefix_is_component_wise() {
        let root = Path::new("/tmp/gems/rack");
        assert_eq!(
            relative_slash_path(root, Path::new("/tmp/gems/rack-2.2.3/x.rb")),
            Err(RelativePathError::OutsideRoot)
        );
    }

    #[test]
    fn test_parent_components_escape_root() {
        let root = Path::new("/scan/v2");
        assert_eq!(
            relative_slash_path(root, Path::new("/scan/v2/../v1/lib/x.rb")),
            Err(RelativePathError::OutsideRoot)
        );
        assert_eq!(
            relative_slash_path(root, Path::new("/scan/v2/lib/../x.rb")),
            Err(RelativePathError::OutsideRoot)
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let root = Path::new("/scan");
        let path = root.join(OsStr::from_bytes(b"a\xff.rb"));
        assert_eq!(
            relative_slash_path(root, &path),
            Err(RelativePathError::NonUtf8)
        );
    }
}
