//! Shared utilities.

mod hash;
mod path;

pub use hash::{sha256_bytes, sha256_file};
pub use path::{RelativePathError, relative_slash_path};
