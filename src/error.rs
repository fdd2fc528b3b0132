//! Unified error types for gemdiff.
//!
//! Errors fall into three families: input errors (a file or tree that
//! cannot be read), format errors (a record that cannot be decoded or
//! rebased) and collaborator errors (a fetcher or scanner that failed).
//! Absence of a key on one side of a diff is never an error; it is the
//! added/removed signal.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gemdiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GemDiffError {
    /// Unreadable file, directory or malformed path
    #[error("Input error{}: {context}", at_path(.path))]
    Input {
        path: Option<PathBuf>,
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// A record failed to decode or could not be rebased
    #[error("Format error: {context}")]
    Format {
        context: String,
        #[source]
        source: FormatErrorKind,
    },

    /// An external fetcher or scanner failed
    #[error("Collaborator failed: {context}")]
    Collaborator {
        context: String,
        #[source]
        source: CollaboratorErrorKind,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific format error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FormatErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Path {path} is not under scan root {root}")]
    PathMismatch { path: String, root: String },

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("File name is not valid UTF-8: {0}")]
    NonUtf8Path(String),
}

/// Specific collaborator error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CollaboratorErrorKind {
    #[error("Package not available locally: {0}")]
    NotFound(String),

    #[error("{0}")]
    Failed(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for gemdiff operations
pub type Result<T> = std::result::Result<T, GemDiffError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl GemDiffError {
    /// Create an input error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Input {
            path: Some(path.into()),
            context: source.to_string(),
            source,
        }
    }

    /// Create a format error with context
    pub fn format(context: impl Into<String>, source: FormatErrorKind) -> Self {
        Self::Format {
            context: context.into(),
            source,
        }
    }

    /// Create a format error for a path outside its scan root
    pub fn path_mismatch(path: impl Into<String>, root: impl Into<String>) -> Self {
        Self::format(
            "rebasing finding path",
            FormatErrorKind::PathMismatch {
                path: path.into(),
                root: root.into(),
            },
        )
    }

    /// Create a collaborator error with context
    pub fn collaborator(context: impl Into<String>, source: CollaboratorErrorKind) -> Self {
        Self::Collaborator {
            context: context.into(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// True for errors caused by a record that does not belong to its root.
    #[must_use]
    pub fn is_path_mismatch(&self) -> bool {
        matches!(
            self,
            Self::Format {
                source: FormatErrorKind::PathMismatch { .. },
                ..
            }
        )
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for GemDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Input {
            path: None,
            context: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for GemDiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::format(
            "JSON deserialization",
            FormatErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<walkdir::Error> for GemDiffError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from);
        let context = err.to_string();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
        Self::Input {
            path,
            context,
            source,
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outermost first, so a failure three calls deep
/// reads `"outer: middle: inner"`.
///
/// # Example
///
/// ```ignore
/// use gemdiff::error::ErrorContext;
///
/// fn load_lock(path: &Path) -> Result<DependencySnapshot> {
///     let text = std::fs::read_to_string(path)
///         .with_context(|| format!("reading {}", path.display()))?;
///     Ok(parse_lockfile_str(&text))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on the error path.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<GemDiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: GemDiffError, new_ctx: &str) -> GemDiffError {
    match err {
        GemDiffError::Input {
            path,
            context,
            source,
        } => GemDiffError::Input {
            path,
            context: chain_context(new_ctx, &context),
            source,
        },
        GemDiffError::Format { context, source } => GemDiffError::Format {
            context: chain_context(new_ctx, &context),
            source,
        },
        GemDiffError::Collaborator { context, source } => GemDiffError::Collaborator {
            context: chain_context(new_ctx, &context),
            source,
        },
        GemDiffError::Config(msg) => GemDiffError::Config(chain_context(new_ctx, &msg)),
        GemDiffError::Validation(msg) => GemDiffError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Render an optional path as `" at <path>"`, or nothing.
fn at_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" at {}", p.display()))
        .unwrap_or_default()
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| GemDiffError::Validation(context.into()))
    }
}
