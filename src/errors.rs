//! Typed errors returned below the command boundary.
//!
//! `ObjectError` is the library-tier error (`thiserror`-derived); the
//! command tier converts it via `?` into `anyhow`. `IoResultExt::with_path`
//! attaches path context to `std::io` failures.

use std::path::PathBuf;

/// Errors produced by the object-storage core (`ObjectId`, `Blob`, `Tree`,
/// `Database`, `Workspace`, `Refs`).
#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("object not found: {0}")]
    ObjectNotFound(String),

    #[error("corrupt object: {0}")]
    CorruptObject(String),

    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("length mismatch: declared {declared}, actual {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("unsupported entry: {0}")]
    UnsupportedEntry(PathBuf),

    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for the library tier.
pub type Result<T> = std::result::Result<T, ObjectError>;

/// Helper to wrap io errors with path context.
pub trait IoResultExt<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| ObjectError::Io {
            path: path.into(),
            source,
        })
    }
}
