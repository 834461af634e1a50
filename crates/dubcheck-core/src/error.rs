//! Error types for dubcheck-core

/// Result type for dubcheck-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while deriving a check configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Manifest(#[from] dubcheck_manifest::Error),
}
