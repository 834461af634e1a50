//! Error type for the dubcheck CLI

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] dubcheck_core::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
