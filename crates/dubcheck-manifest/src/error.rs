//! Error types for dubcheck-manifest

use std::path::PathBuf;

/// Result type for dubcheck-manifest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or parsing a manifest
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} manifest: {message}")]
    Parse { format: String, message: String },

    #[error("Malformed SDL at line {line}: {message}")]
    Sdl { line: usize, message: String },

    #[error("Expected {expected} for '{context}', found {found}")]
    Shape {
        expected: &'static str,
        found: &'static str,
        context: String,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn sdl(line: usize, message: impl Into<String>) -> Self {
        Self::Sdl {
            line,
            message: message.into(),
        }
    }

    pub fn shape(expected: &'static str, found: &'static str, context: impl Into<String>) -> Self {
        Self::Shape {
            expected,
            found,
            context: context.into(),
        }
    }
}
