// src/error.rs
//! Error type shared by every module of the crate.

use std::path::PathBuf;

/// Error types for vector, drawing and font operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Normalization of a vector whose length is zero
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,
    /// A resource file could not be opened
    #[error("resource {} not found", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A resource file was opened but its contents are unusable
    #[error("resource {} is malformed: {reason}", path.display())]
    ResourceMalformed { path: PathBuf, reason: String },
    /// Font scale factors start at 1
    #[error("invalid font scale {0}, expected at least 1")]
    InvalidScale(u32),
}

impl Error {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::ResourceMalformed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
