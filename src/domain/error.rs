use std::io;

use thiserror::Error;

/// Library-wide error type for flask-svelte operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A directory tree copy targeted a path that already exists.
    #[error("Path '{0}' already exists")]
    AlreadyExists(String),

    /// Project root already exists and is not empty.
    #[error("Project directory '{0}' already exists and is not empty")]
    ProjectExists(String),

    /// Page name is already registered or has files on disk.
    #[error("Page '{0}' already exists")]
    PageExists(String),

    /// Page name cannot be stored in the build config's page list.
    #[error(
        "Invalid page name '{0}': must be non-empty without commas, quotes, semicolons, or surrounding whitespace"
    )]
    InvalidPageName(String),

    /// Build config lacks the page-list declaration line.
    #[error("Malformed build config '{path}': no 'let {variable} =' declaration found")]
    MalformedConfig { path: String, variable: String },

    /// Template asset missing from the asset source.
    #[error("Template asset '{0}' not found")]
    AssetNotFound(String),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers matching on error categories.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::AlreadyExists(_) | AppError::ProjectExists(_) | AppError::PageExists(_) => {
                io::ErrorKind::AlreadyExists
            }
            AppError::InvalidPageName(_) => io::ErrorKind::InvalidInput,
            AppError::MalformedConfig { .. } => io::ErrorKind::InvalidData,
            AppError::AssetNotFound(_) => io::ErrorKind::NotFound,
        }
    }
}
