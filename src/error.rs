/// Error types for the portfolio viewer
///
/// Each concern (catalog loading, settings, folder sync) has its own enum;
/// `AppError` gathers them for `main`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading or validating the project catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("project '{id}' has no images")]
    NoImages { id: String },

    #[error("project id '{id}' appears more than once")]
    DuplicateId { id: String },
}

/// Failures while reading the optional settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("settings file {} is malformed: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures while rebuilding the catalog from a photo folder
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("source folder {} does not exist", .0.display())]
    SourceMissing(PathBuf),

    #[error("i/o error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk source folder: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SyncError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failures while generating a grid thumbnail
#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("i/o error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("image could not be processed: {0}")]
    Image(#[from] image::ImageError),

    #[error("thumbnail task failed: {0}")]
    Join(String),
}

/// Top-level error returned from `main`
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("user interface failed: {0}")]
    Ui(#[from] iced::Error),
}
