//! Errors raised while loading catalogs and configuration.
//!
//! Searching itself never fails; these only cover the file-facing edges.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog must be an object mapping categories to name lists")]
    NotAnObject,

    #[error("category {category:?} must map to a list of names")]
    NotAList { category: String },

    #[error("category {category:?} contains an empty product name")]
    EmptyName { category: String },
}

/// Failure to load engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
