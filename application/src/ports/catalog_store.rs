//! Port for loading and saving the seed catalog.

use seedpatch_domain::{Catalog, CatalogError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from the catalog store.
///
/// All of these are fatal: the pipeline aborts before anything reaches
/// disk (or, for `Write`, with the previous on-disk document intact,
/// since adapters are expected to replace the file atomically).
#[derive(Error, Debug)]
pub enum CatalogStoreError {
    /// The seed file does not exist.
    #[error("seed file not found: {0}")]
    NotFound(PathBuf),

    /// The seed file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not well-formed JSON.
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The seed file parsed but is not shaped like a catalog.
    #[error("unexpected document shape in {path}: {source}")]
    Shape {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },

    /// The updated document could not be written back.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Port for reading a catalog from persistent storage and writing it
/// back. One load, one save, the whole document each time.
pub trait CatalogStore: Send + Sync {
    /// Load the catalog at `path`.
    fn load(&self, path: &Path) -> Result<Catalog, CatalogStoreError>;

    /// Overwrite `path` with the serialized catalog.
    fn save(&self, catalog: &Catalog, path: &Path) -> Result<(), CatalogStoreError>;
}
