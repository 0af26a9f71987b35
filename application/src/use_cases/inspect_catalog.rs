//! Inspect-catalog use case
//!
//! Read-only check of the seed document: loads it through the same
//! store (so shape problems surface the same way a patch run would see
//! them) and summarizes duplicate slugs and slugless records.

use crate::ports::catalog_store::{CatalogStore, CatalogStoreError};
use seedpatch_domain::{CatalogSummary, summarize};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can abort an inspection.
#[derive(Error, Debug)]
pub enum InspectCatalogError {
    /// The seed catalog could not be loaded.
    #[error("{0}")]
    Store(#[from] CatalogStoreError),
}

/// Input for the inspect-catalog use case.
#[derive(Debug, Clone)]
pub struct InspectCatalogInput {
    /// Path of the seed catalog to inspect.
    pub seed_path: PathBuf,
}

impl InspectCatalogInput {
    pub fn new(seed_path: impl Into<PathBuf>) -> Self {
        Self {
            seed_path: seed_path.into(),
        }
    }
}

/// Output from an inspection.
#[derive(Debug, Clone, Serialize)]
pub struct InspectCatalogOutput {
    /// The inspected seed file.
    pub seed_path: PathBuf,
    /// Structural summary of the catalog.
    pub summary: CatalogSummary,
}

/// Use case for inspecting the seed catalog without modifying it.
pub struct InspectCatalogUseCase {
    store: Arc<dyn CatalogStore>,
}

impl InspectCatalogUseCase {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Load the catalog and summarize its structure.
    pub fn execute(
        &self,
        input: InspectCatalogInput,
    ) -> Result<InspectCatalogOutput, InspectCatalogError> {
        let catalog = self.store.load(&input.seed_path)?;
        let summary = summarize(&catalog);
        info!(
            "inspected {}: {} records, {} duplicate slugs, {} without slug",
            input.seed_path.display(),
            summary.total_records,
            summary.duplicate_slugs.len(),
            summary.unslugged_records
        );

        Ok(InspectCatalogOutput {
            seed_path: input.seed_path,
            summary,
        })
    }
}
