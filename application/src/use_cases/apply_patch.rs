//! Apply-patch use case
//!
//! This module provides the [`ApplyPatchUseCase`]: the whole pipeline of
//! a patch run, in order:
//!
//! 1. **Load patches** - Read the slug-keyed override table
//! 2. **Load catalog** - Read and shape-check the seed document
//! 3. **Merge** - Overwrite patched fields on every matching record
//! 4. **Save** - Atomically replace the seed file (skipped on dry-run)
//!
//! Everything fatal happens before the save; a failed load leaves the
//! seed file exactly as it was. Patch slugs that match no record are a
//! warning carried in the output, never an error.
//!
//! # Usage
//!
//! ```ignore
//! use seedpatch_application::{ApplyPatchInput, ApplyPatchUseCase};
//!
//! let use_case = ApplyPatchUseCase::new(store, patches);
//! let input = ApplyPatchInput::new("data/seed.json").with_dry_run(true);
//!
//! let output = use_case.execute(input)?;
//! println!("applied {} of {}", output.applied.len(), output.patch_count);
//! ```

use crate::ports::catalog_store::{CatalogStore, CatalogStoreError};
use crate::ports::change_logger::{ChangeEvent, ChangeLogger, NoChangeLogger};
use crate::ports::patch_source::{PatchSource, PatchSourceError};
use seedpatch_domain::apply_patches;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can abort a patch run.
#[derive(Error, Debug)]
pub enum ApplyPatchError {
    /// The seed catalog could not be loaded or saved.
    #[error("{0}")]
    Store(#[from] CatalogStoreError),

    /// The patch table could not be loaded.
    #[error("{0}")]
    Patches(#[from] PatchSourceError),
}

/// Input for the apply-patch use case.
#[derive(Debug, Clone)]
pub struct ApplyPatchInput {
    /// Path of the seed catalog to patch (also the save destination).
    pub seed_path: PathBuf,

    /// Merge and report, but leave the seed file untouched.
    pub dry_run: bool,
}

impl ApplyPatchInput {
    pub fn new(seed_path: impl Into<PathBuf>) -> Self {
        Self {
            seed_path: seed_path.into(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Output from a completed patch run.
///
/// Serializable so the CLI can emit it directly as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct ApplyPatchOutput {
    /// The seed file that was (or would have been) rewritten.
    pub seed_path: PathBuf,
    /// Patch slugs matched by at least one record, document order.
    pub applied: Vec<String>,
    /// Patch slugs that matched nothing, patch order.
    pub missing: Vec<String>,
    /// Records mutated; counts duplicates individually.
    pub records_updated: usize,
    /// Records in the catalog.
    pub total_records: usize,
    /// Entries in the patch table.
    pub patch_count: usize,
    /// Whether the save was skipped.
    pub dry_run: bool,
}

/// Progress notifier for a patch run.
///
/// All methods have empty default implementations; implement only the
/// callbacks you present.
pub trait ApplyPatchProgressNotifier: Send + Sync {
    /// Called before the seed catalog is read.
    fn on_load_start(&self, _seed_path: &Path) {}

    /// Called once the catalog and patch table are both in memory.
    fn on_loaded(&self, _total_records: usize, _patch_count: usize) {}

    /// Called for each slug the merge applied.
    fn on_record_patched(&self, _slug: &str, _field_count: usize) {}

    /// Called after the seed file has been rewritten.
    fn on_saved(&self, _seed_path: &Path) {}
}

/// No-op implementation of progress notifier.
pub struct NoApplyPatchProgress;
impl ApplyPatchProgressNotifier for NoApplyPatchProgress {}

/// Use case for applying a patch table to the seed catalog.
pub struct ApplyPatchUseCase {
    store: Arc<dyn CatalogStore>,
    patches: Arc<dyn PatchSource>,
    change_log: Arc<dyn ChangeLogger>,
}

impl ApplyPatchUseCase {
    /// Creates a use case with auditing disabled.
    pub fn new(store: Arc<dyn CatalogStore>, patches: Arc<dyn PatchSource>) -> Self {
        Self {
            store,
            patches,
            change_log: Arc::new(NoChangeLogger),
        }
    }

    /// Attach a change logger for the audit trail.
    pub fn with_change_logger(mut self, change_log: Arc<dyn ChangeLogger>) -> Self {
        self.change_log = change_log;
        self
    }

    /// Run the pipeline without progress reporting.
    pub fn execute(&self, input: ApplyPatchInput) -> Result<ApplyPatchOutput, ApplyPatchError> {
        self.execute_with_progress(input, &NoApplyPatchProgress)
    }

    /// Run the pipeline with progress notifications.
    ///
    /// # Errors
    ///
    /// - [`ApplyPatchError::Patches`] - the patch table failed to load
    /// - [`ApplyPatchError::Store`] - the seed failed to load or save
    pub fn execute_with_progress(
        &self,
        input: ApplyPatchInput,
        progress: &dyn ApplyPatchProgressNotifier,
    ) -> Result<ApplyPatchOutput, ApplyPatchError> {
        let patches = self.patches.load()?;
        if patches.is_empty() {
            warn!(
                "patch source {} is empty; nothing to apply",
                self.patches.describe()
            );
        }

        progress.on_load_start(&input.seed_path);
        let mut catalog = self.store.load(&input.seed_path)?;
        info!(
            "loaded {} records from {}, {} patch entries from {}",
            catalog.len(),
            input.seed_path.display(),
            patches.len(),
            self.patches.describe()
        );
        progress.on_loaded(catalog.len(), patches.len());

        let outcome = apply_patches(&mut catalog, &patches);

        for slug in &outcome.applied {
            let fields: Vec<&str> = patches
                .get(slug)
                .map(|entry| entry.keys().map(String::as_str).collect())
                .unwrap_or_default();
            progress.on_record_patched(slug, fields.len());
            self.change_log.log(ChangeEvent::new(
                "record_patched",
                json!({ "slug": slug, "fields": fields }),
            ));
        }
        for slug in &outcome.missing {
            warn!(
                "no record with slug '{}' in {}",
                slug,
                input.seed_path.display()
            );
        }

        if input.dry_run {
            info!("dry run: not writing {}", input.seed_path.display());
        } else {
            self.store.save(&catalog, &input.seed_path)?;
            progress.on_saved(&input.seed_path);
        }

        let output = ApplyPatchOutput {
            seed_path: input.seed_path,
            applied: outcome.applied,
            missing: outcome.missing,
            records_updated: outcome.records_updated,
            total_records: catalog.len(),
            patch_count: patches.len(),
            dry_run: input.dry_run,
        };

        self.change_log.log(ChangeEvent::new(
            "run_completed",
            json!({
                "seed_path": output.seed_path.display().to_string(),
                "applied": output.applied,
                "missing": output.missing,
                "records_updated": output.records_updated,
                "dry_run": output.dry_run,
            }),
        ));

        Ok(output)
    }
}
