//! Application layer for seed-patch
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    catalog_store::{CatalogStore, CatalogStoreError},
    change_logger::{ChangeEvent, ChangeLogger, NoChangeLogger},
    patch_source::{PatchSource, PatchSourceError, StaticPatchSource},
};
pub use use_cases::apply_patch::{
    ApplyPatchError, ApplyPatchInput, ApplyPatchOutput, ApplyPatchProgressNotifier,
    ApplyPatchUseCase, NoApplyPatchProgress,
};
pub use use_cases::inspect_catalog::{
    InspectCatalogError, InspectCatalogInput, InspectCatalogOutput, InspectCatalogUseCase,
};
