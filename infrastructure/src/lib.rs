//! Infrastructure layer for seed-patch
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod patch;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileAuditConfig, FileConfig, FileOutputConfig, FileOutputFormat, FileSeedConfig,
};
pub use logging::JsonlChangeLogger;
pub use patch::JsonFilePatchSource;
pub use store::JsonFileCatalogStore;
