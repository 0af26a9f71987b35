//! Port definitions (interfaces to the outside world)

pub mod catalog_store;
pub mod change_logger;
pub mod patch_source;
