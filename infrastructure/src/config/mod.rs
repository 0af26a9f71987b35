//! Configuration loading

mod file_config;
mod loader;

pub use file_config::{
    FileAuditConfig, FileConfig, FileOutputConfig, FileOutputFormat, FileSeedConfig,
};
pub use loader::ConfigLoader;
