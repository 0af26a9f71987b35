//! JSON file patch source
//!
//! Loads a [`PatchSet`] from a companion JSON file: one object, keyed
//! by slug, each value an object of field overrides.

use seedpatch_application::{PatchSource, PatchSourceError};
use seedpatch_domain::PatchSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Patch source backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFilePatchSource {
    path: PathBuf,
}

impl JsonFilePatchSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PatchSource for JsonFilePatchSource {
    fn load(&self) -> Result<PatchSet, PatchSourceError> {
        if !self.path.exists() {
            return Err(PatchSourceError::NotFound(self.path.clone()));
        }

        let text = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                PatchSourceError::NotFound(self.path.clone())
            } else {
                PatchSourceError::Read {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|source| PatchSourceError::Parse {
                path: self.path.clone(),
                source,
            })?;

        let patches = PatchSet::from_value(value).map_err(|source| PatchSourceError::Shape {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            "loaded {} patch entries from {}",
            patches.len(),
            self.path.display()
        );
        Ok(patches)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
