//! Port for obtaining the patch set.
//!
//! The patch table is data, not code: the usual source is a companion
//! JSON file next to whatever batch of corrections is being shipped.
//! [`StaticPatchSource`] covers the embedded-table case and tests.

use seedpatch_domain::{PatchError, PatchSet};
use std::path::PathBuf;
use thiserror::Error;

/// Errors from a patch source. All fatal: without a patch table there
/// is nothing to do.
#[derive(Error, Debug)]
pub enum PatchSourceError {
    /// The patch file does not exist.
    #[error("patch file not found: {0}")]
    NotFound(PathBuf),

    /// The patch file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The patch file is not well-formed JSON.
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The patch file parsed but is not a slug-keyed table of objects.
    #[error("unexpected patch shape in {path}: {source}")]
    Shape {
        path: PathBuf,
        #[source]
        source: PatchError,
    },
}

/// Port for loading the patch set to apply.
pub trait PatchSource: Send + Sync {
    /// Load the patch set.
    fn load(&self) -> Result<PatchSet, PatchSourceError>;

    /// Where the patches come from, for logs and reports.
    fn describe(&self) -> String;
}

/// In-memory patch source.
///
/// Used for tables baked into a calling program and for tests.
pub struct StaticPatchSource {
    patches: PatchSet,
}

impl StaticPatchSource {
    pub fn new(patches: PatchSet) -> Self {
        Self { patches }
    }
}

impl PatchSource for StaticPatchSource {
    fn load(&self) -> Result<PatchSet, PatchSourceError> {
        Ok(self.patches.clone())
    }

    fn describe(&self) -> String {
        format!("embedded table ({} entries)", self.patches.len())
    }
}
