//! JSON file catalog store
//!
//! Implements [`CatalogStore`] over a single JSON file on the local
//! file system. Loading is a straight read + two-phase parse (JSON
//! first, document shape second, so the two failure modes stay
//! distinguishable). Saving serializes the whole document (2-space
//! indent, non-ASCII left unescaped) into a temporary file in the
//! destination directory, then renames it over the target: a failed
//! write can never truncate the previous seed.

use seedpatch_application::{CatalogStore, CatalogStoreError};
use seedpatch_domain::Catalog;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Catalog store that reads and writes a JSON file.
#[derive(Debug, Clone, Default)]
pub struct JsonFileCatalogStore;

impl JsonFileCatalogStore {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogStore for JsonFileCatalogStore {
    fn load(&self, path: &Path) -> Result<Catalog, CatalogStoreError> {
        if !path.exists() {
            return Err(CatalogStoreError::NotFound(path.to_path_buf()));
        }

        let text = fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                CatalogStoreError::NotFound(path.to_path_buf())
            } else {
                CatalogStoreError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|source| CatalogStoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Catalog::from_value(value).map_err(|source| CatalogStoreError::Shape {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("loaded {} records from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    fn save(&self, catalog: &Catalog, path: &Path) -> Result<(), CatalogStoreError> {
        let write_error = |source| CatalogStoreError::Write {
            path: path.to_path_buf(),
            source,
        };

        let json = serde_json::to_string_pretty(catalog)
            .map_err(|source| write_error(std::io::Error::other(source)))?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
        tmp.write_all(json.as_bytes()).map_err(write_error)?;
        tmp.flush().map_err(write_error)?;
        tmp.persist(path).map_err(|e| write_error(e.error))?;

        debug!("wrote {} bytes to {}", json.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedpatch_domain::CatalogError;
    use serde_json::json;
    use tempfile::tempdir;

    fn write_seed(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let store = JsonFileCatalogStore::new();

        let err = store.load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CatalogStoreError::NotFound(_)));
    }

    #[test]
    fn test_load_malformed_json_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = write_seed(dir.path(), "seed.json", "{not json");
        let store = JsonFileCatalogStore::new();

        let err = store.load(&path).unwrap_err();
        assert!(matches!(err, CatalogStoreError::Parse { .. }));
    }

    #[test]
    fn test_load_wrong_shape_is_shape_error() {
        let dir = tempdir().unwrap();
        let path = write_seed(dir.path(), "seed.json", r#"{"categories": []}"#);
        let store = JsonFileCatalogStore::new();

        let err = store.load(&path).unwrap_err();
        assert!(matches!(
            err,
            CatalogStoreError::Shape {
                source: CatalogError::MissingTools,
                ..
            }
        ));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = write_seed(
            dir.path(),
            "seed.json",
            r#"{"tools": [{"slug": "alpha", "description": "LLM 앱 개발의 표준 프레임워크"}], "version": 2}"#,
        );
        let store = JsonFileCatalogStore::new();

        let catalog = store.load(&path).unwrap();
        store.save(&catalog, &path).unwrap();

        let reloaded = store.load(&path).unwrap();
        assert_eq!(reloaded, catalog);
    }

    #[test]
    fn test_save_keeps_non_ascii_unescaped_on_disk() {
        let dir = tempdir().unwrap();
        let path = write_seed(
            dir.path(),
            "seed.json",
            r#"{"tools": [{"slug": "wrtn", "description": "한국형 AI 플랫폼"}]}"#,
        );
        let store = JsonFileCatalogStore::new();

        let catalog = store.load(&path).unwrap();
        store.save(&catalog, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("한국형 AI 플랫폼"));
        assert!(!written.contains("\\u"));
    }

    #[test]
    fn test_save_overwrites_existing_file_atomically() {
        let dir = tempdir().unwrap();
        let path = write_seed(
            dir.path(),
            "seed.json",
            r#"{"tools": [{"slug": "alpha", "n": 1}]}"#,
        );
        let store = JsonFileCatalogStore::new();

        let catalog = store.load(&path).unwrap();
        store.save(&catalog, &path).unwrap();

        // Whatever happened, the file on disk parses as a catalog and
        // no temp file is left behind in the directory.
        assert!(store.load(&path).is_ok());
        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("seed.json")]);
    }

    #[test]
    fn test_save_into_missing_directory_is_write_error() {
        let dir = tempdir().unwrap();
        let store = JsonFileCatalogStore::new();
        let catalog = Catalog::from_value(json!({"tools": []})).unwrap();

        let err = store
            .save(&catalog, &dir.path().join("no/such/dir/seed.json"))
            .unwrap_err();
        assert!(matches!(err, CatalogStoreError::Write { .. }));
    }
}
