//! JSONL file writer for change events.
//!
//! Each [`ChangeEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered
//! writer. The file is opened in append mode: the audit trail of one
//! seed accumulates across patch runs.

use seedpatch_application::{ChangeEvent, ChangeLogger};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL change logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlChangeLogger {
    writer: Mutex<BufWriter<std::fs::File>>,
    path: PathBuf,
}

impl JsonlChangeLogger {
    /// Create a new logger appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened; auditing is an
    /// optional extra, so the caller downgrades to a warning.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create audit log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open audit log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChangeLogger for JsonlChangeLogger {
    fn log(&self, event: ChangeEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        // Envelope first so `type`/`timestamp` lead every line, then the
        // payload fields. A payload key named like the envelope loses.
        let mut record = serde_json::Map::new();
        record.insert(
            "type".to_string(),
            serde_json::Value::String(event.event_type.to_string()),
        );
        record.insert(
            "timestamp".to_string(),
            serde_json::Value::String(timestamp),
        );
        match event.payload {
            serde_json::Value::Object(fields) => {
                for (key, value) in fields {
                    record.insert(key, value);
                }
            }
            other => {
                record.insert("data".to_string(), other);
            }
        }

        let Ok(line) = serde_json::to_string(&serde_json::Value::Object(record)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // Flush per line so audit lines survive a crash mid-run
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlChangeLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
