//! Port for structured change auditing.
//!
//! Defines the [`ChangeLogger`] trait for recording what a patch run did
//! (records patched, run summary) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures an append-only,
//! machine-readable audit trail (JSONL) of applied changes.

use serde_json::Value;

/// A structured change event for auditing.
pub struct ChangeEvent {
    /// Event type identifier (e.g., "record_patched", "run_completed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ChangeEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for recording change events.
///
/// Implementations write each event as a single record (e.g., one JSONL
/// line). The `log` method is intentionally synchronous and non-fallible:
/// an audit trail that cannot be written must not abort the run, so
/// failures are downgraded to warnings inside the implementation.
pub trait ChangeLogger: Send + Sync {
    /// Record a change event.
    fn log(&self, event: ChangeEvent);
}

/// No-op implementation for tests and when auditing is disabled.
pub struct NoChangeLogger;

impl ChangeLogger for NoChangeLogger {
    fn log(&self, _event: ChangeEvent) {}
}
