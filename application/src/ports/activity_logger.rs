//! Port for structured activity logging.
//!
//! Defines the [`ActivityLogger`] trait for recording write activity
//! (claims submitted, evidence submitted, reviews recorded) to a structured
//! log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures an audit
//! trail in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured activity event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. The adapter adds the timestamp.
pub struct ActivityEvent {
    /// Event type identifier (e.g., "claim_submitted", "review_recorded").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ActivityEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging activity events to a structured log.
///
/// `log` is synchronous and non-fallible; logging failures never abort a write.
pub trait ActivityLogger: Send + Sync {
    /// Record an activity event.
    fn log(&self, event: ActivityEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoActivityLogger;

impl ActivityLogger for NoActivityLogger {
    fn log(&self, _event: ActivityEvent) {}
}
