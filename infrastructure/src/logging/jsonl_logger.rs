//! Append-only audit trail of catalog writes, one JSON object per line.
//!
//! Every line carries `type` (the event name) and `timestamp` (RFC 3339, UTC,
//! millisecond precision) next to the event's own fields:
//!
//! | `type`               | fields                                                                                    |
//! |----------------------|-------------------------------------------------------------------------------------------|
//! | `claim_submitted`    | `claim`, `source`, `topic` (nullable), `user`                                             |
//! | `evidence_submitted` | `evidence`, `claim`, `source`, `user`, `relationships` (labels of reviews filed with it)  |
//! | `review_recorded`    | `evidence`, `review`, `user`, `relationship`, `replaced`, `expert_consensus`, `community_consensus` |
//!
//! Ids are written as numbers and labels as their upper-case names. Events
//! missing a listed field are still written, with a warning.

use claimcheck_application::{ActivityEvent, ActivityLogger};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Fields each known event type is expected to carry
pub const EVENT_FIELDS: &[(&str, &[&str])] = &[
    ("claim_submitted", &["claim", "source", "topic", "user"]),
    (
        "evidence_submitted",
        &["evidence", "claim", "source", "user", "relationships"],
    ),
    (
        "review_recorded",
        &[
            "evidence",
            "review",
            "user",
            "relationship",
            "replaced",
            "expert_consensus",
            "community_consensus",
        ],
    ),
];

/// One line of the activity log
#[derive(Debug, Serialize)]
struct ActivityRecord<'a> {
    #[serde(rename = "type")]
    event_type: &'a str,
    timestamp: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl<'a> ActivityRecord<'a> {
    fn from_event(event: &'a ActivityEvent, timestamp: String) -> Self {
        let fields = match &event.payload {
            Value::Object(map) => map.clone(),
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other.clone());
                map
            }
        };
        Self {
            event_type: event.event_type,
            timestamp,
            fields,
        }
    }

    /// Documented fields absent from this record; unknown types have none
    fn missing_fields(&self) -> Vec<&'static str> {
        EVENT_FIELDS
            .iter()
            .find(|(name, _)| *name == self.event_type)
            .map(|(_, fields)| {
                fields
                    .iter()
                    .copied()
                    .filter(|field| !self.fields.contains_key(*field))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Activity logger backed by a JSONL file
pub struct JsonlActivityLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlActivityLogger {
    /// Open `path` for appending, creating it and its parent directories
    ///
    /// Returns `None` (after a warning) when the file cannot be opened, so a
    /// broken log location never blocks a write.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Cannot create activity log directory {}: {}", parent.display(), e);
            return None;
        }

        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(Self {
                writer: Mutex::new(BufWriter::new(file)),
                path: path.to_path_buf(),
            }),
            Err(e) => {
                warn!("Activity logging disabled, cannot open {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ActivityLogger for JsonlActivityLogger {
    fn log(&self, event: ActivityEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let record = ActivityRecord::from_event(&event, timestamp);

        let missing = record.missing_fields();
        if !missing.is_empty() {
            warn!("{} event is missing fields: {}", record.event_type, missing.join(", "));
        }

        let line = match serde_json::to_string(&record) {
            Ok(line) => line,
            Err(e) => {
                warn!("Dropping {} event: {}", record.event_type, e);
                return;
            }
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlActivityLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
