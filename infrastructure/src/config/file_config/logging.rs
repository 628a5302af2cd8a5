//! Activity log configuration from TOML (`[logging]` section)

use claimcheck_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving one line per write; disabled when unset
    pub activity_log: Option<PathBuf>,
}

impl FileLoggingConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        match &self.activity_log {
            Some(path) if path.as_os_str().is_empty() => vec![ConfigIssue::warning(
                ConfigIssueCode::EmptyPath {
                    field: "logging.activity_log".to_string(),
                },
                "logging.activity_log is empty; activity logging disabled",
            )],
            _ => vec![],
        }
    }

    /// The activity log path, if logging is enabled
    pub fn activity_log_path(&self) -> Option<&PathBuf> {
        self.activity_log
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
    }
}
