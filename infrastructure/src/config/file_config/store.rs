//! Dataset configuration from TOML (`[store]` section)

use claimcheck_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw store configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// JSON dataset snapshot that reads come from and writes go back to
    pub dataset: PathBuf,
}

impl FileStoreConfig {
    pub const DEFAULT_DATASET: &'static str = "claimcheck.json";

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.dataset.as_os_str().is_empty() {
            vec![ConfigIssue::error(
                ConfigIssueCode::EmptyPath {
                    field: "store.dataset".to_string(),
                },
                "store.dataset must not be empty",
            )]
        } else {
            vec![]
        }
    }
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(Self::DEFAULT_DATASET),
        }
    }
}
