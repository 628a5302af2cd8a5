//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod consensus;
mod identity;
mod logging;
mod output;
mod store;

pub use consensus::FileConsensusConfig;
pub use identity::FileIdentityConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use store::FileStoreConfig;

use claimcheck_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Consensus threshold and rendering settings
    pub consensus: FileConsensusConfig,
    /// Dataset location
    pub store: FileStoreConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Activity log settings
    pub logging: FileLoggingConfig,
    /// Who writes are attributed to
    pub identity: FileIdentityConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors make the configuration unusable; warnings are reported and the
    /// affected setting falls back to its default.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.consensus.to_params().1);
        issues.extend(self.store.validate());
        issues.extend(self.output.validate());
        issues.extend(self.logging.validate());
        issues
    }
}
