//! Identity configuration from TOML (`[identity]` section)

use serde::{Deserialize, Serialize};

/// Raw identity configuration from TOML
///
/// Writes need a user. When `user` is unset the CLI runs anonymously and
/// only read commands succeed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileIdentityConfig {
    /// Id of a user present in the dataset
    pub user: Option<u64>,
}
