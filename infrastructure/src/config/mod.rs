//! Configuration file loading for claimcheck
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CLAIMCHECK_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./claimcheck.toml` or `./.claimcheck.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/claimcheck/config.toml`
//! 5. Fallback: `~/.config/claimcheck/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileConsensusConfig, FileIdentityConfig, FileLoggingConfig, FileOutputConfig,
    FileStoreConfig,
};
pub use loader::ConfigLoader;
