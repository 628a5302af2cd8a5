//! Infrastructure layer for claimcheck
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod identity;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileConsensusConfig, FileIdentityConfig, FileLoggingConfig,
    FileOutputConfig, FileStoreConfig,
};
pub use identity::StaticIdentity;
pub use logging::JsonlActivityLogger;
pub use store::{Dataset, JsonFactStore};
