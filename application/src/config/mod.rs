//! Application-level configuration.
//!
//! - [`ConsensusParams`]: threshold and concurrency for consensus rendering

pub mod consensus_params;

pub use consensus_params::ConsensusParams;
