//! Datastore adapter
//!
//! [`JsonFactStore`] keeps the whole catalog in memory and persists it as a
//! single JSON [`Dataset`] snapshot.

mod dataset;
mod json_store;

pub use dataset::Dataset;
pub use json_store::JsonFactStore;
