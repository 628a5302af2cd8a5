//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod read_model;
pub mod render_evidence;
pub mod review_evidence;
pub(crate) mod shared;
pub mod submit_claim;
pub mod submit_evidence;

#[cfg(test)]
pub(crate) mod test_support;
