//! Fact-checking catalog: who said what, where, and what backs it up.
//!
//! - [`Entity`]: a person or organisation credited as an author
//! - [`Source`]: a cited document with its authors
//! - [`Topic`]: a subject area with its expert roster
//! - [`Claim`]: a statement under scrutiny, quoted from a source
//! - [`Evidence`]: a source asserted to bear on a claim
//! - [`EvidenceReview`]: one reviewer's judgment of an evidence item
//! - [`User`]: the identity supplied by the upstream auth provider

pub mod claim;
pub mod evidence;
pub mod source;
pub mod user;

pub use claim::{Claim, NewClaim};
pub use evidence::{Evidence, EvidenceReview, NewEvidence, NewReview};
pub use source::{Entity, NewSource, Source, Topic};
pub use user::User;
