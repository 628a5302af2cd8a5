//! Domain layer for claimcheck
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! Claims are quoted from sources; evidence items cite further sources and
//! attach to exactly one claim; reviewers judge each evidence item.
//!
//! ## Consensus
//!
//! Review judgments are aggregated into one verdict per reviewer pool
//! (topic experts vs. community). Verdicts are derived on read, never stored.

pub mod catalog;
pub mod config;
pub mod consensus;
pub mod core;

// Re-export commonly used types
pub use catalog::{
    Claim, Entity, Evidence, EvidenceReview, NewClaim, NewEvidence, NewReview, NewSource, Source,
    Topic, User,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use consensus::{
    ConsensusRelationship, ConsensusThreshold, EvidenceConsensus, EvidenceRelationship,
    ExpertRoster, RelationshipTally, ReviewJudgment, ReviewerPool, compute_consensus,
    compute_consensus_with_threshold,
};
pub use core::{
    error::DomainError,
    ids::{ClaimId, EntityId, EvidenceId, ReviewId, SourceId, TopicId, UserId},
};
