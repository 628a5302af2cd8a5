//! Evidence consensus domain
//!
//! Reviewers record how they think a piece of evidence relates to its claim.
//! This module turns those individual judgments into one verdict per
//! reviewer pool.
//!
//! # Core Concepts
//!
//! ## Relationship labels
//! [`EvidenceRelationship`] is the closed set a reviewer picks from
//! (PROVES, SUPPORTS, UNRELATED, INCONCLUSIVE, DISPUTES, DISPROVES).
//!
//! ## Pools
//! The claim's topic carries an [`ExpertRoster`]. Reviewers on it form the
//! expert pool; everyone else forms the community pool. The two pools never
//! overlap and together cover every review.
//!
//! ## Consensus
//! A pool agrees on a label when at least [`ConsensusThreshold`] (80% by
//! default, rounded up) of its reviews carry it. Otherwise the pool is
//! [`ConsensusRelationship::Split`].
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  reviews for one evidence item                               │
//! ├───────────────────────────────┬──────────────────────────────┤
//! │  expert pool (on roster)      │  community pool (the rest)   │
//! │  tally ─► ≥ ceil(n·80%) ?     │  tally ─► ≥ ceil(n·80%) ?    │
//! │  label | SPLIT                │  label | SPLIT               │
//! └───────────────────────────────┴──────────────────────────────┘
//! ```

pub mod engine;
pub mod relationship;
pub mod roster;
pub mod threshold;

pub use engine::{
    EvidenceConsensus, RelationshipTally, ReviewJudgment, compute_consensus,
    compute_consensus_with_threshold,
};
pub use relationship::{ConsensusRelationship, EvidenceRelationship};
pub use roster::{ExpertRoster, ReviewerPool};
pub use threshold::ConsensusThreshold;
