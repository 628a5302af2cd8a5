//! Fact store port
//!
//! Defines the interface to the relational datastore that holds entities,
//! sources, topics, claims, evidence and reviews. The application layer only
//! issues simple keyed lookups and filtered lists; adapters live in the
//! infrastructure layer.

use async_trait::async_trait;
use claimcheck_domain::{
    Claim, ClaimId, Entity, EntityId, Evidence, EvidenceId, EvidenceReview, NewClaim, NewEvidence,
    NewReview, NewSource, Source, SourceId, Topic, TopicId, UserId,
};
use thiserror::Error;

/// Errors that can occur during datastore operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: u64 },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Corrupt data: {0}")]
    Corrupt(String),
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: impl Into<u64>) -> Self {
        StoreError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Result of writing a review for an (evidence, reviewer) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewUpsert {
    pub review: EvidenceReview,
    /// `true` when an earlier review by the same reviewer was replaced
    pub replaced: bool,
}

/// Datastore for the fact-checking catalog
///
/// Lookups by id fail with [`StoreError::NotFound`] when the record does not
/// exist. List operations return an empty vector instead.
#[async_trait]
pub trait FactStore: Send + Sync {
    async fn entity(&self, id: EntityId) -> Result<Entity, StoreError>;

    /// Entities in the order requested; any missing id is an error
    async fn entities(&self, ids: &[EntityId]) -> Result<Vec<Entity>, StoreError>;

    async fn source(&self, id: SourceId) -> Result<Source, StoreError>;

    async fn topic(&self, id: TopicId) -> Result<Topic, StoreError>;

    /// Topic with the lowest id, used when a claim is submitted without one
    async fn first_topic(&self) -> Result<Option<Topic>, StoreError>;

    async fn claim(&self, id: ClaimId) -> Result<Claim, StoreError>;

    /// All claims, newest first
    async fn claims(&self) -> Result<Vec<Claim>, StoreError>;

    async fn evidence(&self, id: EvidenceId) -> Result<Evidence, StoreError>;

    /// Evidence attached to a claim, oldest first
    async fn evidence_for_claim(&self, claim: ClaimId) -> Result<Vec<Evidence>, StoreError>;

    /// Reviews of one evidence item, in submission order
    async fn reviews_for_evidence(
        &self,
        evidence: EvidenceId,
    ) -> Result<Vec<EvidenceReview>, StoreError>;

    /// Store a new source; every author must already exist
    async fn insert_source(&self, draft: NewSource) -> Result<Source, StoreError>;

    async fn insert_claim(
        &self,
        draft: NewClaim,
        topic: Option<TopicId>,
        source_of_claim: SourceId,
        submitted_by: Option<UserId>,
    ) -> Result<Claim, StoreError>;

    async fn insert_evidence(
        &self,
        draft: NewEvidence,
        source_of_evidence: SourceId,
        submitted_by: Option<UserId>,
    ) -> Result<Evidence, StoreError>;

    /// Insert or replace the review for (evidence, reviewer)
    ///
    /// A replaced review keeps its id and its position in submission order.
    async fn upsert_review(
        &self,
        evidence: EvidenceId,
        reviewer: UserId,
        draft: NewReview,
    ) -> Result<ReviewUpsert, StoreError>;
}
