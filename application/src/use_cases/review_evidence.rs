//! Review evidence use case
//!
//! Records the current user's judgment of how an evidence item relates to
//! its claim, and reports the consensus that results.

use crate::config::ConsensusParams;
use crate::ports::activity_logger::{ActivityEvent, ActivityLogger, NoActivityLogger};
use crate::ports::fact_store::{FactStore, StoreError};
use crate::ports::identity::IdentityProvider;
use crate::use_cases::shared::consensus_for_evidence;
use claimcheck_domain::{DomainError, EvidenceConsensus, EvidenceId, EvidenceReview, NewReview};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while recording a review
#[derive(Error, Debug)]
pub enum ReviewEvidenceError {
    #[error("Reviewing evidence requires an authenticated user")]
    Unauthenticated,

    #[error("Invalid review: {0}")]
    Invalid(#[from] DomainError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Input for the ReviewEvidence use case
#[derive(Debug, Clone)]
pub struct ReviewEvidenceInput {
    pub evidence: EvidenceId,
    pub review: NewReview,
}

impl ReviewEvidenceInput {
    pub fn new(evidence: EvidenceId, review: NewReview) -> Self {
        Self { evidence, review }
    }
}

/// Output of the ReviewEvidence use case
#[derive(Debug, Clone, Serialize)]
pub struct ReviewEvidenceOutput {
    pub review: EvidenceReview,
    /// Whether an earlier review by the same user was overwritten
    pub replaced: bool,
    /// Consensus after this review was recorded
    pub consensus: EvidenceConsensus,
}

/// Use case for reviewing an evidence item
pub struct ReviewEvidenceUseCase<S: FactStore + 'static> {
    store: Arc<S>,
    identity: Arc<dyn IdentityProvider>,
    logger: Arc<dyn ActivityLogger>,
    params: ConsensusParams,
}

impl<S: FactStore + 'static> ReviewEvidenceUseCase<S> {
    pub fn new(store: Arc<S>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            store,
            identity,
            logger: Arc::new(NoActivityLogger),
            params: ConsensusParams::default(),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ActivityLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_params(mut self, params: ConsensusParams) -> Self {
        self.params = params;
        self
    }

    pub async fn execute(
        &self,
        input: ReviewEvidenceInput,
    ) -> Result<ReviewEvidenceOutput, ReviewEvidenceError> {
        let user = self
            .identity
            .current_user()
            .ok_or(ReviewEvidenceError::Unauthenticated)?;

        input.review.validate()?;

        let evidence = self.store.evidence(input.evidence).await?;
        let upsert = self
            .store
            .upsert_review(evidence.id, user.id, input.review)
            .await?;
        let consensus =
            consensus_for_evidence(self.store.as_ref(), &evidence, self.params.threshold).await?;

        info!(
            "User {} {} review of evidence {}: {}",
            user.id,
            if upsert.replaced { "replaced" } else { "added" },
            evidence.id,
            upsert.review.deduced_evidence_relationship
        );
        self.logger.log(ActivityEvent::new(
            "review_recorded",
            json!({
                "evidence": evidence.id,
                "review": upsert.review.id,
                "user": user.id,
                "relationship": upsert.review.deduced_evidence_relationship.to_string(),
                "replaced": upsert.replaced,
                "expert_consensus": consensus.expert_consensus_relationship.to_string(),
                "community_consensus": consensus.community_consensus_relationship.to_string(),
            }),
        ));

        Ok(ReviewEvidenceOutput {
            review: upsert.review,
            replaced: upsert.replaced,
            consensus,
        })
    }
}
