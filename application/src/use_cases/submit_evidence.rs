//! Submit evidence use case
//!
//! Attaches a newly cited source to an existing claim, together with the
//! submitter's own reviews of it.

use crate::ports::activity_logger::{ActivityEvent, ActivityLogger, NoActivityLogger};
use crate::ports::fact_store::{FactStore, StoreError};
use crate::ports::identity::IdentityProvider;
use claimcheck_domain::{DomainError, Evidence, EvidenceReview, NewEvidence, NewReview, NewSource};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while submitting evidence
#[derive(Error, Debug)]
pub enum SubmitEvidenceError {
    #[error("Submitting evidence requires an authenticated user")]
    Unauthenticated,

    #[error("Invalid evidence: {0}")]
    Invalid(#[from] DomainError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Input for the SubmitEvidence use case
#[derive(Debug, Clone)]
pub struct SubmitEvidenceInput {
    pub evidence: NewEvidence,
    pub source: NewSource,
    /// Reviews recorded under the submitter's identity
    pub reviews: Vec<NewReview>,
}

impl SubmitEvidenceInput {
    pub fn new(evidence: NewEvidence, source: NewSource) -> Self {
        Self {
            evidence,
            source,
            reviews: Vec::new(),
        }
    }

    pub fn with_review(mut self, review: NewReview) -> Self {
        self.reviews.push(review);
        self
    }
}

/// Output of the SubmitEvidence use case
#[derive(Debug, Clone)]
pub struct SubmitEvidenceOutput {
    pub evidence: Evidence,
    /// Reviews as stored; several submitted reviews collapse into one
    pub reviews: Vec<EvidenceReview>,
}

/// Use case for submitting evidence for a claim
pub struct SubmitEvidenceUseCase<S: FactStore + 'static> {
    store: Arc<S>,
    identity: Arc<dyn IdentityProvider>,
    logger: Arc<dyn ActivityLogger>,
}

impl<S: FactStore + 'static> SubmitEvidenceUseCase<S> {
    pub fn new(store: Arc<S>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            store,
            identity,
            logger: Arc::new(NoActivityLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ActivityLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Validate everything up front, then write source, evidence and reviews.
    pub async fn execute(
        &self,
        input: SubmitEvidenceInput,
    ) -> Result<SubmitEvidenceOutput, SubmitEvidenceError> {
        let user = self
            .identity
            .current_user()
            .ok_or(SubmitEvidenceError::Unauthenticated)?;

        input.source.validate()?;
        for review in &input.reviews {
            review.validate()?;
        }

        // The claim must exist before anything is written
        let claim = self.store.claim(input.evidence.claim).await?;

        let source = self.store.insert_source(input.source).await?;
        let evidence = self
            .store
            .insert_evidence(input.evidence, source.id, Some(user.id))
            .await?;

        let mut reviews: Vec<EvidenceReview> = Vec::new();
        for draft in input.reviews {
            let upsert = self.store.upsert_review(evidence.id, user.id, draft).await?;
            match reviews.iter_mut().find(|r| r.id == upsert.review.id) {
                Some(existing) => *existing = upsert.review,
                None => reviews.push(upsert.review),
            }
        }

        info!(
            "User {} submitted evidence {} for claim {} with {} review(s)",
            user.id,
            evidence.id,
            claim.id,
            reviews.len()
        );
        self.logger.log(ActivityEvent::new(
            "evidence_submitted",
            json!({
                "evidence": evidence.id,
                "claim": claim.id,
                "source": source.id,
                "user": user.id,
                "relationships": reviews
                    .iter()
                    .map(|r| r.deduced_evidence_relationship.to_string())
                    .collect::<Vec<_>>(),
            }),
        ));

        Ok(SubmitEvidenceOutput { evidence, reviews })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{FakeStore, FixedIdentity, RecordingLogger};
    use claimcheck_domain::{ClaimId, EvidenceRelationship, UserId};

    fn store_with_claim() -> Arc<FakeStore> {
        let store = FakeStore::new();
        let source = store.add_source(1, "https://example.org/claim", &[]);
        store.add_claim(1, "Bananas are radioactive", None, source);
        Arc::new(store)
    }

    fn input() -> SubmitEvidenceInput {
        SubmitEvidenceInput::new(
            NewEvidence::new(ClaimId(1)).with_description("Potassium-40 content"),
            NewSource::new("https://example.org/physics").with_title("Banana equivalent dose"),
        )
    }

    #[tokio::test]
    async fn test_submit_evidence_with_review() {
        let store = store_with_claim();
        let logger = Arc::new(RecordingLogger::default());
        let use_case = SubmitEvidenceUseCase::new(Arc::clone(&store), Arc::new(FixedIdentity::user(3)))
            .with_logger(logger.clone());

        let output = use_case
            .execute(input().with_review(NewReview::new(EvidenceRelationship::Proves)))
            .await
            .unwrap();

        assert_eq!(output.evidence.claim, ClaimId(1));
        assert_eq!(output.evidence.submitted_by, Some(UserId(3)));
        assert_eq!(output.reviews.len(), 1);
        assert_eq!(output.reviews[0].reviewer, UserId(3));

        let stored = store.reviews_for_evidence(output.evidence.id).await.unwrap();
        assert_eq!(stored, output.reviews);
        assert_eq!(logger.event_types(), vec!["evidence_submitted"]);
    }

    #[tokio::test]
    async fn test_repeated_reviews_collapse_to_last() {
        let store = store_with_claim();
        let use_case = SubmitEvidenceUseCase::new(Arc::clone(&store), Arc::new(FixedIdentity::user(3)));

        let output = use_case
            .execute(
                input()
                    .with_review(NewReview::new(EvidenceRelationship::Supports))
                    .with_review(NewReview::new(EvidenceRelationship::Proves)),
            )
            .await
            .unwrap();

        assert_eq!(output.reviews.len(), 1);
        assert_eq!(
            output.reviews[0].deduced_evidence_relationship,
            EvidenceRelationship::Proves
        );
        assert_eq!(store.review_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_claim_writes_nothing() {
        let store = store_with_claim();
        let use_case = SubmitEvidenceUseCase::new(Arc::clone(&store), Arc::new(FixedIdentity::user(3)));

        let mut request = input();
        request.evidence.claim = ClaimId(404);
        let err = use_case.execute(request).await.unwrap_err();

        assert!(matches!(err, SubmitEvidenceError::Store(e) if e.is_not_found()));
        assert!(store.evidence_for_claim(ClaimId(404)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_review_rejects_whole_submission() {
        let store = store_with_claim();
        let use_case = SubmitEvidenceUseCase::new(Arc::clone(&store), Arc::new(FixedIdentity::user(3)));

        let request = input().with_review(
            NewReview::new(EvidenceRelationship::Supports).with_comments("x".repeat(600)),
        );
        let err = use_case.execute(request).await.unwrap_err();

        assert!(matches!(err, SubmitEvidenceError::Invalid(_)));
        assert!(store.evidence_for_claim(ClaimId(1)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_evidence_requires_user() {
        let use_case = SubmitEvidenceUseCase::new(store_with_claim(), Arc::new(FixedIdentity(None)));
        let err = use_case.execute(input()).await.unwrap_err();
        assert!(matches!(err, SubmitEvidenceError::Unauthenticated));
    }
}
