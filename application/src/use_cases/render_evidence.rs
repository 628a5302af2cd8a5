//! Render evidence use case
//!
//! Builds the read models served to API consumers. Consensus fields are
//! derived from the current reviews on every render; nothing derived is
//! written back to the store.

use crate::config::ConsensusParams;
use crate::ports::fact_store::{FactStore, StoreError};
use crate::use_cases::read_model::{ClaimView, ClaimWithEvidenceView, EvidenceView};
use crate::use_cases::shared::{roster_for_claim, source_view};
use claimcheck_domain::{Claim, ClaimId, Evidence, EvidenceConsensus, EvidenceId, ExpertRoster};
use futures::{StreamExt, TryStreamExt, stream};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while rendering read models
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl RenderError {
    /// Check if the requested record does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            RenderError::Store(e) => e.is_not_found(),
        }
    }
}

/// Use case for rendering claims and evidence with consensus
pub struct RenderEvidenceUseCase<S: FactStore + 'static> {
    store: Arc<S>,
    params: ConsensusParams,
}

impl<S: FactStore + 'static> RenderEvidenceUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            params: ConsensusParams::default(),
        }
    }

    pub fn with_params(mut self, params: ConsensusParams) -> Self {
        self.params = params;
        self
    }

    /// Render one evidence item
    pub async fn execute(&self, id: EvidenceId) -> Result<EvidenceView, RenderError> {
        let evidence = self.store.evidence(id).await?;
        let claim = self.store.claim(evidence.claim).await?;
        let roster = roster_for_claim(self.store.as_ref(), &claim).await?;

        Ok(self.render(evidence, &roster).await?)
    }

    /// Render a claim together with all of its evidence
    ///
    /// Evidence items are rendered concurrently (bounded by
    /// `max_concurrent_renders`) and returned in store order.
    pub async fn render_claim(&self, id: ClaimId) -> Result<ClaimWithEvidenceView, RenderError> {
        let claim = self.store.claim(id).await?;
        let roster = roster_for_claim(self.store.as_ref(), &claim).await?;
        let evidence = self.store.evidence_for_claim(id).await?;

        info!(
            "Rendering claim {} with {} evidence items ({} experts on roster)",
            id,
            evidence.len(),
            roster.len()
        );

        let related_evidence: Vec<EvidenceView> = stream::iter(evidence)
            .map(|item| self.render(item, &roster))
            .buffered(self.params.max_concurrent_renders.max(1))
            .try_collect()
            .await?;

        let claim = self.claim_view(claim).await?;

        Ok(ClaimWithEvidenceView {
            claim,
            related_evidence,
        })
    }

    /// All claims, newest first, without their evidence
    pub async fn list_claims(&self) -> Result<Vec<ClaimView>, RenderError> {
        let claims = self.store.claims().await?;
        let mut views = Vec::with_capacity(claims.len());
        for claim in claims {
            views.push(self.claim_view(claim).await?);
        }
        Ok(views)
    }

    async fn claim_view(&self, claim: Claim) -> Result<ClaimView, StoreError> {
        let topic = match claim.topic {
            Some(topic_id) => match self.store.topic(topic_id).await {
                Ok(topic) => Some(topic),
                Err(e) if e.is_not_found() => None,
                Err(e) => return Err(e),
            },
            None => None,
        };
        let source = source_view(self.store.as_ref(), claim.source_of_claim).await?;
        Ok(ClaimView::new(claim, topic, source))
    }

    async fn render(
        &self,
        evidence: Evidence,
        roster: &ExpertRoster,
    ) -> Result<EvidenceView, StoreError> {
        let reviews = self.store.reviews_for_evidence(evidence.id).await?;
        let consensus = EvidenceConsensus::compute(&reviews, roster, self.params.threshold);
        debug!(
            "Evidence {}: expert={} ({}), community={} ({})",
            evidence.id,
            consensus.expert_consensus_relationship,
            consensus.num_expert_reviews,
            consensus.community_consensus_relationship,
            consensus.num_community_reviews
        );

        let source = source_view(self.store.as_ref(), evidence.source_of_evidence).await?;
        Ok(EvidenceView::new(evidence, source, consensus))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::FakeStore;
    use claimcheck_domain::{
        ConsensusRelationship, ConsensusThreshold, Entity, EntityId, EvidenceRelationship,
        NewReview, Topic, TopicId, UserId,
    };

    /// Topic 1 has experts 1..=5; claim 10 has two evidence items.
    fn seeded() -> Arc<FakeStore> {
        let store = FakeStore::new();
        store.add_entity(Entity::new(EntityId(1), "Jane Doe").with_description("Epidemiologist"));
        store.add_topic(
            Topic::new(TopicId(1), "Health")
                .with_experts((1..=5).map(UserId).collect()),
        );
        let claim_source = store.add_source(1, "https://example.org/claim", &[1]);
        let evidence_source = store.add_source(2, "https://example.org/study", &[]);
        let claim = store.add_claim(10, "Vitamin C prevents colds", Some(1), claim_source);
        store.add_evidence(20, claim, evidence_source);
        store.add_evidence(21, claim, evidence_source);
        Arc::new(store)
    }

    fn review(rel: EvidenceRelationship) -> NewReview {
        NewReview::new(rel)
    }

    #[tokio::test]
    async fn test_expert_supermajority() {
        let store = seeded();
        for (reviewer, rel) in [
            (1, EvidenceRelationship::Supports),
            (2, EvidenceRelationship::Supports),
            (3, EvidenceRelationship::Supports),
            (4, EvidenceRelationship::Supports),
            (5, EvidenceRelationship::Disputes),
        ] {
            store.add_review(EvidenceId(20), reviewer, review(rel));
        }

        let view = RenderEvidenceUseCase::new(store).execute(EvidenceId(20)).await.unwrap();

        assert_eq!(
            view.consensus.expert_consensus_relationship,
            ConsensusRelationship::Agreed(EvidenceRelationship::Supports)
        );
        assert_eq!(view.consensus.num_expert_reviews, 5);
        assert!(view.consensus.community_consensus_relationship.is_split());
        assert_eq!(view.consensus.num_community_reviews, 0);
    }

    #[tokio::test]
    async fn test_unreviewed_evidence_is_split() {
        let view = RenderEvidenceUseCase::new(seeded())
            .execute(EvidenceId(21))
            .await
            .unwrap();
        assert_eq!(view.consensus, EvidenceConsensus::default());
    }

    #[tokio::test]
    async fn test_claim_without_topic_has_no_experts() {
        let store = FakeStore::new();
        let source = store.add_source(1, "https://example.org", &[]);
        let claim = store.add_claim(1, "No topic here", None, source);
        let evidence = store.add_evidence(2, claim, source);
        store.add_review(evidence, 1, review(EvidenceRelationship::Proves));

        let view = RenderEvidenceUseCase::new(Arc::new(store))
            .execute(evidence)
            .await
            .unwrap();

        assert_eq!(view.consensus.num_expert_reviews, 0);
        assert_eq!(view.consensus.num_community_reviews, 1);
        assert_eq!(
            view.consensus.community_consensus_relationship,
            ConsensusRelationship::Agreed(EvidenceRelationship::Proves)
        );
    }

    #[tokio::test]
    async fn test_missing_topic_is_treated_as_empty_roster() {
        let store = FakeStore::new();
        let source = store.add_source(1, "https://example.org", &[]);
        let claim = store.add_claim(1, "Dangling topic", Some(99), source);
        let evidence = store.add_evidence(2, claim, source);
        store.add_review(evidence, 1, review(EvidenceRelationship::Unrelated));

        let use_case = RenderEvidenceUseCase::new(Arc::new(store));
        let view = use_case.execute(evidence).await.unwrap();
        assert_eq!(view.consensus.num_community_reviews, 1);

        let claim_view = use_case.render_claim(claim).await.unwrap();
        assert!(claim_view.claim.topic.is_none());
    }

    #[tokio::test]
    async fn test_render_claim_keeps_evidence_order() {
        let store = seeded();
        store.add_review(EvidenceId(21), 42, review(EvidenceRelationship::Disproves));

        let view = RenderEvidenceUseCase::new(store)
            .with_params(ConsensusParams::default().with_max_concurrent_renders(1))
            .render_claim(ClaimId(10))
            .await
            .unwrap();

        let ids: Vec<_> = view.related_evidence.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![EvidenceId(20), EvidenceId(21)]);
        assert_eq!(view.claim.topic.as_ref().unwrap().name, "Health");
        assert_eq!(view.claim.source_of_claim.authors[0].short_bio, "Epidemiologist");
        assert_eq!(
            view.related_evidence[1].consensus.community_consensus_relationship,
            ConsensusRelationship::Agreed(EvidenceRelationship::Disproves)
        );
    }

    #[tokio::test]
    async fn test_custom_threshold_is_applied() {
        let store = seeded();
        store.add_review(EvidenceId(20), 100, review(EvidenceRelationship::Supports));
        store.add_review(EvidenceId(20), 101, review(EvidenceRelationship::Supports));
        store.add_review(EvidenceId(20), 102, review(EvidenceRelationship::Disputes));

        let default_view = RenderEvidenceUseCase::new(Arc::clone(&store))
            .execute(EvidenceId(20))
            .await
            .unwrap();
        assert!(default_view.consensus.community_consensus_relationship.is_split());

        let lenient = ConsensusParams::default().with_threshold(ConsensusThreshold::new(60).unwrap());
        let lenient_view = RenderEvidenceUseCase::new(store)
            .with_params(lenient)
            .execute(EvidenceId(20))
            .await
            .unwrap();
        assert_eq!(
            lenient_view.consensus.community_consensus_relationship,
            ConsensusRelationship::Agreed(EvidenceRelationship::Supports)
        );
    }

    #[tokio::test]
    async fn test_unknown_evidence_is_not_found() {
        let err = RenderEvidenceUseCase::new(seeded())
            .execute(EvidenceId(999))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_claims_newest_first() {
        let store = seeded();
        let source = store.add_source(3, "https://example.org/other", &[]);
        store.add_claim(11, "A newer claim", None, source);

        let claims = RenderEvidenceUseCase::new(store).list_claims().await.unwrap();
        let ids: Vec<_> = claims.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![ClaimId(11), ClaimId(10)]);
    }

    #[tokio::test]
    async fn test_evidence_view_json_fields() {
        let store = seeded();
        store.add_review(EvidenceId(20), 1, review(EvidenceRelationship::Proves));

        let view = RenderEvidenceUseCase::new(store).execute(EvidenceId(20)).await.unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["id"], 20);
        assert_eq!(json["source_of_evidence"]["url"], "https://example.org/study");
        assert_eq!(json["expert_consensus_relationship"], "PROVES");
        assert_eq!(json["num_expert_reviews"], 1);
        assert_eq!(json["community_consensus_relationship"], "SPLIT");
        assert_eq!(json["num_community_reviews"], 0);
    }
}
