//! Shared utilities for use cases.
//!
//! Contains the roster lookup and source expansion used by both the read
//! path (RenderEvidence) and the write paths that report consensus back.

use crate::ports::fact_store::{FactStore, StoreError};
use crate::use_cases::read_model::SourceView;
use claimcheck_domain::{
    Claim, ConsensusThreshold, Evidence, EvidenceConsensus, ExpertRoster, SourceId,
};
use tracing::warn;

/// Expert roster governing reviews of evidence attached to `claim`.
///
/// A claim without a topic, or whose topic has disappeared from the store,
/// has an empty roster.
pub(crate) async fn roster_for_claim<S>(store: &S, claim: &Claim) -> Result<ExpertRoster, StoreError>
where
    S: FactStore + ?Sized,
{
    let Some(topic_id) = claim.topic else {
        return Ok(ExpertRoster::default());
    };

    match store.topic(topic_id).await {
        Ok(topic) => Ok(topic.experts),
        Err(e) if e.is_not_found() => {
            warn!(
                "Claim {} references missing topic {}; treating roster as empty",
                claim.id, topic_id
            );
            Ok(ExpertRoster::default())
        }
        Err(e) => Err(e),
    }
}

/// Load a source and expand its authors.
pub(crate) async fn source_view<S>(store: &S, id: SourceId) -> Result<SourceView, StoreError>
where
    S: FactStore + ?Sized,
{
    let source = store.source(id).await?;
    let authors = store.entities(&source.authors).await?;
    Ok(SourceView::new(source, authors))
}

/// Consensus for a single evidence item, looking up its claim's roster.
pub(crate) async fn consensus_for_evidence<S>(
    store: &S,
    evidence: &Evidence,
    threshold: ConsensusThreshold,
) -> Result<EvidenceConsensus, StoreError>
where
    S: FactStore + ?Sized,
{
    let claim = store.claim(evidence.claim).await?;
    let roster = roster_for_claim(store, &claim).await?;
    let reviews = store.reviews_for_evidence(evidence.id).await?;
    Ok(EvidenceConsensus::compute(&reviews, &roster, threshold))
}
