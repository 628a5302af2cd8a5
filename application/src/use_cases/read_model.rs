//! Read models
//!
//! These are the shapes handed to API consumers. Field names match the JSON
//! served over the wire; consensus fields are computed at render time.

use claimcheck_domain::{
    Claim, ClaimId, Entity, EntityId, Evidence, EvidenceConsensus, EvidenceId, Source, SourceId,
    Topic,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An author as shown on a source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub name: String,
    pub short_bio: String,
}

impl From<Entity> for EntityView {
    fn from(entity: Entity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            short_bio: entity.description,
        }
    }
}

/// A source with its authors expanded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceView {
    pub id: SourceId,
    pub url: String,
    pub title: String,
    pub description: String,
    pub authors: Vec<EntityView>,
    pub date_retrieved: DateTime<Utc>,
}

impl SourceView {
    pub fn new(source: Source, authors: Vec<Entity>) -> Self {
        Self {
            id: source.id,
            url: source.url,
            title: source.title,
            description: source.description,
            authors: authors.into_iter().map(EntityView::from).collect(),
            date_retrieved: source.date_retrieved,
        }
    }

    /// Title, falling back to the url, for one-line display
    pub fn display_title(&self) -> &str {
        if !self.title.is_empty() {
            &self.title
        } else if !self.url.is_empty() {
            &self.url
        } else {
            "Untitled source"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicView {
    pub name: String,
}

impl From<Topic> for TopicView {
    fn from(topic: Topic) -> Self {
        Self { name: topic.name }
    }
}

/// An evidence item with consensus for both reviewer pools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceView {
    pub id: EvidenceId,
    pub source_of_evidence: SourceView,
    pub description: String,
    #[serde(flatten)]
    pub consensus: EvidenceConsensus,
}

impl EvidenceView {
    pub fn new(evidence: Evidence, source: SourceView, consensus: EvidenceConsensus) -> Self {
        Self {
            id: evidence.id,
            source_of_evidence: source,
            description: evidence.description,
            consensus,
        }
    }
}

/// A claim with its topic and source expanded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimView {
    pub id: ClaimId,
    pub claim_text: String,
    pub description: String,
    pub topic: Option<TopicView>,
    pub source_of_claim: SourceView,
}

impl ClaimView {
    pub fn new(claim: Claim, topic: Option<Topic>, source: SourceView) -> Self {
        Self {
            id: claim.id,
            claim_text: claim.claim_text,
            description: claim.description,
            topic: topic.map(TopicView::from),
            source_of_claim: source,
        }
    }
}

/// A claim together with every evidence item attached to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimWithEvidenceView {
    #[serde(flatten)]
    pub claim: ClaimView,
    pub related_evidence: Vec<EvidenceView>,
}
