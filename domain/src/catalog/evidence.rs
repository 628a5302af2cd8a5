//! Evidence items and their reviews

use crate::consensus::{EvidenceRelationship, ReviewJudgment};
use crate::core::error::DomainError;
use crate::core::ids::{ClaimId, EvidenceId, ReviewId, SourceId, UserId};
use crate::core::string::char_len;
use serde::{Deserialize, Serialize};

/// A source cited as bearing on a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub id: EvidenceId,
    pub claim: ClaimId,
    pub source_of_evidence: SourceId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub submitted_by: Option<UserId>,
}

/// Evidence fields supplied by a submitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvidence {
    pub claim: ClaimId,
    #[serde(default)]
    pub description: String,
}

impl NewEvidence {
    pub fn new(claim: ClaimId) -> Self {
        Self {
            claim,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// One reviewer's judgment of how an evidence item relates to its claim
///
/// At most one review exists per (evidence, reviewer) pair; the datastore
/// replaces an earlier review when the same reviewer submits again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceReview {
    pub id: ReviewId,
    pub evidence: EvidenceId,
    pub reviewer: UserId,
    pub deduced_evidence_relationship: EvidenceRelationship,
    #[serde(default)]
    pub deduced_source_degree: Option<String>,
    #[serde(default)]
    pub is_reliable: Option<bool>,
    #[serde(default)]
    pub additional_comments: String,
}

impl EvidenceReview {
    pub fn from_draft(id: ReviewId, evidence: EvidenceId, reviewer: UserId, draft: NewReview) -> Self {
        Self {
            id,
            evidence,
            reviewer,
            deduced_evidence_relationship: draft.deduced_evidence_relationship,
            deduced_source_degree: draft.deduced_source_degree,
            is_reliable: draft.is_reliable,
            additional_comments: draft.additional_comments,
        }
    }
}

impl ReviewJudgment for EvidenceReview {
    fn reviewer(&self) -> UserId {
        self.reviewer
    }

    fn relationship(&self) -> &EvidenceRelationship {
        &self.deduced_evidence_relationship
    }
}

/// Review fields supplied by a reviewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    pub deduced_evidence_relationship: EvidenceRelationship,
    #[serde(default)]
    pub deduced_source_degree: Option<String>,
    #[serde(default)]
    pub is_reliable: Option<bool>,
    #[serde(default)]
    pub additional_comments: String,
}

impl NewReview {
    pub const MAX_COMMENTS_LEN: usize = 500;

    pub fn new(relationship: EvidenceRelationship) -> Self {
        Self {
            deduced_evidence_relationship: relationship,
            deduced_source_degree: None,
            is_reliable: None,
            additional_comments: String::new(),
        }
    }

    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.additional_comments = comments.into();
        self
    }

    pub fn with_reliability(mut self, is_reliable: bool) -> Self {
        self.is_reliable = Some(is_reliable);
        self
    }

    pub fn with_source_degree(mut self, degree: impl Into<String>) -> Self {
        self.deduced_source_degree = Some(degree.into());
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.deduced_evidence_relationship.is_known() {
            return Err(DomainError::UnknownRelationship(
                self.deduced_evidence_relationship.to_string(),
            ));
        }
        if char_len(&self.additional_comments) > Self::MAX_COMMENTS_LEN {
            return Err(DomainError::validation(
                "additional_comments",
                format!("must be at most {} characters", Self::MAX_COMMENTS_LEN),
            ));
        }
        Ok(())
    }
}
