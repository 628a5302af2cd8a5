//! Claims under scrutiny

use crate::core::error::DomainError;
use crate::core::ids::{ClaimId, SourceId, TopicId, UserId};
use crate::core::string::{char_len, truncate};
use serde::{Deserialize, Serialize};

/// A statement quoted from a source, open to evidence and review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub id: ClaimId,
    pub claim_text: String,
    #[serde(default)]
    pub description: String,
    /// Topic whose expert roster splits reviewers; `None` means no experts
    #[serde(default)]
    pub topic: Option<TopicId>,
    pub source_of_claim: SourceId,
    #[serde(default)]
    pub submitted_by: Option<UserId>,
}

impl Claim {
    pub const MAX_TEXT_LEN: usize = 200;
    const HEADLINE_LEN: usize = 30;

    pub fn from_draft(
        id: ClaimId,
        draft: NewClaim,
        topic: Option<TopicId>,
        source_of_claim: SourceId,
        submitted_by: Option<UserId>,
    ) -> Self {
        Self {
            id,
            claim_text: draft.claim_text,
            description: draft.description,
            topic,
            source_of_claim,
            submitted_by,
        }
    }

    /// Claim text cut to a short display form
    pub fn headline(&self) -> String {
        truncate(&self.claim_text, Self::HEADLINE_LEN)
    }
}

impl std::fmt::Display for Claim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Claim: \"{}\"", self.headline())
    }
}

/// Claim fields supplied by a submitter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewClaim {
    pub claim_text: String,
    pub description: String,
    pub topic: Option<TopicId>,
}

impl NewClaim {
    pub fn new(claim_text: impl Into<String>) -> Self {
        Self {
            claim_text: claim_text.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_topic(mut self, topic: TopicId) -> Self {
        self.topic = Some(topic);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.claim_text.trim().is_empty() {
            return Err(DomainError::validation("claim_text", "must not be empty"));
        }
        if char_len(&self.claim_text) > Claim::MAX_TEXT_LEN {
            return Err(DomainError::validation(
                "claim_text",
                format!("must be at most {} characters", Claim::MAX_TEXT_LEN),
            ));
        }
        Ok(())
    }
}
