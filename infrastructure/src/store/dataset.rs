//! Serialized form of the catalog

use claimcheck_application::StoreError;
use claimcheck_domain::{Claim, Entity, Evidence, EvidenceReview, Source, Topic, User};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

/// Every table of the catalog, in insertion order
///
/// Row order is significant: reviews are tallied in the order stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub users: Vec<User>,
    pub entities: Vec<Entity>,
    pub sources: Vec<Source>,
    pub topics: Vec<Topic>,
    pub claims: Vec<Claim>,
    pub evidence: Vec<Evidence>,
    pub reviews: Vec<EvidenceReview>,
}

impl Dataset {
    /// Check keys and references
    ///
    /// Rejects duplicate ids, duplicate or malformed entity names, more than one
    /// review per (evidence, reviewer) pair, and rows pointing at records that
    /// do not exist. A claim's topic may dangle; readers treat it as having no experts.
    pub fn validate(&self) -> Result<(), StoreError> {
        unique("user", self.users.iter().map(|u| u.id))?;
        unique("entity", self.entities.iter().map(|e| e.id))?;
        unique("source", self.sources.iter().map(|s| s.id))?;
        unique("topic", self.topics.iter().map(|t| t.id))?;
        unique("claim", self.claims.iter().map(|c| c.id))?;
        unique("evidence", self.evidence.iter().map(|e| e.id))?;
        unique("review", self.reviews.iter().map(|r| r.id))?;
        unique("entity name", self.entities.iter().map(|e| e.name.as_str()))?;
        for entity in &self.entities {
            entity
                .validate()
                .map_err(|e| StoreError::Corrupt(format!("entity {}: {}", entity.id, e)))?;
        }
        unique(
            "review of (evidence, reviewer)",
            self.reviews.iter().map(|r| (r.evidence, r.reviewer)),
        )?;

        let entities: HashSet<_> = self.entities.iter().map(|e| e.id).collect();
        let sources: HashSet<_> = self.sources.iter().map(|s| s.id).collect();
        let claims: HashSet<_> = self.claims.iter().map(|c| c.id).collect();
        let evidence: HashSet<_> = self.evidence.iter().map(|e| e.id).collect();

        for source in &self.sources {
            if let Some(author) = source.authors.iter().find(|a| !entities.contains(a)) {
                return Err(dangling("source", source.id, "entity", author));
            }
        }
        for claim in &self.claims {
            if !sources.contains(&claim.source_of_claim) {
                return Err(dangling("claim", claim.id, "source", claim.source_of_claim));
            }
        }
        for item in &self.evidence {
            if !claims.contains(&item.claim) {
                return Err(dangling("evidence", item.id, "claim", item.claim));
            }
            if !sources.contains(&item.source_of_evidence) {
                return Err(dangling("evidence", item.id, "source", item.source_of_evidence));
            }
        }
        for review in &self.reviews {
            if !evidence.contains(&review.evidence) {
                return Err(dangling("review", review.id, "evidence", review.evidence));
            }
        }

        Ok(())
    }
}

fn unique<K, I>(what: &str, keys: I) -> Result<(), StoreError>
where
    K: Eq + Hash + std::fmt::Debug,
    I: IntoIterator<Item = K>,
{
    let mut seen = HashSet::new();
    for key in keys {
        if let Some(dup) = seen.replace(key) {
            return Err(StoreError::Corrupt(format!("duplicate {} {:?}", what, dup)));
        }
    }
    Ok(())
}

fn dangling(
    kind: &str,
    id: impl std::fmt::Display,
    target: &str,
    target_id: impl std::fmt::Display,
) -> StoreError {
    StoreError::Corrupt(format!(
        "{} {} references missing {} {}",
        kind, id, target, target_id
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use claimcheck_domain::{
        ClaimId, EntityId, EvidenceId, EvidenceRelationship, NewClaim, NewReview, NewSource,
        ReviewId, SourceId, TopicId, UserId,
    };

    fn sample() -> Dataset {
        let source = Source::from_draft(
            SourceId(1),
            NewSource::new("https://example.org").with_authors([EntityId(1)]),
            Utc::now(),
        );
        Dataset {
            users: vec![User::new(UserId(1), "alice")],
            entities: vec![Entity::new(EntityId(1), "Reuters")],
            sources: vec![source],
            topics: vec![Topic::new(TopicId(1), "Science")],
            claims: vec![Claim::from_draft(
                ClaimId(1),
                NewClaim::new("The moon is made of cheese"),
                Some(TopicId(1)),
                SourceId(1),
                Some(UserId(1)),
            )],
            evidence: vec![Evidence {
                id: EvidenceId(1),
                claim: ClaimId(1),
                source_of_evidence: SourceId(1),
                description: String::new(),
                submitted_by: None,
            }],
            reviews: vec![EvidenceReview::from_draft(
                ReviewId(1),
                EvidenceId(1),
                UserId(1),
                NewReview::new(EvidenceRelationship::Disproves),
            )],
        }
    }

    #[test]
    fn test_valid_dataset() {
        assert!(sample().validate().is_ok());
        assert!(Dataset::default().validate().is_ok());
    }

    #[test]
    fn test_duplicate_review_pair_is_corrupt() {
        let mut data = sample();
        let mut second = data.reviews[0].clone();
        second.id = ReviewId(2);
        data.reviews.push(second);

        let err = data.validate().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(msg) if msg.contains("evidence, reviewer")));
    }

    #[test]
    fn test_duplicate_entity_name_is_corrupt() {
        let mut data = sample();
        data.entities.push(Entity::new(EntityId(2), "Reuters"));
        assert!(matches!(data.validate(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_malformed_entity_name_is_corrupt() {
        let mut data = sample();
        data.entities[0].name = "   ".to_string();
        let err = data.validate().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(msg) if msg.starts_with("entity 1:")));

        let mut data = sample();
        data.entities[0].name = "x".repeat(Entity::MAX_NAME_LEN + 1);
        assert!(matches!(data.validate(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_dangling_reference_is_corrupt() {
        let mut data = sample();
        data.evidence[0].claim = ClaimId(9);
        let err = data.validate().unwrap_err();
        assert_eq!(
            err,
            StoreError::Corrupt("evidence 1 references missing claim 9".to_string())
        );
    }

    #[test]
    fn test_dangling_topic_is_allowed() {
        let mut data = sample();
        data.claims[0].topic = Some(TopicId(42));
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_unknown_review_label_deserializes() {
        let json = serde_json::json!({
            "reviews": [{
                "id": 1,
                "evidence": 1,
                "reviewer": 1,
                "deduced_evidence_relationship": "MOSTLY_TRUE"
            }]
        });
        let data: Dataset = serde_json::from_value(json).unwrap();
        assert_eq!(
            data.reviews[0].deduced_evidence_relationship,
            EvidenceRelationship::Unrecognized("MOSTLY_TRUE".to_string())
        );
    }
}
