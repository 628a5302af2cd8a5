//! In-memory fakes for use case tests.

use crate::ports::activity_logger::{ActivityEvent, ActivityLogger};
use crate::ports::fact_store::{FactStore, ReviewUpsert, StoreError};
use crate::ports::identity::IdentityProvider;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use claimcheck_domain::{
    Claim, ClaimId, Entity, EntityId, Evidence, EvidenceId, EvidenceReview, NewClaim, NewEvidence,
    NewReview, NewSource, ReviewId, Source, SourceId, Topic, TopicId, User, UserId,
};
use std::sync::Mutex;

#[derive(Default)]
struct Tables {
    entities: Vec<Entity>,
    sources: Vec<Source>,
    topics: Vec<Topic>,
    claims: Vec<Claim>,
    evidence: Vec<Evidence>,
    reviews: Vec<EvidenceReview>,
    next_id: u64,
}

impl Tables {
    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Minimal `FactStore` backed by vectors.
#[derive(Default)]
pub(crate) struct FakeStore {
    tables: Mutex<Tables>,
}

impl FakeStore {
    pub fn new() -> Self {
        let store = Self::default();
        store.tables.lock().unwrap().next_id = 100;
        store
    }

    pub fn add_entity(&self, entity: Entity) {
        self.tables.lock().unwrap().entities.push(entity);
    }

    pub fn add_topic(&self, topic: Topic) {
        self.tables.lock().unwrap().topics.push(topic);
    }

    pub fn add_source(&self, id: u64, url: &str, authors: &[u64]) -> SourceId {
        let source = Source::from_draft(
            SourceId(id),
            NewSource::new(url).with_authors(authors.iter().copied().map(EntityId)),
            Utc.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).unwrap(),
        );
        self.tables.lock().unwrap().sources.push(source);
        SourceId(id)
    }

    pub fn add_claim(&self, id: u64, text: &str, topic: Option<u64>, source: SourceId) -> ClaimId {
        let claim = Claim::from_draft(
            ClaimId(id),
            NewClaim::new(text),
            topic.map(TopicId),
            source,
            None,
        );
        self.tables.lock().unwrap().claims.push(claim);
        ClaimId(id)
    }

    pub fn add_evidence(&self, id: u64, claim: ClaimId, source: SourceId) -> EvidenceId {
        let evidence = Evidence {
            id: EvidenceId(id),
            claim,
            source_of_evidence: source,
            description: format!("evidence {}", id),
            submitted_by: None,
        };
        self.tables.lock().unwrap().evidence.push(evidence);
        EvidenceId(id)
    }

    pub fn add_review(&self, evidence: EvidenceId, reviewer: u64, review: NewReview) {
        let mut tables = self.tables.lock().unwrap();
        let id = ReviewId(tables.allocate());
        tables
            .reviews
            .push(EvidenceReview::from_draft(id, evidence, UserId(reviewer), review));
    }

    pub fn review_count(&self) -> usize {
        self.tables.lock().unwrap().reviews.len()
    }
}

fn find<T: Clone>(rows: &[T], pred: impl Fn(&T) -> bool, kind: &'static str, id: u64) -> Result<T, StoreError> {
    rows.iter()
        .find(|row| pred(row))
        .cloned()
        .ok_or_else(|| StoreError::not_found(kind, id))
}

#[async_trait]
impl FactStore for FakeStore {
    async fn entity(&self, id: EntityId) -> Result<Entity, StoreError> {
        let tables = self.tables.lock().unwrap();
        find(&tables.entities, |e| e.id == id, "entity", id.value())
    }

    async fn entities(&self, ids: &[EntityId]) -> Result<Vec<Entity>, StoreError> {
        let tables = self.tables.lock().unwrap();
        ids.iter()
            .map(|id| find(&tables.entities, |e| e.id == *id, "entity", id.value()))
            .collect()
    }

    async fn source(&self, id: SourceId) -> Result<Source, StoreError> {
        let tables = self.tables.lock().unwrap();
        find(&tables.sources, |s| s.id == id, "source", id.value())
    }

    async fn topic(&self, id: TopicId) -> Result<Topic, StoreError> {
        let tables = self.tables.lock().unwrap();
        find(&tables.topics, |t| t.id == id, "topic", id.value())
    }

    async fn first_topic(&self) -> Result<Option<Topic>, StoreError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.topics.iter().min_by_key(|t| t.id).cloned())
    }

    async fn claim(&self, id: ClaimId) -> Result<Claim, StoreError> {
        let tables = self.tables.lock().unwrap();
        find(&tables.claims, |c| c.id == id, "claim", id.value())
    }

    async fn claims(&self) -> Result<Vec<Claim>, StoreError> {
        let mut claims = self.tables.lock().unwrap().claims.clone();
        claims.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(claims)
    }

    async fn evidence(&self, id: EvidenceId) -> Result<Evidence, StoreError> {
        let tables = self.tables.lock().unwrap();
        find(&tables.evidence, |e| e.id == id, "evidence", id.value())
    }

    async fn evidence_for_claim(&self, claim: ClaimId) -> Result<Vec<Evidence>, StoreError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.evidence.iter().filter(|e| e.claim == claim).cloned().collect())
    }

    async fn reviews_for_evidence(&self, evidence: EvidenceId) -> Result<Vec<EvidenceReview>, StoreError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.reviews.iter().filter(|r| r.evidence == evidence).cloned().collect())
    }

    async fn insert_source(&self, draft: NewSource) -> Result<Source, StoreError> {
        let mut tables = self.tables.lock().unwrap();
        for author in &draft.authors {
            find(&tables.entities, |e| e.id == *author, "entity", author.value())?;
        }
        let id = SourceId(tables.allocate());
        let source = Source::from_draft(id, draft, Utc::now());
        tables.sources.push(source.clone());
        Ok(source)
    }

    async fn insert_claim(
        &self,
        draft: NewClaim,
        topic: Option<TopicId>,
        source_of_claim: SourceId,
        submitted_by: Option<UserId>,
    ) -> Result<Claim, StoreError> {
        let mut tables = self.tables.lock().unwrap();
        let id = ClaimId(tables.allocate());
        let claim = Claim::from_draft(id, draft, topic, source_of_claim, submitted_by);
        tables.claims.push(claim.clone());
        Ok(claim)
    }

    async fn insert_evidence(
        &self,
        draft: NewEvidence,
        source_of_evidence: SourceId,
        submitted_by: Option<UserId>,
    ) -> Result<Evidence, StoreError> {
        let mut tables = self.tables.lock().unwrap();
        let id = EvidenceId(tables.allocate());
        let evidence = Evidence {
            id,
            claim: draft.claim,
            source_of_evidence,
            description: draft.description,
            submitted_by,
        };
        tables.evidence.push(evidence.clone());
        Ok(evidence)
    }

    async fn upsert_review(
        &self,
        evidence: EvidenceId,
        reviewer: UserId,
        draft: NewReview,
    ) -> Result<ReviewUpsert, StoreError> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(existing) = tables
            .reviews
            .iter_mut()
            .find(|r| r.evidence == evidence && r.reviewer == reviewer)
        {
            *existing = EvidenceReview::from_draft(existing.id, evidence, reviewer, draft);
            return Ok(ReviewUpsert {
                review: existing.clone(),
                replaced: true,
            });
        }
        let id = ReviewId(tables.allocate());
        let review = EvidenceReview::from_draft(id, evidence, reviewer, draft);
        tables.reviews.push(review.clone());
        Ok(ReviewUpsert {
            review,
            replaced: false,
        })
    }
}

/// Identity provider that always returns the same user.
pub(crate) struct FixedIdentity(pub Option<User>);

impl FixedIdentity {
    pub fn user(id: u64) -> Self {
        Self(Some(User::new(UserId(id), format!("user{}", id))))
    }
}

impl IdentityProvider for FixedIdentity {
    fn current_user(&self) -> Option<User> {
        self.0.clone()
    }
}

/// Activity logger that remembers event types.
#[derive(Default)]
pub(crate) struct RecordingLogger {
    pub events: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

impl RecordingLogger {
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }
}

impl ActivityLogger for RecordingLogger {
    fn log(&self, event: ActivityEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}
