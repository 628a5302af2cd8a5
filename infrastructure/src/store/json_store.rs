//! In-memory fact store with JSON snapshot persistence

use super::dataset::Dataset;
use async_trait::async_trait;
use chrono::Utc;
use claimcheck_application::{FactStore, ReviewUpsert, StoreError};
use claimcheck_domain::{
    Claim, ClaimId, Entity, EntityId, Evidence, EvidenceId, EvidenceReview, NewClaim, NewEvidence,
    NewReview, NewSource, ReviewId, Source, SourceId, Topic, TopicId, User, UserId,
};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Fact store holding a [`Dataset`] behind a read-write lock
///
/// Reads never touch the disk. Writes change memory only; call
/// [`save`](Self::save) to write the snapshot back.
pub struct JsonFactStore {
    data: RwLock<Dataset>,
    path: Option<PathBuf>,
}

impl JsonFactStore {
    /// Store over an in-memory dataset that is never persisted
    pub fn from_dataset(dataset: Dataset) -> Result<Self, StoreError> {
        dataset.validate()?;
        Ok(Self {
            data: RwLock::new(dataset),
            path: None,
        })
    }

    /// Load the snapshot at `path`
    ///
    /// A missing file yields an empty catalog that will be created on the
    /// first save.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let dataset = match tokio::fs::read(path).await {
            Ok(bytes) => serde_json::from_slice::<Dataset>(&bytes)
                .map_err(|e| StoreError::Corrupt(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Dataset {} does not exist; starting empty", path.display());
                Dataset::default()
            }
            Err(e) => return Err(StoreError::Io(format!("{}: {}", path.display(), e))),
        };
        dataset.validate()?;

        info!(
            "Loaded dataset {} ({} claims, {} evidence, {} reviews)",
            path.display(),
            dataset.claims.len(),
            dataset.evidence.len(),
            dataset.reviews.len()
        );

        Ok(Self {
            data: RwLock::new(dataset),
            path: Some(path.to_path_buf()),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write the snapshot back to its file
    ///
    /// The file is replaced atomically via a sibling temporary file. A store
    /// built with [`from_dataset`](Self::from_dataset) has nowhere to save to
    /// and this is a no-op.
    pub async fn save(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let bytes = {
            let data = self.data.read().await;
            serde_json::to_vec_pretty(&*data).map_err(|e| StoreError::Corrupt(e.to_string()))?
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(io_error(parent))?;
        }

        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        tokio::fs::write(&tmp, bytes).await.map_err(io_error(&tmp))?;
        tokio::fs::rename(&tmp, path).await.map_err(io_error(path))?;

        debug!("Saved dataset to {}", path.display());
        Ok(())
    }

    /// Copy of the current dataset
    pub async fn snapshot(&self) -> Dataset {
        self.data.read().await.clone()
    }

    /// Look up a user by id
    pub async fn user(&self, id: UserId) -> Result<User, StoreError> {
        let data = self.data.read().await;
        find(&data.users, |u| u.id == id, "user", id)
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |e| StoreError::Io(format!("{}: {}", path.display(), e))
}

fn find<T: Clone>(
    rows: &[T],
    pred: impl Fn(&T) -> bool,
    kind: &'static str,
    id: impl Into<u64>,
) -> Result<T, StoreError> {
    rows.iter()
        .find(|row| pred(row))
        .cloned()
        .ok_or_else(|| StoreError::not_found(kind, id))
}

fn exists<T>(rows: &[T], pred: impl Fn(&T) -> bool, kind: &'static str, id: impl Into<u64>) -> Result<(), StoreError> {
    if rows.iter().any(pred) {
        Ok(())
    } else {
        Err(StoreError::not_found(kind, id))
    }
}

/// Next id for a table: one past the largest in use
fn next_id<T>(rows: &[T], id: impl Fn(&T) -> u64) -> u64 {
    rows.iter().map(id).max().unwrap_or(0) + 1
}

#[async_trait]
impl FactStore for JsonFactStore {
    async fn entity(&self, id: EntityId) -> Result<Entity, StoreError> {
        let data = self.data.read().await;
        find(&data.entities, |e| e.id == id, "entity", id)
    }

    async fn entities(&self, ids: &[EntityId]) -> Result<Vec<Entity>, StoreError> {
        let data = self.data.read().await;
        ids.iter()
            .map(|id| find(&data.entities, |e| e.id == *id, "entity", *id))
            .collect()
    }

    async fn source(&self, id: SourceId) -> Result<Source, StoreError> {
        let data = self.data.read().await;
        find(&data.sources, |s| s.id == id, "source", id)
    }

    async fn topic(&self, id: TopicId) -> Result<Topic, StoreError> {
        let data = self.data.read().await;
        find(&data.topics, |t| t.id == id, "topic", id)
    }

    async fn first_topic(&self) -> Result<Option<Topic>, StoreError> {
        let data = self.data.read().await;
        Ok(data.topics.iter().min_by_key(|t| t.id).cloned())
    }

    async fn claim(&self, id: ClaimId) -> Result<Claim, StoreError> {
        let data = self.data.read().await;
        find(&data.claims, |c| c.id == id, "claim", id)
    }

    async fn claims(&self) -> Result<Vec<Claim>, StoreError> {
        let mut claims = self.data.read().await.claims.clone();
        claims.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(claims)
    }

    async fn evidence(&self, id: EvidenceId) -> Result<Evidence, StoreError> {
        let data = self.data.read().await;
        find(&data.evidence, |e| e.id == id, "evidence", id)
    }

    async fn evidence_for_claim(&self, claim: ClaimId) -> Result<Vec<Evidence>, StoreError> {
        let data = self.data.read().await;
        let mut evidence: Vec<Evidence> =
            data.evidence.iter().filter(|e| e.claim == claim).cloned().collect();
        evidence.sort_by_key(|e| e.id);
        Ok(evidence)
    }

    async fn reviews_for_evidence(
        &self,
        evidence: EvidenceId,
    ) -> Result<Vec<EvidenceReview>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .reviews
            .iter()
            .filter(|r| r.evidence == evidence)
            .cloned()
            .collect())
    }

    async fn insert_source(&self, draft: NewSource) -> Result<Source, StoreError> {
        let mut data = self.data.write().await;
        for author in &draft.authors {
            exists(&data.entities, |e| e.id == *author, "entity", *author)?;
        }

        let id = SourceId(next_id(&data.sources, |s| s.id.value()));
        let source = Source::from_draft(id, draft, Utc::now());
        data.sources.push(source.clone());
        debug!("Inserted source {}", id);
        Ok(source)
    }

    async fn insert_claim(
        &self,
        draft: NewClaim,
        topic: Option<TopicId>,
        source_of_claim: SourceId,
        submitted_by: Option<UserId>,
    ) -> Result<Claim, StoreError> {
        let mut data = self.data.write().await;
        exists(&data.sources, |s| s.id == source_of_claim, "source", source_of_claim)?;
        if let Some(topic) = topic {
            exists(&data.topics, |t| t.id == topic, "topic", topic)?;
        }

        let id = ClaimId(next_id(&data.claims, |c| c.id.value()));
        let claim = Claim::from_draft(id, draft, topic, source_of_claim, submitted_by);
        data.claims.push(claim.clone());
        debug!("Inserted claim {}", id);
        Ok(claim)
    }

    async fn insert_evidence(
        &self,
        draft: NewEvidence,
        source_of_evidence: SourceId,
        submitted_by: Option<UserId>,
    ) -> Result<Evidence, StoreError> {
        let mut data = self.data.write().await;
        exists(&data.claims, |c| c.id == draft.claim, "claim", draft.claim)?;
        exists(&data.sources, |s| s.id == source_of_evidence, "source", source_of_evidence)?;

        let evidence = Evidence {
            id: EvidenceId(next_id(&data.evidence, |e| e.id.value())),
            claim: draft.claim,
            source_of_evidence,
            description: draft.description,
            submitted_by,
        };
        data.evidence.push(evidence.clone());
        debug!("Inserted evidence {} for claim {}", evidence.id, evidence.claim);
        Ok(evidence)
    }

    async fn upsert_review(
        &self,
        evidence: EvidenceId,
        reviewer: UserId,
        draft: NewReview,
    ) -> Result<ReviewUpsert, StoreError> {
        let mut data = self.data.write().await;
        exists(&data.evidence, |e| e.id == evidence, "evidence", evidence)?;

        if let Some(existing) = data
            .reviews
            .iter_mut()
            .find(|r| r.evidence == evidence && r.reviewer == reviewer)
        {
            *existing = EvidenceReview::from_draft(existing.id, evidence, reviewer, draft);
            debug!("Replaced review {} of evidence {}", existing.id, evidence);
            return Ok(ReviewUpsert {
                review: existing.clone(),
                replaced: true,
            });
        }

        let id = ReviewId(next_id(&data.reviews, |r| r.id.value()));
        let review = EvidenceReview::from_draft(id, evidence, reviewer, draft);
        data.reviews.push(review.clone());
        debug!("Inserted review {} of evidence {}", id, evidence);
        Ok(ReviewUpsert {
            review,
            replaced: false,
        })
    }
}
